//! Regex matching modes and replacement template expansion.

use regex::{Captures, Match, Regex};

/// How a pattern applies at a starting offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The match must begin exactly at the starting offset.
    Anchored,
    /// The first match at or after the starting offset is taken.
    Search,
}

/// Finds the next match of `pattern` in `haystack` at or after `start`,
/// honoring the match mode.
pub(crate) fn find_at<'h>(
    pattern: &Regex,
    haystack: &'h str,
    start: usize,
    mode: MatchMode,
) -> Option<Match<'h>> {
    let found = pattern.find_at(haystack, start)?;
    match mode {
        MatchMode::Anchored if found.start() != start => None,
        _ => Some(found),
    }
}

/// Like [`find_at`], but returns the full capture groups.
pub(crate) fn captures_at<'h>(
    pattern: &Regex,
    haystack: &'h str,
    start: usize,
    mode: MatchMode,
) -> Option<Captures<'h>> {
    let caps = pattern.captures_at(haystack, start)?;
    let found = caps.get(0)?;
    match mode {
        MatchMode::Anchored if found.start() != start => None,
        _ => Some(caps),
    }
}

/// The whole-match group of a set of captures.
pub(crate) fn whole<'h>(caps: &Captures<'h>) -> Match<'h> {
    caps.get(0).expect("capture group 0 always participates")
}

/// Expands a replacement template against a match.
///
/// Supports `$$` (literal dollar), `$&` (the whole match), `` $` `` (the
/// text before the match), `$'` (the text after it), and `$1` through `$99`
/// (numbered groups). A reference to a group the pattern doesn't have is
/// kept literally, so `"$1,000"` stays intact under a group-free pattern.
pub(crate) fn expand_template(caps: &Captures<'_>, haystack: &str, template: &str) -> String {
    let found = whole(caps);
    let chars: Vec<char> = template.chars().collect();
    let mut result = String::with_capacity(template.len());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c != '$' || i + 1 >= chars.len() {
            result.push(c);
            i += 1;
            continue;
        }

        let next = chars[i + 1];
        i += 2;
        match next {
            '$' => result.push('$'),
            '&' => result.push_str(found.as_str()),
            '`' => result.push_str(&haystack[..found.start()]),
            '\'' => result.push_str(&haystack[found.end()..]),
            d @ '0'..='9' => {
                let mut index = d as usize - '0' as usize;
                let mut digits = 1;
                if i < chars.len() && chars[i].is_ascii_digit() {
                    index = index * 10 + (chars[i] as usize - '0' as usize);
                    digits = 2;
                    i += 1;
                }
                if index >= 1 && index < caps.len() {
                    if let Some(group) = caps.get(index) {
                        result.push_str(group.as_str());
                    }
                } else {
                    result.push('$');
                    for k in 0..digits {
                        result.push(chars[i - digits + k]);
                    }
                }
            }
            other => {
                result.push('$');
                result.push(other);
            }
        }
    }

    result
}
