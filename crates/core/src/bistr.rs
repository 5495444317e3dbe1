//! A bidirectionally transformed string: the original text, the modified
//! text, and the alignment between them.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::alignment::{Alignment, Span};
use crate::builder::BiStringBuilder;
use crate::error::{Error, Result};
use crate::pattern;
pub use crate::unicode::NormalForm;
use crate::unicode;

// Beyond `\s`, JavaScript-style trimming also strips no-break spaces and
// zero-width no-break spaces.
static TRIM_BOTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[\s\x{FEFF}\x{A0}]+|[\s\x{FEFF}\x{A0}]+\z").unwrap());
static TRIM_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[\s\x{FEFF}\x{A0}]+").unwrap());
static TRIM_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}\x{A0}]+\z").unwrap());

/// An immutable string that remembers what it used to be.
///
/// Every `BiString` carries an original string, a modified string, and an
/// [`Alignment`] between them, so any span of the modified text can be
/// traced back to the original text it came from. All positions are byte
/// offsets lying on `char` boundaries.
///
/// ```
/// use weft_core::{BiString, Span};
///
/// let bs = BiString::new("HELLO WORLD").to_lowercase();
/// assert_eq!(bs.modified(), "hello world");
/// let span = bs.alignment().original_bounds_of(Span::new(6, 11));
/// assert_eq!(&bs.original()[span.to_range()], "WORLD");
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiString {
    original: String,
    modified: String,
    alignment: Alignment,
}

impl BiString {
    /// An unmodified string, aligned with itself at every char boundary.
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let alignment = char_identity(&original);
        Self { modified: original.clone(), original, alignment }
    }

    /// An opaque replacement: `original` became `modified` with no finer
    /// correspondence between them.
    pub fn chunk(original: impl Into<String>, modified: impl Into<String>) -> Self {
        let original = original.into();
        let modified = modified.into();
        let alignment = Alignment::from_values(vec![(0, 0), (original.len(), modified.len())]);
        Self { original, modified, alignment }
    }

    /// Builds a `BiString` from its parts, validating that the alignment
    /// spans exactly both strings.
    pub fn with_alignment(
        original: impl Into<String>,
        modified: impl Into<String>,
        alignment: Alignment,
    ) -> Result<Self> {
        let original = original.into();
        let modified = modified.into();

        let bounds = alignment.original_bounds();
        if bounds != Span::new(0, original.len()) {
            return Err(Error::AlignmentOutOfBounds {
                side: "original",
                start: bounds.start,
                end: bounds.end,
                len: original.len(),
            });
        }
        let bounds = alignment.modified_bounds();
        if bounds != Span::new(0, modified.len()) {
            return Err(Error::AlignmentOutOfBounds {
                side: "modified",
                start: bounds.start,
                end: bounds.end,
                len: modified.len(),
            });
        }

        Ok(Self { original, modified, alignment })
    }

    /// Heuristically aligns two forms of the same text, tolerating case
    /// changes, accent stripping, and small edits. See [`crate::infer`].
    pub fn infer(original: &str, modified: &str) -> Self {
        crate::infer::heuristic_infer(original, modified)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn modified(&self) -> &str {
        &self.modified
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// The length of the modified text, in bytes.
    pub fn len(&self) -> usize {
        self.modified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modified.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.modified.chars()
    }

    // ------------------------------------------------------------------
    // Slicing and concatenation
    // ------------------------------------------------------------------

    /// The sub-string covering `[start, end)` of the modified text, with
    /// the matching original text and a re-based alignment. Out-of-range
    /// positions are clamped and a reversed range is reordered.
    ///
    /// # Panics
    ///
    /// Panics if a position falls inside a multi-byte `char`.
    pub fn slice(&self, start: usize, end: usize) -> BiString {
        let len = self.len();
        let mut start = start.min(len);
        let mut end = end.min(len);
        if end < start {
            std::mem::swap(&mut start, &mut end);
        }

        let alignment = self.alignment.slice_by_modified(Span::new(start, end));
        let o_span = alignment.original_bounds();
        let m_span = alignment.modified_bounds();
        let original = self.original[o_span.to_range()].to_string();
        let modified = self.modified[m_span.to_range()].to_string();
        let alignment = alignment.shift(-(o_span.start as isize), -(m_span.start as isize));
        Self { original, modified, alignment }
    }

    /// Concatenates two `BiString`s, preserving both their histories.
    pub fn concat(&self, other: &BiString) -> BiString {
        let mut original = self.original.clone();
        original.push_str(&other.original);
        let mut modified = self.modified.clone();
        modified.push_str(&other.modified);
        let alignment = self.alignment.concat(
            &other
                .alignment
                .shift(self.original.len() as isize, self.modified.len() as isize),
        );
        Self { original, modified, alignment }
    }

    /// Swaps the original and modified strings.
    pub fn inverse(&self) -> BiString {
        Self {
            original: self.modified.clone(),
            modified: self.original.clone(),
            alignment: self.alignment.inverse(),
        }
    }

    // ------------------------------------------------------------------
    // Searching
    // ------------------------------------------------------------------

    /// The position of the first occurrence of `pattern` in the modified
    /// text at or after `from`.
    pub fn find(&self, pattern: &str, from: usize) -> Option<usize> {
        if from > self.len() {
            return None;
        }
        self.modified[from..].find(pattern).map(|i| i + from)
    }

    /// The position of the last occurrence of `pattern` starting at or
    /// before `from`.
    pub fn rfind(&self, pattern: &str, from: usize) -> Option<usize> {
        let end = from.saturating_add(pattern.len()).min(self.len());
        self.modified[..end].rfind(pattern)
    }

    /// Like [`find`](Self::find), returning the full matched span.
    pub fn bounds_of(&self, pattern: &str, from: usize) -> Option<Span> {
        self.find(pattern, from)
            .map(|start| Span::new(start, start + pattern.len()))
    }

    /// Like [`rfind`](Self::rfind), returning the full matched span.
    pub fn last_bounds_of(&self, pattern: &str, from: usize) -> Option<Span> {
        self.rfind(pattern, from)
            .map(|start| Span::new(start, start + pattern.len()))
    }

    /// The position of the first regex match in the modified text.
    pub fn search(&self, pattern: &Regex) -> Option<usize> {
        pattern.find(&self.modified).map(|m| m.start())
    }

    /// The span of the first regex match in the modified text.
    pub fn search_bounds(&self, pattern: &Regex) -> Option<Span> {
        pattern
            .find(&self.modified)
            .map(|m| Span::new(m.start(), m.end()))
    }

    /// The capture groups of the first regex match in the modified text.
    pub fn captures<'a>(&'a self, pattern: &Regex) -> Option<Captures<'a>> {
        pattern.captures(&self.modified)
    }

    /// Lazily iterates every non-overlapping regex match in the modified
    /// text.
    pub fn find_matches<'a>(&'a self, pattern: &'a Regex) -> regex::Matches<'a, 'a> {
        pattern.find_iter(&self.modified)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.modified.starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.modified.ends_with(suffix)
    }

    // ------------------------------------------------------------------
    // Replacement
    // ------------------------------------------------------------------

    fn finish(mut builder: BiStringBuilder) -> BiString {
        builder.skip_rest();
        builder.build().expect("builder consumed the whole string")
    }

    /// Replaces every literal occurrence of `pattern` with `replacement`.
    pub fn replace(&self, pattern: &str, replacement: &str) -> BiString {
        let mut builder = BiStringBuilder::new(self.clone());
        if !pattern.is_empty() {
            while let Some(next) = self.find(pattern, builder.position()) {
                builder.skip(next - builder.position());
                builder.replace(pattern.len(), replacement);
            }
        }
        Self::finish(builder)
    }

    /// Replaces every regex match with the expansion of a replacement
    /// template (see [`crate::pattern`] for the supported syntax).
    pub fn replace_re(&self, pattern: &Regex, replacement: &str) -> BiString {
        let mut builder = BiStringBuilder::new(self.clone());
        builder.replace_all(pattern, replacement);
        Self::finish(builder)
    }

    /// Replaces every regex match with a `BiString` produced by `replacer`.
    ///
    /// Fails if a replacement's original text doesn't match the text it
    /// replaces.
    pub fn replace_re_with<F>(&self, pattern: &Regex, replacer: F) -> Result<BiString>
    where
        F: FnMut(&Captures<'_>) -> BiString,
    {
        let mut builder = BiStringBuilder::new(self.clone());
        builder.replace_all_with(pattern, replacer)?;
        Ok(Self::finish(builder))
    }

    pub fn trim(&self) -> BiString {
        self.replace_re(&TRIM_BOTH, "")
    }

    pub fn trim_start(&self) -> BiString {
        self.replace_re(&TRIM_START, "")
    }

    pub fn trim_end(&self) -> BiString {
        self.replace_re(&TRIM_END, "")
    }

    fn padding(pad: &str, target: usize) -> BiString {
        let mut padding = String::new();
        for c in pad.chars().cycle() {
            if padding.len() + c.len_utf8() > target {
                break;
            }
            padding.push(c);
        }
        BiString::chunk("", padding)
    }

    /// Prepends repetitions of `pad` until the modified text is at least
    /// `target_len` bytes long.
    pub fn pad_start(&self, target_len: usize, pad: &str) -> BiString {
        let missing = target_len.saturating_sub(self.len());
        if missing == 0 || pad.is_empty() {
            return self.clone();
        }
        Self::padding(pad, missing).concat(self)
    }

    /// Appends repetitions of `pad` until the modified text is at least
    /// `target_len` bytes long.
    pub fn pad_end(&self, target_len: usize, pad: &str) -> BiString {
        let missing = target_len.saturating_sub(self.len());
        if missing == 0 || pad.is_empty() {
            return self.clone();
        }
        self.concat(&Self::padding(pad, missing))
    }

    // ------------------------------------------------------------------
    // Splitting and joining
    // ------------------------------------------------------------------

    /// Splits on every literal occurrence of `separator`. An empty
    /// separator splits between every `char`.
    pub fn split(&self, separator: &str) -> Vec<BiString> {
        if separator.is_empty() {
            return self
                .modified
                .char_indices()
                .map(|(i, c)| self.slice(i, i + c.len_utf8()))
                .collect();
        }

        let mut result = Vec::new();
        let mut start = 0;
        loop {
            match self.find(separator, start) {
                Some(next) => {
                    result.push(self.slice(start, next));
                    start = next + separator.len();
                }
                None => {
                    result.push(self.slice(start, self.len()));
                    return result;
                }
            }
        }
    }

    /// Splits on every regex match. Patterns with capture groups are
    /// rejected, since what to do with the captured text is ambiguous.
    pub fn split_re(&self, pattern: &Regex) -> Result<Vec<BiString>> {
        if pattern.captures_len() > 1 {
            return Err(Error::CaptureGroupsUnsupported);
        }

        let mut result = Vec::new();
        let mut start = 0;
        for m in pattern.find_iter(&self.modified) {
            result.push(self.slice(start, m.start()));
            start = m.end();
        }
        result.push(self.slice(start, self.len()));
        Ok(result)
    }

    /// Joins the given strings with this one as the separator.
    pub fn join<I>(&self, items: I) -> BiString
    where
        I: IntoIterator,
        I::Item: Into<BiString>,
    {
        let mut iter = items.into_iter();
        let Some(first) = iter.next() else {
            return BiString::new("");
        };
        let mut result = first.into();
        for item in iter {
            result = result.concat(self).concat(&item.into());
        }
        result
    }

    // ------------------------------------------------------------------
    // Unicode transforms
    // ------------------------------------------------------------------

    /// Converts the modified text to the given Unicode normalization form,
    /// tracing each base-plus-combining-marks run to its normalized form.
    pub fn normalize(&self, form: NormalForm) -> BiString {
        self.replace_re_with(&unicode::GLYPH, |caps| {
            let text = pattern::whole(caps).as_str();
            let normalized = form.apply(text);
            if normalized == text {
                BiString::new(text)
            } else {
                BiString::chunk(text, normalized)
            }
        })
        .expect("glyph replacements cover the matched text")
    }

    /// Lowercases the modified text with full Unicode mappings, including
    /// the Greek final sigma rule.
    pub fn to_lowercase(&self) -> BiString {
        self.replace_re_with(&unicode::CHANGES_WHEN_LOWERCASED, |caps| {
            let found = pattern::whole(caps);
            let text = found.as_str();
            if text == "\u{03a3}" && self.is_final_sigma(found.start()) {
                BiString::chunk(text, "\u{03c2}")
            } else {
                let lower: String = text.chars().flat_map(char::to_lowercase).collect();
                BiString::chunk(text, lower)
            }
        })
        .expect("casing replacements cover the matched text")
    }

    /// Uppercases the modified text with full Unicode mappings (so
    /// straße becomes STRASSE).
    pub fn to_uppercase(&self) -> BiString {
        self.replace_re_with(&unicode::CHANGES_WHEN_UPPERCASED, |caps| {
            let text = pattern::whole(caps).as_str();
            let upper: String = text.chars().flat_map(char::to_uppercase).collect();
            BiString::chunk(text, upper)
        })
        .expect("casing replacements cover the matched text")
    }

    /// Whether a capital sigma at byte position `index` is in final
    /// position: no cased character follows before the next case-ignorable
    /// break, and a cased character precedes it.
    fn is_final_sigma(&self, index: usize) -> bool {
        let after = &self.modified[index + '\u{03a3}'.len_utf8()..];
        for c in after.chars() {
            if !unicode::is_case_ignorable(c) {
                if unicode::is_cased(c) {
                    return false;
                }
                break;
            }
        }
        for c in self.modified[..index].chars().rev() {
            if !unicode::is_case_ignorable(c) {
                return unicode::is_cased(c);
            }
        }
        false
    }
}

/// The identity alignment over a string's char boundaries.
fn char_identity(s: &str) -> Alignment {
    let mut pairs: Vec<(usize, usize)> = s.char_indices().map(|(i, _)| (i, i)).collect();
    pairs.push((s.len(), s.len()));
    Alignment::from_values(pairs)
}

impl From<&str> for BiString {
    fn from(original: &str) -> Self {
        Self::new(original)
    }
}

impl From<String> for BiString {
    fn from(original: String) -> Self {
        Self::new(original)
    }
}

impl fmt::Display for BiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.modified)
    }
}

impl fmt::Debug for BiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.original == self.modified {
            write!(f, "\u{2b8e}{:?}\u{2b8c}", self.modified)
        } else {
            write!(f, "({:?} \u{21cb} {:?})", self.original, self.modified)
        }
    }
}
