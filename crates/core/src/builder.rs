//! Incremental construction of [`BiString`]s.
//!
//! A [`BiStringBuilder`] walks a cursor over its base string, emitting
//! skipped, inserted, discarded, or replaced text as it goes. Building on
//! top of an already-modified `BiString` composes the new edits onto the
//! existing alignment, so multi-pass pipelines stay traceable end to end.

use regex::{Captures, Regex};

use crate::alignment::Alignment;
use crate::bistr::BiString;
use crate::error::{Error, Result};
use crate::pattern::{self, MatchMode};

/// Builds a [`BiString`] one edit at a time.
///
/// The cursor starts at the beginning of the current string (the base's
/// modified text) and must reach its end before [`build`](Self::build)
/// succeeds.
pub struct BiStringBuilder {
    base: BiString,
    modified: String,
    alignment: Vec<(usize, usize)>,
    o_pos: usize,
    m_pos: usize,
}

impl BiStringBuilder {
    pub fn new(base: impl Into<BiString>) -> Self {
        Self {
            base: base.into(),
            modified: String::new(),
            alignment: vec![(0, 0)],
            o_pos: 0,
            m_pos: 0,
        }
    }

    /// The base's original text.
    pub fn original(&self) -> &str {
        self.base.original()
    }

    /// The string being walked over (the base's modified text).
    pub fn current(&self) -> &str {
        self.base.modified()
    }

    /// The output emitted so far.
    pub fn modified(&self) -> &str {
        &self.modified
    }

    /// The alignment between the current string and the output so far.
    pub fn alignment(&self) -> Alignment {
        Alignment::from_values(self.alignment.clone())
    }

    /// The cursor position in the current string.
    pub fn position(&self) -> usize {
        self.o_pos
    }

    /// How many bytes of the current string remain unconsumed.
    pub fn remaining(&self) -> usize {
        self.current().len() - self.o_pos
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// The next `n` bytes of the current string, without advancing.
    pub fn peek(&self, n: usize) -> &str {
        let end = self.o_pos.saturating_add(n).min(self.current().len());
        &self.base.modified()[self.o_pos..end]
    }

    fn advance(&mut self, o: usize, m: usize) {
        if o == 0 && m == 0 {
            return;
        }
        self.o_pos += o;
        self.m_pos += m;
        self.alignment.push((self.o_pos, self.m_pos));
    }

    /// Copies the next `n` bytes through unchanged, char by char.
    pub fn skip(&mut self, n: usize) {
        let text = self.peek(n).to_string();
        self.modified.push_str(&text);
        for c in text.chars() {
            let width = c.len_utf8();
            self.advance(width, width);
        }
    }

    /// Copies everything up to the end of the current string.
    pub fn skip_rest(&mut self) {
        self.skip(self.remaining());
    }

    /// Emits `text` without consuming anything.
    pub fn insert(&mut self, text: &str) {
        self.replace(0, text);
    }

    /// Consumes the next `n` bytes without emitting anything.
    pub fn discard(&mut self, n: usize) {
        self.replace(n, "");
    }

    /// Discards everything up to the end of the current string.
    pub fn discard_rest(&mut self) {
        self.discard(self.remaining());
    }

    /// Consumes the next `n` bytes and emits `text` in their place, as a
    /// single opaque step.
    pub fn replace(&mut self, n: usize, text: &str) {
        self.modified.push_str(text);
        self.advance(n, text.len());
    }

    /// Consumes the next `n` bytes and emits an already-aligned
    /// replacement, replaying its internal steps one by one.
    ///
    /// Fails if the replacement's original text doesn't match the text
    /// being replaced.
    pub fn replace_bistr(&mut self, n: usize, replacement: &BiString) -> Result<()> {
        if replacement.original() != self.peek(n) {
            return Err(Error::OriginalMismatch {
                expected: self.peek(n).to_string(),
                found: replacement.original().to_string(),
            });
        }

        self.modified.push_str(replacement.modified());
        let values = replacement.alignment().values().to_vec();
        for window in values.windows(2) {
            self.advance(window[1].0 - window[0].0, window[1].1 - window[0].1);
        }
        Ok(())
    }

    /// Appends a `BiString` whose original text continues the current
    /// string at the cursor.
    pub fn append(&mut self, replacement: &BiString) -> Result<()> {
        self.replace_bistr(replacement.original().len(), replacement)
    }

    // ------------------------------------------------------------------
    // Regex edits
    // ------------------------------------------------------------------

    fn next_match(&self, pattern: &Regex, mode: MatchMode) -> Option<(usize, usize)> {
        pattern::find_at(pattern, self.base.modified(), self.o_pos, mode)
            .map(|m| (m.start(), m.end()))
    }

    /// Copies through the next match of `pattern` (and anything before
    /// it). Returns whether a match was found.
    pub fn skip_match(&mut self, pattern: &Regex, mode: MatchMode) -> bool {
        let Some((_, end)) = self.next_match(pattern, mode) else {
            return false;
        };
        self.skip(end - self.o_pos);
        true
    }

    /// Copies up to the next match of `pattern`, then discards the match.
    /// Returns whether a match was found.
    pub fn discard_match(&mut self, pattern: &Regex, mode: MatchMode) -> bool {
        let Some((start, end)) = self.next_match(pattern, mode) else {
            return false;
        };
        self.skip(start - self.o_pos);
        self.discard(end - start);
        true
    }

    /// Copies up to the next match of `pattern`, then replaces the match
    /// with the expanded template. Returns whether a match was found.
    pub fn replace_match(&mut self, pattern: &Regex, replacement: &str, mode: MatchMode) -> bool {
        let Some((start, end, expanded)) = ({
            pattern::captures_at(pattern, self.base.modified(), self.o_pos, mode).map(|caps| {
                let found = pattern::whole(&caps);
                (
                    found.start(),
                    found.end(),
                    pattern::expand_template(&caps, self.base.modified(), replacement),
                )
            })
        }) else {
            return false;
        };

        self.skip(start - self.o_pos);
        self.replace(end - start, &expanded);
        true
    }

    /// Replaces every match of `pattern` from the cursor onward with the
    /// expanded template, copying the gaps through unchanged. Consumes the
    /// rest of the current string.
    pub fn replace_all(&mut self, pattern: &Regex, replacement: &str) {
        loop {
            let Some((start, end, expanded)) = ({
                pattern::captures_at(pattern, self.base.modified(), self.o_pos, MatchMode::Search)
                    .map(|caps| {
                        let found = pattern::whole(&caps);
                        (
                            found.start(),
                            found.end(),
                            pattern::expand_template(&caps, self.base.modified(), replacement),
                        )
                    })
            }) else {
                break;
            };

            self.skip(start - self.o_pos);
            self.replace(end - start, &expanded);
            // A zero-width match would not move the cursor.
            if end == start {
                break;
            }
        }
        self.skip_rest();
    }

    /// Replaces every match of `pattern` from the cursor onward with a
    /// `BiString` produced by `replacer`. Consumes the rest of the current
    /// string.
    pub fn replace_all_with<F>(&mut self, pattern: &Regex, mut replacer: F) -> Result<()>
    where
        F: FnMut(&Captures<'_>) -> BiString,
    {
        loop {
            let Some((start, end, replacement)) = ({
                pattern::captures_at(pattern, self.base.modified(), self.o_pos, MatchMode::Search)
                    .map(|caps| {
                        let found = pattern::whole(&caps);
                        (found.start(), found.end(), replacer(&caps))
                    })
            }) else {
                break;
            };

            self.skip(start - self.o_pos);
            self.replace_bistr(end - start, &replacement)?;
            // A zero-width match would not move the cursor.
            if end == start {
                break;
            }
        }
        self.skip_rest();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Finalization
    // ------------------------------------------------------------------

    /// Finishes the build, composing this pass's edits onto the base's
    /// alignment. Fails until the cursor has consumed the whole current
    /// string.
    pub fn build(&self) -> Result<BiString> {
        if !self.is_complete() {
            return Err(Error::IncompleteBuild { remaining: self.remaining() });
        }

        let alignment = self.base.alignment().compose(&self.alignment());
        tracing::debug!(
            original_len = self.original().len(),
            modified_len = self.modified.len(),
            "built string"
        );
        BiString::with_alignment(self.original().to_string(), self.modified.clone(), alignment)
    }

    /// Builds the current pass and starts a fresh one on top of its
    /// result, for multi-pass pipelines.
    pub fn rewind(&mut self) -> Result<()> {
        self.base = self.build()?;
        self.modified.clear();
        self.alignment.clear();
        self.alignment.push((0, 0));
        self.o_pos = 0;
        self.m_pos = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Span;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn passthrough() {
        let mut builder = BiStringBuilder::new("test");
        builder.skip_rest();
        let bs = builder.build().unwrap();
        assert_eq!(bs, BiString::new("test"));
    }

    #[test]
    fn incomplete_build_fails() {
        let mut builder = BiStringBuilder::new("test");
        builder.skip(2);
        assert!(matches!(
            builder.build(),
            Err(Error::IncompleteBuild { remaining: 2 })
        ));
    }

    #[test]
    fn insert_discard_replace() {
        let mut builder = BiStringBuilder::new("ab");
        builder.insert(">");
        builder.replace(1, "A");
        builder.discard(1);
        builder.insert("<");
        let bs = builder.build().unwrap();
        assert_eq!(bs.original(), "ab");
        assert_eq!(bs.modified(), ">A<");
        assert_eq!(bs.slice(1, 2).original(), "a");
    }

    #[test]
    fn chunk_words() {
        let mut builder = BiStringBuilder::new("  the quick  brown fox ");
        builder.discard(2);
        builder.replace(3, "the");
        builder.skip(1);
        builder.replace(5, "quick");
        builder.replace(2, " ");
        builder.replace(5, "brown");
        builder.skip(1);
        builder.replace(3, "fox");
        builder.discard(1);
        let bs = builder.build().unwrap();

        assert_eq!(bs.original(), "  the quick  brown fox ");
        assert_eq!(bs.modified(), "the quick brown fox");

        assert_eq!(bs.slice(0, 3).original(), "the");
        assert_eq!(bs.slice(1, 3).original(), "the");
        assert_eq!(bs.slice(4, 15).original(), "quick  brown");
        assert_eq!(bs.slice(5, 14).original(), "quick  brown");
        assert_eq!(bs.slice(0, 0).original(), "");
        assert_eq!(bs.slice(10, 10).original(), "");
    }

    #[test]
    fn char_words() {
        let mut builder = BiStringBuilder::new("  the quick  brown fox ");
        builder.discard_match(&re(r"\s+"), MatchMode::Anchored);
        while !builder.is_complete() {
            builder.skip_match(&re(r"\S+"), MatchMode::Anchored);
            if !builder.discard_match(&re(r"\s+\z"), MatchMode::Anchored) {
                builder.replace_match(&re(r"\s+"), " ", MatchMode::Anchored);
            }
        }
        let bs = builder.build().unwrap();

        assert_eq!(bs.original(), "  the quick  brown fox ");
        assert_eq!(bs.modified(), "the quick brown fox");

        assert_eq!(bs.slice(0, 3).original(), "the");
        assert_eq!(bs.slice(1, 3).original(), "he");
        assert_eq!(bs.slice(4, 15).original(), "quick  brown");
        assert_eq!(bs.slice(5, 14).original(), "uick  brow");
    }

    #[test]
    fn replace_bistr_checks_original() {
        let mut builder = BiStringBuilder::new("ab");
        let err = builder.replace_bistr(1, &BiString::chunk("x", "y"));
        assert!(matches!(err, Err(Error::OriginalMismatch { .. })));

        builder.replace_bistr(1, &BiString::chunk("a", "A")).unwrap();
        builder.append(&BiString::chunk("b", "B")).unwrap();
        let bs = builder.build().unwrap();
        assert_eq!(bs.modified(), "AB");
        assert_eq!(bs.slice(1, 2).original(), "b");
    }

    #[test]
    fn replace_all_with_template() {
        let mut builder =
            BiStringBuilder::new("it doesn't work and stuff doesn't get replaced");
        builder.replace_all(&re(r"\bdoesn't (\S+)"), "$1s");
        let bs = builder.build().unwrap();
        assert_eq!(bs.modified(), "it works and stuff gets replaced");
    }

    #[test]
    fn search_mode_finds_later_matches() {
        let mut builder = BiStringBuilder::new("the cheese that the mouse ate");
        assert!(builder.replace_match(&re("that"), "which", MatchMode::Search));
        builder.skip_rest();
        let bs = builder.build().unwrap();
        assert_eq!(bs.modified(), "the cheese which the mouse ate");
    }

    #[test]
    fn rewind_composes_passes() {
        let mut builder = BiStringBuilder::new(
            "I wish I wouldn't've spent one thousand dollars.",
        );
        builder.skip_match(&re(r"[^.]*"), MatchMode::Anchored);
        builder.discard_rest();
        builder.rewind().unwrap();
        builder.skip_match(&re(r"I wish I would"), MatchMode::Anchored);
        builder.replace_match(&re(r"n't"), " not", MatchMode::Anchored);
        builder.replace_match(&re(r"'ve"), " have", MatchMode::Anchored);
        builder.skip_match(&re(r" spent "), MatchMode::Anchored);
        builder.replace_match(&re(r"one thousand dollars"), "$1,000", MatchMode::Anchored);
        let bs = builder.build().unwrap();

        assert_eq!(bs.original(), "I wish I wouldn't've spent one thousand dollars.");
        assert_eq!(bs.modified(), "I wish I would not have spent $1,000");
        assert_eq!(
            bs.alignment().original_bounds_of(Span::new(30, 36)),
            Span::new(27, 47)
        );
    }
}
