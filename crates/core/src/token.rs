//! Tokenization that remembers where every token came from.
//!
//! A [`Tokenization`] pairs a tokenized [`BiString`] with an alignment
//! between text positions and token indices, so spans can be converted
//! freely between token space, the tokenized text, and the original text
//! underneath it.

use regex::Regex;

use crate::alignment::{Alignment, Span};
use crate::bistr::BiString;
use crate::error::{Error, Result};

/// One token: a slice of the tokenized text and its position in it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    text: BiString,
    start: usize,
    end: usize,
}

impl Token {
    pub fn new(text: impl Into<BiString>, start: usize, end: usize) -> Self {
        Self { text: text.into(), start, end }
    }

    /// The token covering `[start, end)` of `text`.
    pub fn slice(text: &BiString, start: usize, end: usize) -> Self {
        Self { text: text.slice(start, end), start, end }
    }

    pub fn text(&self) -> &BiString {
        &self.text
    }

    /// The token's start position in the tokenized text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The token's end position in the tokenized text.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn original(&self) -> &str {
        self.text.original()
    }

    pub fn modified(&self) -> &str {
        self.text.modified()
    }
}

/// A tokenized string, with every token traceable back to the text (and
/// through the text's own alignment, to the original string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenization {
    text: BiString,
    tokens: Vec<Token>,
    /// Text positions to token indices.
    alignment: Alignment,
}

impl Tokenization {
    /// Pairs a text with the tokens found in it.
    ///
    /// # Panics
    ///
    /// Panics if the tokens are out of order or reach outside the text.
    pub fn new(text: impl Into<BiString>, tokens: Vec<Token>) -> Self {
        let text = text.into();

        let mut pairs = vec![(0, 0)];
        for (i, token) in tokens.iter().enumerate() {
            pairs.push((token.start, i));
            pairs.push((token.end, i + 1));
        }
        pairs.push((text.len(), tokens.len()));
        let alignment =
            Alignment::new(pairs).expect("tokens must be ordered and lie within the text");

        Self { text, tokens, alignment }
    }

    /// Reconstructs token positions by greedily searching for each token
    /// string in order.
    pub fn infer<S: AsRef<str>>(text: impl Into<BiString>, tokens: &[S]) -> Result<Self> {
        let text = text.into();

        let mut found = Vec::with_capacity(tokens.len());
        let mut start = 0;
        for token in tokens {
            let token = token.as_ref();
            match text.bounds_of(token, start) {
                Some(span) => {
                    found.push(Token::slice(&text, span.start, span.end));
                    start = span.end;
                }
                None => {
                    tracing::debug!(token, start, "token not found in text");
                    return Err(Error::TokenNotFound(token.to_string()));
                }
            }
        }

        Ok(Self::new(text, found))
    }

    pub fn text(&self) -> &BiString {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The sub-tokenization covering tokens `[start, end)`, re-based on
    /// the covered text.
    pub fn slice(&self, start: usize, end: usize) -> Tokenization {
        let end = end.min(self.len());
        let start = start.min(end);

        let substring = self.substring(start, end);
        let mut tokens = self.tokens[start..end].to_vec();
        if let Some(first) = tokens.first() {
            let delta = first.start;
            for token in &mut tokens {
                token.start -= delta;
                token.end -= delta;
            }
        }
        Self::new(substring, tokens)
    }

    /// The text covered by tokens `[start, end)`.
    pub fn substring(&self, start: usize, end: usize) -> BiString {
        let span = self.text_bounds(start, end);
        self.text.slice(span.start, span.end)
    }

    /// The text span covered by tokens `[start, end)`.
    pub fn text_bounds(&self, start: usize, end: usize) -> Span {
        self.alignment.original_bounds_of((start, end))
    }

    /// The original-string span covered by tokens `[start, end)`.
    pub fn original_bounds(&self, start: usize, end: usize) -> Span {
        let span = self.text_bounds(start, end);
        self.text.alignment().original_bounds_of(span)
    }

    /// The tokens overlapping the text span `[start, end)`.
    pub fn bounds_for_text(&self, start: usize, end: usize) -> Span {
        self.alignment.modified_bounds_of((start, end))
    }

    /// The tokens overlapping the original-string span `[start, end)`.
    pub fn bounds_for_original(&self, start: usize, end: usize) -> Span {
        let span = self.text.alignment().modified_bounds_of((start, end));
        self.bounds_for_text(span.start, span.end)
    }

    /// The sub-tokenization overlapping the text span `[start, end)`.
    pub fn slice_by_text(&self, start: usize, end: usize) -> Tokenization {
        let span = self.bounds_for_text(start, end);
        self.slice(span.start, span.end)
    }

    /// The sub-tokenization overlapping the original-string span
    /// `[start, end)`.
    pub fn slice_by_original(&self, start: usize, end: usize) -> Tokenization {
        let span = self.bounds_for_original(start, end);
        self.slice(span.start, span.end)
    }

    /// Expands a text span outward to the nearest token boundaries.
    pub fn snap_text_bounds(&self, start: usize, end: usize) -> Span {
        let span = self.bounds_for_text(start, end);
        self.text_bounds(span.start, span.end)
    }

    /// Expands an original-string span outward to the nearest token
    /// boundaries.
    pub fn snap_original_bounds(&self, start: usize, end: usize) -> Span {
        let span = self.bounds_for_original(start, end);
        self.original_bounds(span.start, span.end)
    }
}

/// Splits a [`BiString`] into a [`Tokenization`].
pub trait Tokenizer {
    fn tokenize(&self, text: &BiString) -> Tokenization;
}

/// A tokenizer whose pattern matches the tokens themselves.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &BiString) -> Tokenization {
        let tokens = text
            .find_matches(&self.pattern)
            .map(|m| Token::slice(text, m.start(), m.end()))
            .collect();
        Tokenization::new(text.clone(), tokens)
    }
}

/// A tokenizer whose pattern matches the separators between tokens; empty
/// gaps produce no token.
#[derive(Debug, Clone)]
pub struct SplittingTokenizer {
    pattern: Regex,
}

impl SplittingTokenizer {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl Tokenizer for SplittingTokenizer {
    fn tokenize(&self, text: &BiString) -> Tokenization {
        let mut tokens = Vec::new();
        let mut last = 0;
        for m in text.find_matches(&self.pattern) {
            if m.start() > last {
                tokens.push(Token::slice(text, last, m.start()));
            }
            last = m.end();
        }
        if text.len() > last {
            tokens.push(Token::slice(text, last, text.len()));
        }
        Tokenization::new(text.clone(), tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> RegexTokenizer {
        RegexTokenizer::new(Regex::new(r"\w+").unwrap())
    }

    fn sample() -> Tokenization {
        let text = BiString::new("The quick, brown fox jumps over the lazy dog").replace(",", "");
        words().tokenize(&text)
    }

    #[test]
    fn regex_tokenizer() {
        let tokens = sample();
        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens.tokens()[1].modified(), "quick");
        assert_eq!(tokens.tokens()[1].start(), 4);
        assert_eq!(tokens.tokens()[1].end(), 9);
        assert_eq!(tokens.text_bounds(0, 2), Span::new(0, 9));
    }

    #[test]
    fn splitting_tokenizer() {
        let tokenizer = SplittingTokenizer::new(Regex::new(r"\s+").unwrap());
        let tokens = tokenizer.tokenize(&BiString::new("  hello  world  "));
        let texts: Vec<&str> = tokens.tokens().iter().map(Token::modified).collect();
        assert_eq!(texts, vec!["hello", "world"]);
        assert_eq!(tokens.tokens()[0].start(), 2);
    }

    #[test]
    fn infer_tokens() {
        let tokens =
            Tokenization::infer(BiString::new("hello, world!"), &["hello", "world"]).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.tokens()[1].start(), 7);

        assert!(matches!(
            Tokenization::infer(BiString::new("hello, world!"), &["world", "hello"]),
            Err(Error::TokenNotFound(_))
        ));
    }

    #[test]
    fn substring_and_bounds() {
        let tokens = sample();
        // Text: "The quick brown fox jumps over the lazy dog"
        assert_eq!(tokens.substring(1, 3).modified(), "quick brown");
        assert_eq!(tokens.substring(1, 3).original(), "quick, brown");
        assert_eq!(tokens.original_bounds(1, 3), Span::new(4, 16));
        assert_eq!(tokens.bounds_for_text(5, 10), Span::new(1, 2));
        assert_eq!(tokens.bounds_for_text(2, 13), Span::new(0, 3));
        assert_eq!(tokens.bounds_for_original(4, 10), Span::new(1, 2));
    }

    #[test]
    fn slicing() {
        let tokens = sample();
        let slice = tokens.slice(1, 3);
        assert_eq!(slice.len(), 2);
        assert_eq!(slice.text().modified(), "quick brown");
        assert_eq!(slice.tokens()[0].start(), 0);
        assert_eq!(slice.tokens()[1].modified(), "brown");

        assert_eq!(tokens.slice_by_text(5, 10).len(), 1);
        assert_eq!(tokens.slice_by_text(2, 13).len(), 3);
        assert_eq!(tokens.slice(3, 3).len(), 0);
        assert_eq!(tokens.slice(7, 100).len(), 2);
    }

    #[test]
    fn snapping() {
        let tokens = sample();
        assert_eq!(tokens.snap_text_bounds(2, 13), Span::new(0, 15));
        assert_eq!(tokens.snap_text_bounds(5, 5), Span::new(4, 9));
        assert_eq!(tokens.snap_original_bounds(5, 5), Span::new(4, 9));
    }
}
