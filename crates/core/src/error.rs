//! Error types for alignment construction, building, and tokenization.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while constructing or transforming aligned
/// strings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An alignment pair stepped backwards on the original axis.
    #[error("original position moved backwards at pair {0}⇋{1}")]
    OriginalMovedBackwards(usize, usize),

    /// An alignment pair stepped backwards on the modified axis.
    #[error("modified position moved backwards at pair {0}⇋{1}")]
    ModifiedMovedBackwards(usize, usize),

    /// An alignment must contain at least one pair.
    #[error("no positions to align")]
    EmptyAlignment,

    /// An alignment's bounds don't cover the string it was paired with.
    #[error("alignment covers {side} positions {start}..{end}, but the {side} string has length {len}")]
    AlignmentOutOfBounds {
        side: &'static str,
        start: usize,
        end: usize,
        len: usize,
    },

    /// A replacement's original text must match the text it replaces.
    #[error("replacement original {found:?} does not match the current text {expected:?}")]
    OriginalMismatch { expected: String, found: String },

    /// The builder's cursor has not consumed the whole string yet.
    #[error("the string is not fully built ({remaining} bytes remaining)")]
    IncompleteBuild { remaining: usize },

    /// Splitting on a pattern with capture groups is ambiguous.
    #[error("cannot split on a pattern with capture groups")]
    CaptureGroupsUnsupported,

    /// An unrecognized Unicode normalization form name.
    #[error("expected one of NFC, NFD, NFKC, NFKD; found {0:?}")]
    UnknownNormalForm(String),

    /// A token could not be located in the text it was inferred from.
    #[error("could not find token {0:?} in the text")]
    TokenNotFound(String),
}
