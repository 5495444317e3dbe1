//! # Weft Library
//!
//! Bidirectionally traceable text transformations. A [`BiString`] is a
//! string that remembers what it used to be: every edit (normalization,
//! case mapping, regex replacement, tokenization) maintains a full
//! character-level alignment from the modified text back to the original
//! input, so any span of the output can be traced to the exact input it
//! came from.
//!
//! ## Core Concepts
//!
//! - **Alignment**: Monotonic position pairs between two coordinate spaces
//! - **BiString**: An original string, a modified string, and the alignment
//!   between them
//! - **Builder**: Incremental, multi-pass construction of aligned strings
//! - **Tokenization**: Tokens that stay traceable back through every layer
//!
//! All positions are byte offsets on `char` boundaries.
//!
//! ## Example
//!
//! ```rust
//! use weft_core::{BiString, NormalForm, Span};
//!
//! let bs = BiString::new("PO\u{300}LE\u{301}")
//!     .normalize(NormalForm::Nfc)
//!     .to_lowercase();
//!
//! assert_eq!(bs.modified(), "p\u{f2}l\u{e9}");
//! // The "é" traces back to the decomposed uppercase pair it came from.
//! let span = bs.alignment().original_bounds_of(Span::new(4, 6));
//! assert_eq!(&bs.original()[span.to_range()], "E\u{301}");
//! ```

pub mod alignment;
pub mod bistr;
pub mod builder;
pub mod error;
pub mod infer;
pub mod pattern;
pub mod token;
pub mod unicode;

// Re-export main types
pub use alignment::{Alignment, Span};
pub use bistr::{BiString, NormalForm};
pub use builder::BiStringBuilder;
pub use error::{Error, Result};
pub use pattern::MatchMode;
pub use token::{RegexTokenizer, SplittingTokenizer, Token, Tokenization, Tokenizer};
