//! Unicode text capability: general categories, casing predicates, glyph
//! segmentation, and normalization forms.
//!
//! Category and property lookups are answered by the `regex` crate's Unicode
//! property classes, so the crate carries no character tables of its own.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Error;

/// One glyph per match: a non-mark character with its trailing combining
/// marks, or a leading run of bare marks.
pub(crate) static GLYPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\P{M}\p{M}*|\A\p{M}+").unwrap());

/// Characters whose lowercase mapping differs from themselves.
pub(crate) static CHANGES_WHEN_LOWERCASED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Changes_When_Lowercased}").unwrap());

/// Characters whose uppercase mapping differs from themselves.
pub(crate) static CHANGES_WHEN_UPPERCASED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Changes_When_Uppercased}").unwrap());

static CASED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Cased}").unwrap());

static CASE_IGNORABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Case_Ignorable}").unwrap());

fn matches_char(pattern: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    pattern.is_match(c.encode_utf8(&mut buf))
}

/// Whether `c` has the `Cased` property (letters with case, plus a few
/// modifiers).
pub fn is_cased(c: char) -> bool {
    matches_char(&CASED, c)
}

/// Whether `c` is ignored when scanning for casing context, per the
/// `Case_Ignorable` property.
pub fn is_case_ignorable(c: char) -> bool {
    matches_char(&CASE_IGNORABLE, c)
}

// Cs is omitted (surrogates are not Rust chars); Cn is the fallback when
// nothing matches.
const CATEGORIES: [&str; 28] = [
    "Lu", "Ll", "Lt", "Lm", "Lo", "Mn", "Mc", "Me", "Nd", "Nl", "No", "Pc", "Pd", "Ps", "Pe",
    "Pi", "Pf", "Po", "Sm", "Sc", "Sk", "So", "Zs", "Zl", "Zp", "Cc", "Cf", "Co",
];

static CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = CATEGORIES
        .iter()
        .map(|c| format!(r"(?P<{c}>\p{{{c}}})"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).unwrap()
});

/// The two-letter Unicode general category of `c` (e.g. `"Lu"`, `"Zs"`).
pub fn general_category(c: char) -> &'static str {
    let mut buf = [0u8; 4];
    let text = c.encode_utf8(&mut buf);
    if let Some(caps) = CATEGORY.captures(text) {
        for name in CATEGORIES {
            if caps.name(name).is_some() {
                return name;
            }
        }
    }
    "Cn"
}

/// A Unicode normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalForm {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl NormalForm {
    /// Normalizes `text` into this form.
    pub fn apply(self, text: &str) -> String {
        match self {
            NormalForm::Nfc => text.nfc().collect(),
            NormalForm::Nfd => text.nfd().collect(),
            NormalForm::Nfkc => text.nfkc().collect(),
            NormalForm::Nfkd => text.nfkd().collect(),
        }
    }
}

impl FromStr for NormalForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NFC" => Ok(NormalForm::Nfc),
            "NFD" => Ok(NormalForm::Nfd),
            "NFKC" => Ok(NormalForm::Nfkc),
            "NFKD" => Ok(NormalForm::Nfkd),
            _ => Err(Error::UnknownNormalForm(s.to_string())),
        }
    }
}
