//! Heuristic alignment inference between two unrelated forms of the same
//! text.
//!
//! Rather than comparing raw bytes, both strings are segmented into glyphs
//! (a base character plus its combining marks) and each glyph is annotated
//! with progressively coarser views of itself. The glyph-level edit
//! distance then tolerates case changes, accent stripping, and
//! compatibility substitutions far better than a character-level one.

use crate::alignment::Alignment;
use crate::bistr::BiString;
use crate::unicode::{self, NormalForm};

/// A glyph annotated with coarser and coarser views of itself, from the
/// exact original text down to its top-level Unicode category.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AugmentedGlyph {
    /// The glyph as it appeared in the source string.
    original: String,
    /// Its NFKD normalization.
    normalized: String,
    /// Its NFKD normalization, uppercased.
    upper: String,
    /// The first character of the uppercased form.
    root: char,
    /// The root's general category, e.g. `"Lu"`.
    category: &'static str,
    /// The first letter of the category, e.g. `"L"`.
    top_category: &'static str,
}

impl AugmentedGlyph {
    const INDEL_COST: u32 = 4;

    fn new(original: String, normalized: String, upper: String) -> Self {
        let root = upper.chars().next().unwrap_or('\u{fffd}');
        let category = unicode::general_category(root);
        Self {
            original,
            normalized,
            upper,
            root,
            category,
            top_category: &category[..1],
        }
    }

    /// The edit cost between two optional glyphs: a flat cost for an
    /// insertion or deletion, or the number of disagreeing views for a
    /// substitution.
    fn cost(a: Option<&Self>, b: Option<&Self>) -> u32 {
        let (Some(a), Some(b)) = (a, b) else {
            return Self::INDEL_COST;
        };

        let mut cost = 0;
        cost += u32::from(a.original != b.original);
        cost += u32::from(a.normalized != b.normalized);
        cost += u32::from(a.upper != b.upper);
        cost += u32::from(a.root != b.root);
        cost += u32::from(a.category != b.top_category);
        cost += u32::from(a.top_category != b.top_category);
        cost
    }
}

/// A string segmented into annotated glyphs, with the alignment from its
/// byte positions to its glyph indices.
struct AugmentedString {
    glyphs: Vec<AugmentedGlyph>,
    /// Original byte positions to glyph indices.
    alignment: Alignment,
}

impl AugmentedString {
    fn new(original: &str) -> Self {
        let normalized = BiString::new(original).normalize(NormalForm::Nfkd);
        let upper = BiString::new(normalized.modified()).to_uppercase();

        let mut glyphs = Vec::new();
        let mut pairs: Vec<(usize, usize)> = vec![(0, 0)];
        for m in unicode::GLYPH.find_iter(upper.modified()) {
            let norm_span = upper.alignment().original_bounds_of((m.start(), m.end()));
            let norm_text = &upper.original()[norm_span.to_range()];
            let orig_span = normalized.alignment().original_bounds_of(norm_span);
            let orig_text = &normalized.original()[orig_span.to_range()];

            glyphs.push(AugmentedGlyph::new(
                orig_text.to_string(),
                norm_text.to_string(),
                m.as_str().to_string(),
            ));
            let &(o, g) = pairs.last().unwrap_or(&(0, 0));
            pairs.push((o + norm_text.len(), g + 1));
        }

        let alignment = normalized.alignment().compose(&Alignment::from_values(pairs));
        Self { glyphs, alignment }
    }
}

/// Infers an alignment between two forms of the same text by glyph-level
/// edit distance over the annotated glyphs.
pub(crate) fn heuristic_infer(original: &str, modified: &str) -> BiString {
    let aug_original = AugmentedString::new(original);
    let aug_modified = AugmentedString::new(modified);
    tracing::debug!(
        original_glyphs = aug_original.glyphs.len(),
        modified_glyphs = aug_modified.glyphs.len(),
        "inferring glyph alignment"
    );

    let glyph_alignment = Alignment::infer_with_costs(
        &aug_original.glyphs,
        &aug_modified.glyphs,
        AugmentedGlyph::cost,
    );

    let alignment = aug_original
        .alignment
        .compose(&glyph_alignment)
        .compose(&aug_modified.alignment.inverse());

    match BiString::with_alignment(original, modified, alignment) {
        Ok(bs) => bs,
        Err(_) => unreachable!("composed alignment spans both strings"),
    }
}
