//! Monotonic alignments between an original and a modified coordinate space.
//!
//! An [`Alignment`] is an ordered sequence of `(original, modified)` position
//! pairs. Between two adjacent pairs, the spanned original and modified
//! ranges correspond to each other; at a pair, both sides agree on a common
//! boundary. Alignments support slicing, shifting, concatenation,
//! composition, and inversion, plus automatic inference by edit distance.

use std::fmt;
use std::ops::Range;

use crate::error::{Error, Result};

// ============================================================================
// Span
// ============================================================================

/// A half-open `[start, end)` range of positions in a single coordinate
/// space.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span at a single position.
    pub fn point(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self { start: range.start, end: range.end }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// ============================================================================
// Alignment
// ============================================================================

/// Which axis of an alignment a search runs over.
#[derive(Clone, Copy)]
enum Axis {
    Original,
    Modified,
}

impl Axis {
    fn coord(self, pair: &(usize, usize)) -> usize {
        match self {
            Axis::Original => pair.0,
            Axis::Modified => pair.1,
        }
    }
}

/// An ordered sequence of `(original, modified)` position pairs, monotonic
/// on both axes.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    values: Vec<(usize, usize)>,
}

impl Alignment {
    /// Builds an alignment from position pairs, validating monotonicity.
    ///
    /// Consecutive duplicate pairs are collapsed. Fails if either coordinate
    /// ever decreases, or if no pairs remain.
    pub fn new<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut values: Vec<(usize, usize)> = Vec::new();
        for (o, m) in pairs {
            if let Some(&(o_prev, m_prev)) = values.last() {
                if o < o_prev {
                    return Err(Error::OriginalMovedBackwards(o, m));
                }
                if m < m_prev {
                    return Err(Error::ModifiedMovedBackwards(o, m));
                }
                if (o, m) == (o_prev, m_prev) {
                    continue;
                }
            }
            values.push((o, m));
        }
        if values.is_empty() {
            return Err(Error::EmptyAlignment);
        }
        Ok(Self { values })
    }

    /// Builds an alignment from pairs already known to be monotonic.
    pub(crate) fn from_values(pairs: Vec<(usize, usize)>) -> Self {
        let mut values: Vec<(usize, usize)> = Vec::with_capacity(pairs.len());
        for pair in pairs {
            if let Some(&prev) = values.last() {
                debug_assert!(pair.0 >= prev.0 && pair.1 >= prev.1);
                if pair == prev {
                    continue;
                }
            }
            values.push(pair);
        }
        debug_assert!(!values.is_empty());
        Self { values }
    }

    /// The identity alignment over `[start, end]`, pairing every position
    /// with itself.
    pub fn identity(start: usize, end: usize) -> Self {
        Self::from_values((start..=end).map(|i| (i, i)).collect())
    }

    /// The stored position pairs.
    pub fn values(&self) -> &[(usize, usize)] {
        &self.values
    }

    /// The number of stored pairs (always at least one).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    // ------------------------------------------------------------------
    // Bounds queries
    // ------------------------------------------------------------------

    /// The full extent on the original axis.
    pub fn original_bounds(&self) -> Span {
        Span::new(self.values[0].0, self.values[self.values.len() - 1].0)
    }

    /// The full extent on the modified axis.
    pub fn modified_bounds(&self) -> Span {
        Span::new(self.values[0].1, self.values[self.values.len() - 1].1)
    }

    /// Indices of the pairs bracketing `[start, end)` on the given axis:
    /// the last pair at or before `start`, and the first pair at or after
    /// `end`.
    fn search(&self, axis: Axis, start: usize, end: usize) -> (usize, usize) {
        let first = self.values.partition_point(|p| axis.coord(p) <= start);
        assert!(first > 0, "position {start} precedes the alignment");
        let first = first - 1;
        // The upper bound search continues from `first`, so an empty span
        // over duplicate coordinates still yields a well-formed range.
        let last = first + self.values[first..].partition_point(|p| axis.coord(p) < end);
        assert!(last < self.values.len(), "position {end} exceeds the alignment");
        (first, last)
    }

    /// The smallest original span covering the given modified span.
    ///
    /// # Panics
    ///
    /// Panics if the span reaches outside the alignment's modified bounds.
    pub fn original_bounds_of<S: Into<Span>>(&self, span: S) -> Span {
        let span = span.into();
        let (first, last) = self.search(Axis::Modified, span.start, span.end);
        Span::new(self.values[first].0, self.values[last].0)
    }

    /// The smallest modified span covering the given original span.
    ///
    /// # Panics
    ///
    /// Panics if the span reaches outside the alignment's original bounds.
    pub fn modified_bounds_of<S: Into<Span>>(&self, span: S) -> Span {
        let span = span.into();
        let (first, last) = self.search(Axis::Original, span.start, span.end);
        Span::new(self.values[first].1, self.values[last].1)
    }

    // ------------------------------------------------------------------
    // Slicing and algebra
    // ------------------------------------------------------------------

    fn slice_by(&self, axis: Axis, span: Span) -> Alignment {
        let (first, last) = self.search(axis, span.start, span.end);
        let mut values = self.values[first..=last].to_vec();
        for pair in &mut values {
            let coord = match axis {
                Axis::Original => &mut pair.0,
                Axis::Modified => &mut pair.1,
            };
            *coord = (*coord).clamp(span.start, span.end);
        }
        Self::from_values(values)
    }

    /// The portion of this alignment covering the given original span.
    /// Boundary positions are clamped into the span.
    pub fn slice_by_original<S: Into<Span>>(&self, span: S) -> Alignment {
        self.slice_by(Axis::Original, span.into())
    }

    /// The portion of this alignment covering the given modified span.
    /// Boundary positions are clamped into the span.
    pub fn slice_by_modified<S: Into<Span>>(&self, span: S) -> Alignment {
        self.slice_by(Axis::Modified, span.into())
    }

    /// Shifts every pair by the given deltas.
    pub fn shift(&self, delta_o: isize, delta_m: isize) -> Alignment {
        Self::from_values(
            self.values
                .iter()
                .map(|&(o, m)| {
                    (o.wrapping_add_signed(delta_o), m.wrapping_add_signed(delta_m))
                })
                .collect(),
        )
    }

    /// Appends another alignment after this one. The caller is responsible
    /// for shifting `other` so that it continues where `self` leaves off.
    ///
    /// # Panics
    ///
    /// Panics if `other` steps backwards relative to this alignment's end.
    pub fn concat(&self, other: &Alignment) -> Alignment {
        let mut values = self.values.clone();
        for &(o, m) in &other.values {
            let &(o_last, m_last) = values.last().unwrap_or(&(0, 0));
            assert!(
                o >= o_last && m >= m_last,
                "concatenated alignment must continue monotonically"
            );
            if (o, m) != (o_last, m_last) {
                values.push((o, m));
            }
        }
        Self { values }
    }

    /// Composes this alignment (A→B) with another (B→C) into an A→C
    /// alignment.
    ///
    /// # Panics
    ///
    /// Panics if this alignment's modified bounds differ from `other`'s
    /// original bounds.
    pub fn compose(&self, other: &Alignment) -> Alignment {
        assert_eq!(
            self.modified_bounds(),
            other.original_bounds(),
            "incompatible alignments"
        );

        let mut values: Vec<(usize, usize)> = Vec::new();
        let mut push = |o: usize, c: usize| {
            if let Some(&last) = values.last() {
                debug_assert!(o >= last.0 && c >= last.1);
                if (o, c) == last {
                    return;
                }
            }
            values.push((o, c));
        };

        let mut i = 0;
        let i_max = self.values.len();
        let mut j = 0;
        let j_max = other.values.len();

        while i < i_max {
            // Map self.values[i] to its lower bound in other.
            while self.values[i].1 > other.values[j].0 {
                j += 1;
            }
            while self.values[i].1 < other.values[j].0 && self.values[i + 1].1 <= other.values[j].0
            {
                i += 1;
            }
            push(self.values[i].0, other.values[j].1);

            // Map self.values[i] to its upper bound in other, when distinct.
            while i + 1 < i_max && self.values[i].0 == self.values[i + 1].0 {
                i += 1;
            }

            let mut needs_upper = false;
            while j + 1 < j_max && self.values[i].1 >= other.values[j + 1].0 {
                needs_upper = true;
                j += 1;
            }
            if needs_upper {
                push(self.values[i].0, other.values[j].1);
            }

            i += 1;
        }

        Self { values }
    }

    /// Swaps the roles of the original and modified axes.
    pub fn inverse(&self) -> Alignment {
        Self { values: self.values.iter().map(|&(o, m)| (m, o)).collect() }
    }

    // ------------------------------------------------------------------
    // Inference
    // ------------------------------------------------------------------

    /// Infers an alignment between two sequences by minimizing edit
    /// distance with the standard unit costs (0 for a match, 1 for a
    /// substitution, insertion, or deletion).
    pub fn infer<T, U>(original: &[T], modified: &[U]) -> Alignment
    where
        T: PartialEq<U>,
    {
        Self::infer_with_costs(original, modified, |o, m| match (o, m) {
            (Some(o), Some(m)) => u32::from(o != m),
            _ => 1,
        })
    }

    /// Infers an alignment between two sequences by minimizing total edit
    /// cost.
    ///
    /// The cost function receives `(Some(o), Some(m))` for a substitution,
    /// `(Some(o), None)` for a deletion, and `(None, Some(m))` for an
    /// insertion. Runs in linear space via Hirschberg's divide-and-conquer,
    /// so it stays practical for sequences of ~100k elements.
    pub fn infer_with_costs<T, U, F>(original: &[T], modified: &[U], cost_fn: F) -> Alignment
    where
        F: Fn(Option<&T>, Option<&U>) -> u32,
    {
        if original.len() < modified.len() {
            // The divide-and-conquer step is more efficient when the outer
            // loop runs over the longer sequence.
            let flipped = |m: Option<&U>, o: Option<&T>| cost_fn(o, m);
            let pairs = Self::infer_recursive(modified, original, &flipped);
            Self::from_values(pairs.into_iter().map(|(m, o)| (o, m)).collect())
        } else {
            Self::from_values(Self::infer_recursive(original, modified, &cost_fn))
        }
    }

    fn infer_recursive<T, U, F>(original: &[T], modified: &[U], cost_fn: &F) -> Vec<(usize, usize)>
    where
        F: Fn(Option<&T>, Option<&U>) -> u32,
    {
        if original.len() <= 1 || modified.len() <= 1 {
            return Self::infer_matrix(original, modified, cost_fn);
        }

        let o_mid = original.len() / 2;
        let (o_left, o_right) = original.split_at(o_mid);

        let left_costs = Self::cost_row(o_left, modified, false, cost_fn);
        let right_costs = Self::cost_row(o_right, modified, true, cost_fn);

        let mut m_mid = 0;
        let mut best = left_costs[0] + right_costs[0];
        for j in 1..left_costs.len() {
            let cost = left_costs[j] + right_costs[j];
            if cost < best {
                m_mid = j;
                best = cost;
            }
        }

        let (m_left, m_right) = modified.split_at(m_mid);
        let mut pairs = Self::infer_recursive(o_left, m_left, cost_fn);
        for (o, m) in Self::infer_recursive(o_right, m_right, cost_fn) {
            pairs.push((o + o_mid, m + m_mid));
        }
        pairs
    }

    /// The final row of the edit cost matrix for `original` vs. every
    /// prefix of `modified` (or every suffix, when `reverse` is set).
    fn cost_row<T, U, F>(original: &[T], modified: &[U], reverse: bool, cost_fn: &F) -> Vec<u64>
    where
        F: Fn(Option<&T>, Option<&U>) -> u32,
    {
        let at_o = |i: usize| {
            if reverse {
                &original[original.len() - 1 - i]
            } else {
                &original[i]
            }
        };
        let at_m = |j: usize| {
            if reverse {
                &modified[modified.len() - 1 - j]
            } else {
                &modified[j]
            }
        };

        let mut row: Vec<u64> = Vec::with_capacity(modified.len() + 1);
        row.push(0);
        for j in 0..modified.len() {
            let cost = row[j] + u64::from(cost_fn(None, Some(at_m(j))));
            row.push(cost);
        }

        let mut prev = vec![0u64; row.len()];
        for i in 0..original.len() {
            std::mem::swap(&mut row, &mut prev);
            let o = at_o(i);
            row[0] = prev[0] + u64::from(cost_fn(Some(o), None));
            for j in 0..modified.len() {
                let m = at_m(j);
                let sub = prev[j] + u64::from(cost_fn(Some(o), Some(m)));
                let del = prev[j + 1] + u64::from(cost_fn(Some(o), None));
                let ins = row[j] + u64::from(cost_fn(None, Some(m)));
                row[j + 1] = sub.min(del).min(ins);
            }
        }

        if reverse {
            row.reverse();
        }
        row
    }

    /// Full-matrix alignment with back pointers, for the base case where
    /// one side has at most one element.
    fn infer_matrix<T, U, F>(original: &[T], modified: &[U], cost_fn: &F) -> Vec<(usize, usize)>
    where
        F: Fn(Option<&T>, Option<&U>) -> u32,
    {
        let cols = modified.len() + 1;
        // (cost, back_i, back_j) per cell, row-major.
        let mut matrix: Vec<(u64, usize, usize)> =
            Vec::with_capacity((original.len() + 1) * cols);

        matrix.push((0, 0, 0));
        for (j, m) in modified.iter().enumerate() {
            let cost = matrix[j].0 + u64::from(cost_fn(None, Some(m)));
            matrix.push((cost, 0, j));
        }

        let mut prev_row = 0;
        for (i, o) in original.iter().enumerate() {
            let this_row = prev_row + cols;
            let cost = matrix[prev_row].0 + u64::from(cost_fn(Some(o), None));
            matrix.push((cost, i, 0));
            for (j, m) in modified.iter().enumerate() {
                // Ties prefer substitution, then deletion, then insertion.
                let mut cost = matrix[prev_row + j].0 + u64::from(cost_fn(Some(o), Some(m)));
                let mut back = (i, j);
                let del = matrix[prev_row + j + 1].0 + u64::from(cost_fn(Some(o), None));
                if del < cost {
                    cost = del;
                    back = (i, j + 1);
                }
                let ins = matrix[this_row + j].0 + u64::from(cost_fn(None, Some(m)));
                if ins < cost {
                    cost = ins;
                    back = (i + 1, j);
                }
                matrix.push((cost, back.0, back.1));
            }
            prev_row = this_row;
        }

        let mut pairs = Vec::new();
        let mut i = original.len();
        let mut j = modified.len();
        loop {
            pairs.push((i, j));
            if i == 0 && j == 0 {
                break;
            }
            let (_, back_i, back_j) = matrix[i * cols + j];
            i = back_i;
            j = back_j;
        }
        pairs.reverse();
        pairs
    }
}

impl fmt::Debug for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (o, m)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{o}\u{21cb}{m}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned(pairs: &[(usize, usize)]) -> Alignment {
        Alignment::new(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn new_validates_monotonicity() {
        assert!(Alignment::new([]).is_err());
        assert!(Alignment::new([(0, 0), (1, 1)]).is_ok());
        assert!(matches!(
            Alignment::new([(0, 0), (1, 1), (0, 2)]),
            Err(Error::OriginalMovedBackwards(0, 2))
        ));
        assert!(matches!(
            Alignment::new([(0, 0), (1, 1), (2, 0)]),
            Err(Error::ModifiedMovedBackwards(2, 0))
        ));
    }

    #[test]
    fn new_collapses_duplicates() {
        let alignment = aligned(&[(0, 0), (0, 0), (1, 2), (1, 2), (2, 4)]);
        assert_eq!(alignment.values(), &[(0, 0), (1, 2), (2, 4)]);
    }

    #[test]
    fn identity() {
        let alignment = Alignment::identity(0, 3);
        assert_eq!(alignment.values(), &[(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(alignment.original_bounds(), Span::new(0, 3));
        assert_eq!(alignment.modified_bounds(), Span::new(0, 3));
        assert_eq!(alignment.original_bounds_of(Span::new(1, 2)), Span::new(1, 2));
    }

    #[test]
    fn bounds_queries() {
        let alignment = aligned(&[(0, 0), (1, 2), (2, 4), (3, 6)]);

        assert_eq!(alignment.original_bounds_of((0, 0)), Span::new(0, 0));
        assert_eq!(alignment.original_bounds_of((0, 1)), Span::new(0, 1));
        assert_eq!(alignment.original_bounds_of((0, 2)), Span::new(0, 1));
        assert_eq!(alignment.original_bounds_of((0, 3)), Span::new(0, 2));
        assert_eq!(alignment.original_bounds_of((1, 1)), Span::new(0, 1));
        assert_eq!(alignment.original_bounds_of((1, 3)), Span::new(0, 2));
        assert_eq!(alignment.original_bounds_of((1, 4)), Span::new(0, 2));
        assert_eq!(alignment.original_bounds_of((2, 2)), Span::new(1, 1));
        assert_eq!(alignment.original_bounds_of((2, 4)), Span::new(1, 2));
        assert_eq!(alignment.original_bounds_of((2, 5)), Span::new(1, 3));
        assert_eq!(alignment.original_bounds_of((3, 3)), Span::new(1, 2));

        assert_eq!(alignment.modified_bounds_of((0, 0)), Span::new(0, 0));
        assert_eq!(alignment.modified_bounds_of((0, 1)), Span::new(0, 2));
        assert_eq!(alignment.modified_bounds_of((0, 2)), Span::new(0, 4));
        assert_eq!(alignment.modified_bounds_of((0, 3)), Span::new(0, 6));
        assert_eq!(alignment.modified_bounds_of((1, 1)), Span::new(2, 2));
        assert_eq!(alignment.modified_bounds_of((2, 2)), Span::new(4, 4));
        assert_eq!(alignment.modified_bounds_of((1, 3)), Span::new(2, 6));
    }

    #[test]
    #[should_panic]
    fn bounds_query_out_of_range() {
        let alignment = aligned(&[(0, 0), (1, 2)]);
        alignment.original_bounds_of((0, 3));
    }

    #[test]
    fn slicing_clamps_boundaries() {
        let alignment = aligned(&[(0, 0), (1, 2), (2, 4), (3, 6)]);

        let slice = alignment.slice_by_modified((1, 5));
        assert_eq!(slice.values(), &[(0, 1), (1, 2), (2, 4), (3, 5)]);

        let slice = alignment.slice_by_original((1, 2));
        assert_eq!(slice.values(), &[(1, 2), (2, 4)]);

        let point = alignment.slice_by_modified((2, 2));
        assert_eq!(point.values(), &[(1, 2)]);
    }

    #[test]
    fn shift_and_concat() {
        let first = aligned(&[(0, 0), (2, 1)]);
        let second = aligned(&[(0, 0), (1, 2)]);
        let combined = first.concat(&second.shift(2, 1));
        assert_eq!(combined.values(), &[(0, 0), (2, 1), (3, 3)]);
    }

    #[test]
    fn compose_identity() {
        let alignment = aligned(&[(0, 0), (1, 2), (2, 4)]);
        let identity = Alignment::identity(0, 4);
        assert_eq!(alignment.compose(&identity), alignment);
        assert_eq!(Alignment::identity(0, 2).compose(&alignment), alignment);
    }

    #[test]
    fn compose_keeps_same_original_bounds() {
        // An insertion in the second alignment yields both a lower and an
        // upper bound pair for the same original position.
        let first = Alignment::identity(0, 3);
        let second = aligned(&[(0, 0), (1, 1), (1, 2), (2, 3), (3, 4)]);
        let composed = first.compose(&second);
        assert_eq!(
            composed.values(),
            &[(0, 0), (1, 1), (1, 2), (2, 3), (3, 4)]
        );
    }

    #[test]
    fn compose_through_coarse_segments() {
        let first = aligned(&[(0, 0), (2, 4)]);
        let second = aligned(&[(0, 0), (2, 1), (4, 2)]);
        let composed = first.compose(&second);
        assert_eq!(composed.values(), &[(0, 0), (2, 2)]);
    }

    #[test]
    #[should_panic(expected = "incompatible")]
    fn compose_requires_meeting_bounds() {
        let first = aligned(&[(0, 0), (1, 1)]);
        let second = aligned(&[(0, 0), (2, 2)]);
        first.compose(&second);
    }

    #[test]
    fn compose_is_sequential_mapping() {
        let a = aligned(&[(0, 0), (1, 2), (2, 2), (3, 4)]);
        let b = aligned(&[(0, 0), (1, 1), (2, 3), (3, 3), (4, 6)]);
        let composed = a.compose(&b);
        assert_eq!(composed.original_bounds(), a.original_bounds());
        assert_eq!(composed.modified_bounds(), b.modified_bounds());
        for i in 0..=3 {
            for j in i..=3 {
                let through = b.modified_bounds_of(a.modified_bounds_of((i, j)));
                assert_eq!(composed.modified_bounds_of((i, j)), through);
            }
        }
    }

    #[test]
    fn inverse_swaps_axes() {
        let alignment = aligned(&[(0, 0), (1, 2), (2, 4)]);
        assert_eq!(alignment.inverse().values(), &[(0, 0), (2, 1), (4, 2)]);
        assert_eq!(alignment.inverse().inverse(), alignment);
    }

    #[test]
    fn infer_identical() {
        let chars: Vec<char> = "test".chars().collect();
        let alignment = Alignment::infer(&chars, &chars);
        assert_eq!(alignment, Alignment::identity(0, 4));
    }

    #[test]
    fn infer_insertion() {
        let original: Vec<char> = "color".chars().collect();
        let modified: Vec<char> = "colour".chars().collect();
        let alignment = Alignment::infer(&original, &modified);
        assert_eq!(
            alignment.values(),
            &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (4, 5), (5, 6)]
        );
    }

    #[test]
    fn infer_deletion() {
        let original: Vec<char> = "ab---".chars().collect();
        let modified: Vec<char> = "ab".chars().collect();
        let alignment = Alignment::infer(&original, &modified);
        assert_eq!(
            alignment.values(),
            &[(0, 0), (1, 1), (2, 2), (3, 2), (4, 2), (5, 2)]
        );
    }

    #[test]
    fn infer_empty_sides() {
        let some: Vec<char> = "ab".chars().collect();
        let none: Vec<char> = Vec::new();
        assert_eq!(
            Alignment::infer(&some, &none).values(),
            &[(0, 0), (1, 0), (2, 0)]
        );
        assert_eq!(
            Alignment::infer(&none, &some).values(),
            &[(0, 0), (0, 1), (0, 2)]
        );
        assert_eq!(Alignment::infer(&none, &none).values(), &[(0, 0)]);
    }

    #[test]
    fn infer_matches_both_orders() {
        // Inference swaps internally when the modified side is longer; the
        // result must stay consistent with the unswapped direction.
        let short: Vec<char> = "hello".chars().collect();
        let long: Vec<char> = "hello world".chars().collect();
        let forward = Alignment::infer(&long, &short);
        let backward = Alignment::infer(&short, &long);
        assert_eq!(forward.inverse(), backward);
    }

    #[test]
    fn infer_with_custom_costs() {
        // Make substitution prohibitively expensive so deletions and
        // insertions win.
        let original: Vec<char> = "ab".chars().collect();
        let modified: Vec<char> = "cd".chars().collect();
        let alignment = Alignment::infer_with_costs(&original, &modified, |o, m| {
            match (o, m) {
                (Some(o), Some(m)) if o == m => 0,
                (Some(_), Some(_)) => 10,
                _ => 1,
            }
        });
        assert_eq!(alignment.original_bounds(), Span::new(0, 2));
        assert_eq!(alignment.modified_bounds(), Span::new(0, 2));
        // No segment should pair an original char with a modified char.
        for window in alignment.values().windows(2) {
            let o_step = window[1].0 - window[0].0;
            let m_step = window[1].1 - window[0].1;
            assert!(o_step == 0 || m_step == 0);
        }
    }

    #[test]
    fn debug_format() {
        let alignment = aligned(&[(0, 0), (1, 2)]);
        assert_eq!(format!("{alignment:?}"), "[0\u{21cb}0, 1\u{21cb}2]");
    }
}
