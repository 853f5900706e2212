//! Suffix array with O(log n) LCP and substring search.
//!
//! Built once from an immutable byte text via the prefix-doubling algorithm
//! (see [`builder`]); every query is read-only afterwards.
//!
//! ## Architecture
//!
//! - `builder`: doubling rounds producing the rank table and sort order
//! - queries on [`SuffixArray`]: longest common prefix of two suffixes,
//!   substring containment search, minimal lexicographic rotation, n-th
//!   suffix access
//!
//! The rank table (one row per doubling round) is retained after the build:
//! it is what makes `lcp` a walk over O(log n) rank comparisons instead of a
//! character scan.

mod builder;

use crate::error::{Error, Result};
use crate::order;
use std::cmp::Ordering;

/// A suffix array over an owned, immutable byte text.
///
/// `positions()[i]` is the starting text position of the i-th suffix in
/// lexicographic order.
#[derive(Debug, Clone)]
pub struct SuffixArray {
    text: Vec<u8>,
    positions: Vec<usize>,
    /// Row k holds, per text position, the rank of the length-2^k prefix
    /// starting there. Equal prefixes share a rank.
    rank_rows: Vec<Vec<usize>>,
}

impl SuffixArray {
    /// Build the suffix array for `text`.
    ///
    /// O(n log^2 n) time, n x (log2(n) + 1) rank table space. An empty text
    /// yields an empty array with no doubling rounds executed.
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        let text = text.into();
        let table = builder::build(&text);
        Self {
            text,
            positions: table.sorted_positions,
            rank_rows: table.rows,
        }
    }

    /// The input text.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Suffix starting positions in lexicographic order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Text length.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `idx` is a valid slot in the suffix array (i.e. not the
    /// not-found sentinel returned by [`search`](SuffixArray::search)).
    pub fn index_valid(&self, idx: usize) -> bool {
        idx < self.positions.len()
    }

    /// Length of the longest common prefix of the suffixes starting at `x`
    /// and `y`.
    ///
    /// Walks the rank table from the widest row down, advancing both
    /// positions by 2^k whenever their ranks match, so the answer
    /// accumulates in O(log n) rank comparisons. `lcp(x, x)` is the full
    /// remaining length `n - x`.
    ///
    /// Returns [`Error::IndexOutOfBounds`] unless both indices are inside
    /// the text.
    pub fn lcp(&self, x: usize, y: usize) -> Result<usize> {
        let n = self.text.len();
        if x >= n {
            return Err(Error::IndexOutOfBounds { index: x, len: n });
        }
        if y >= n {
            return Err(Error::IndexOutOfBounds { index: y, len: n });
        }
        if x == y {
            return Ok(n - x);
        }

        let mut x = x;
        let mut y = y;
        let mut len = 0;
        for k in (0..self.rank_rows.len()).rev() {
            if x >= n || y >= n {
                break;
            }
            if self.rank_rows[k][x] == self.rank_rows[k][y] {
                // Both prefixes of length 2^k match; skip past them and keep
                // collecting shorter matches from the remainder
                let step = 1usize << k;
                x += step;
                y += step;
                len += step;
            }
        }
        Ok(len)
    }

    /// Search for a suffix that starts with `pattern`.
    ///
    /// Binary search over the suffix array with a three-way suffix/pattern
    /// comparison, O(|pattern| log n). Returns the suffix array slot of a
    /// matching suffix (any matching slot is a valid answer; the text
    /// position is `positions()[slot]`), or the sentinel `len()` when no
    /// suffix has the pattern as a prefix — check with
    /// [`index_valid`](SuffixArray::index_valid).
    ///
    /// Returns [`Error::EmptyPattern`] for an empty pattern.
    pub fn search(&self, pattern: &[u8]) -> Result<usize> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }

        Ok(order::bin_search_by(
            &self.positions,
            pattern,
            |&pos, pat| self.compare_suffix(pos, pat) == Ordering::Equal,
            |&pos, pat| self.compare_suffix(pos, pat) == Ordering::Less,
        ))
    }

    /// Three-way comparison of the suffix at `start` against `pattern`.
    ///
    /// `Equal` means the pattern is a prefix of the suffix. A suffix that
    /// matches as far as it goes but is too short to contain the whole
    /// pattern counts as `Less`, consistent with lexicographic order.
    fn compare_suffix(&self, start: usize, pattern: &[u8]) -> Ordering {
        let suffix = &self.text[start..];
        let shared = suffix.len().min(pattern.len());
        match suffix[..shared].cmp(&pattern[..shared]) {
            Ordering::Equal if suffix.len() < pattern.len() => Ordering::Less,
            ordering => ordering,
        }
    }

    /// The lexicographically smallest rotation of the text.
    ///
    /// Rotations are compared through a suffix sort of the doubled text, so
    /// every candidate carries full wrap-around context. (The smallest
    /// suffix of the original text alone is not enough: when it is a prefix
    /// of a competing suffix, its rotation can lose on the characters that
    /// wrap, e.g. `"cabab"` whose smallest suffix `"ab"` starts the rotation
    /// `"abcab"` while `"ababc"` is smaller.) An empty text yields an empty
    /// rotation.
    pub fn min_lex_rotation(&self) -> Vec<u8> {
        let n = self.text.len();
        if n == 0 {
            return Vec::new();
        }

        let mut doubled = Vec::with_capacity(2 * n);
        doubled.extend_from_slice(&self.text);
        doubled.extend_from_slice(&self.text);
        let table = builder::build(&doubled);

        // First sorted suffix starting inside the original text; its first
        // n characters are the minimal rotation
        let start = table
            .sorted_positions
            .iter()
            .copied()
            .find(|&pos| pos < n)
            .expect("doubled text has suffixes starting in the first half");

        let mut rotation = Vec::with_capacity(n);
        rotation.extend_from_slice(&self.text[start..]);
        rotation.extend_from_slice(&self.text[..start]);
        rotation
    }

    /// The n-th suffix in lexicographic order, 1-based.
    ///
    /// Returns [`Error::IndexOutOfBounds`] when `n` is outside `[1, len]`.
    pub fn nth_suffix(&self, n: usize) -> Result<&[u8]> {
        if n == 0 || n > self.positions.len() {
            return Err(Error::IndexOutOfBounds {
                index: n,
                len: self.positions.len(),
            });
        }
        Ok(&self.text[self.positions[n - 1]..])
    }
}
