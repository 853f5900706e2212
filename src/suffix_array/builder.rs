//! Prefix-doubling construction of the rank table.
//!
//! Each round sorts text positions by a pair of previously computed ranks:
//! the rank of the length-2^k prefix starting at the position, and the rank
//! of the length-2^k prefix starting 2^k further in. Equal pairs receive
//! equal ranks, so every row is an order-with-ties over prefixes of the
//! round's length. Rounds stop once 2^k covers the whole text; the sorted
//! order of the final round is the suffix array.
//!
//! Within a round the sort compares precomputed rank pairs, never raw
//! substrings, which keeps each round at O(n log n) and the whole build at
//! O(n log^2 n).

/// Rank rows (row k ranks prefixes of length 2^k) plus the final sort order.
pub(super) struct RankTable {
    /// Append-only rows; never mutated once pushed.
    pub rows: Vec<Vec<usize>>,
    /// Text positions sorted by the lexicographic order of their suffixes.
    pub sorted_positions: Vec<usize>,
}

/// Rank pair for one position in one round. The second component is `None`
/// when the second half starts past the end of the text; `None` orders
/// before every real rank, standing in for a rank smaller than all others.
type PairKey = (usize, Option<usize>);

pub(super) fn build(text: &[u8]) -> RankTable {
    let n = text.len();
    let mut rows: Vec<Vec<usize>> = Vec::new();

    if n == 0 {
        return RankTable {
            rows,
            sorted_positions: Vec::new(),
        };
    }

    // Row 0: byte values stand in for ranks of the length-1 prefixes
    rows.push(text.iter().map(|&b| b as usize).collect());

    let mut order: Vec<usize> = (0..n).collect();

    let mut width = 1;
    while width < n {
        let keys: Vec<PairKey> = {
            let prev = rows.last().expect("row 0 is always present");
            (0..n)
                .map(|i| (prev[i], (i + width < n).then(|| prev[i + width])))
                .collect()
        };

        order.sort_unstable_by_key(|&pos| keys[pos]);

        // Equal pairs inherit the rank of their predecessor in sorted order;
        // everything else is ranked by its sorted index
        let mut next = vec![0usize; n];
        for (sorted_idx, &pos) in order.iter().enumerate() {
            if sorted_idx > 0 && keys[pos] == keys[order[sorted_idx - 1]] {
                next[pos] = next[order[sorted_idx - 1]];
            } else {
                next[pos] = sorted_idx;
            }
        }
        rows.push(next);

        width <<= 1;
    }

    RankTable {
        rows,
        sorted_positions: order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_abac() {
        let table = build(b"abac");
        assert_eq!(table.sorted_positions, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_build_bobocel() {
        let table = build(b"bobocel");
        assert_eq!(table.sorted_positions, vec![0, 2, 4, 5, 6, 1, 3]);
    }

    #[test]
    fn test_build_empty() {
        let table = build(b"");
        assert!(table.sorted_positions.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_build_single_byte() {
        let table = build(b"x");
        assert_eq!(table.sorted_positions, vec![0]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_row_count_is_log_rounds_plus_one() {
        // 6 bytes: widths 1, 2, 4 run, width 8 stops => 4 rows
        let table = build(b"lalala");
        assert_eq!(table.rows.len(), 4);
        assert!(table.rows.iter().all(|row| row.len() == 6));
    }

    #[test]
    fn test_equal_prefixes_share_ranks() {
        let table = build(b"aaaa");
        // Every length-1 prefix is "a": row 0 gives them all the same value
        let row0 = &table.rows[0];
        assert!(row0.iter().all(|&r| r == row0[0]));
        // Length-2 prefixes at 0, 1, 2 are all "aa" and must share a rank
        let row1 = &table.rows[1];
        assert_eq!(row1[0], row1[1]);
        assert_eq!(row1[1], row1[2]);
        // Suffixes sort shortest-first
        assert_eq!(table.sorted_positions, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_nul_bytes_do_not_collide_with_sentinel() {
        // A NUL byte ranks 0 in row 0; the out-of-range sentinel must still
        // order before it, so the shorter suffix sorts first
        let table = build(b"\x00\x00");
        assert_eq!(table.sorted_positions, vec![1, 0]);
    }

    #[test]
    fn test_matches_naive_sort() {
        let text = b"the quick brown fox jumps over the lazy dog";
        let table = build(text);
        let mut naive: Vec<usize> = (0..text.len()).collect();
        naive.sort_by_key(|&i| &text[i..]);
        assert_eq!(table.sorted_positions, naive);
    }
}
