//! Longest common subsequence and cost-parametrized approximate matching.
//!
//! Both are classic dynamic-programming table fills over the characters of
//! two strings. The approximate matcher takes its costs through the
//! [`MatchCosts`] trait so the same fill serves edit distance and weighted
//! variants alike; [`EditDistance`] provides the unit-cost instantiation.

use std::collections::BTreeSet;

type Table = Vec<Vec<usize>>;

/// Length of the longest common subsequence of `a` and `b`.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let table = lcs_table(&a, &b);
    table[a.len()][b.len()]
}

/// All distinct longest common subsequences of `a` and `b`.
///
/// Empty when the LCS length is zero. Exponential in the worst case, as the
/// number of distinct subsequences can be.
pub fn lcs_sequences(a: &str, b: &str) -> BTreeSet<String> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return BTreeSet::new();
    }

    let table = lcs_table(&a, &b);
    if table[a.len()][b.len()] == 0 {
        return BTreeSet::new();
    }
    backtrack(&table, &a, &b, a.len(), b.len(), false)
}

/// Standard LCS score table: `t[i][j]` is the LCS length of `a[..i]` and
/// `b[..j]`.
fn lcs_table(a: &[char], b: &[char]) -> Table {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i][j - 1].max(table[i - 1][j])
            };
        }
    }
    table
}

/// Recover every longest subsequence by walking the table backwards,
/// branching wherever both neighbors carry the maximal score.
fn backtrack(
    table: &Table,
    a: &[char],
    b: &[char],
    i: usize,
    j: usize,
    matched: bool,
) -> BTreeSet<String> {
    let mut result = BTreeSet::new();

    if i == 0 || j == 0 {
        if matched {
            result.insert(String::new());
        }
    } else if a[i - 1] == b[j - 1] {
        for prefix in backtrack(table, a, b, i - 1, j - 1, true) {
            let mut sequence = prefix;
            sequence.push(a[i - 1]);
            result.insert(sequence);
        }
    } else {
        if table[i][j - 1] >= table[i - 1][j] {
            result.extend(backtrack(table, a, b, i, j - 1, matched));
        }
        if table[i - 1][j] >= table[i][j - 1] {
            result.extend(backtrack(table, a, b, i - 1, j, matched));
        }
    }

    result
}

/// Cost model for [`approximate_match`].
///
/// The three per-character costs are required; table initialization and
/// result extraction have edit-distance-shaped defaults that weighted
/// variants can override.
pub trait MatchCosts {
    /// Cost of aligning `c1` against `c2`.
    fn match_cost(&self, c1: char, c2: char) -> usize;

    /// Cost of inserting `c`.
    fn insert_cost(&self, c: char) -> usize;

    /// Cost of deleting `c`.
    fn delete_cost(&self, c: char) -> usize;

    /// Initial cost table of the given dimensions. The default charges one
    /// unit per leading insertion/deletion and leaves the interior maxed
    /// out for the fill to lower.
    fn init_table(&self, rows: usize, cols: usize) -> Table {
        let mut table = vec![vec![usize::MAX; cols]; rows];
        for (j, slot) in table[0].iter_mut().enumerate() {
            *slot = j;
        }
        for (i, row) in table.iter_mut().enumerate().skip(1) {
            row[0] = i;
        }
        table
    }

    /// Extract the final score from the filled table. The default reads the
    /// bottom-right corner.
    fn result(&self, table: &Table) -> usize {
        table
            .last()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(0)
    }
}

/// Unit-cost matching: the result is the Levenshtein edit distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistance;

impl MatchCosts for EditDistance {
    fn match_cost(&self, c1: char, c2: char) -> usize {
        if c1 == c2 { 0 } else { 1 }
    }

    fn insert_cost(&self, _c: char) -> usize {
        1
    }

    fn delete_cost(&self, _c: char) -> usize {
        1
    }
}

/// Best alignment score of `a` against `b` under the given cost model.
///
/// For [`EditDistance`] this is the minimum number of single-character
/// edits transforming one string into the other.
pub fn approximate_match(a: &str, b: &str, costs: &impl MatchCosts) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = costs.init_table(a.len() + 1, b.len() + 1);

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let candidates = [
                table[i - 1][j - 1].saturating_add(costs.match_cost(a[i - 1], b[j - 1])),
                table[i][j - 1].saturating_add(costs.insert_cost(a[i - 1])),
                table[i - 1][j].saturating_add(costs.delete_cost(a[i - 1])),
            ];
            for cost in candidates {
                if cost < table[i][j] {
                    table[i][j] = cost;
                }
            }
        }
    }

    costs.result(&table)
}
