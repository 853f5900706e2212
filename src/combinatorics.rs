//! Combinatorial generation: permutations, r-combinations, and subsets.
//!
//! The stepping functions (`next_permutation`, `prev_permutation`,
//! `next_r_combination`) advance their argument in place and return whether
//! another configuration existed, so a full enumeration is a `while` loop.
//! [`Subsets`] enumerates the power set as an iterator.

use crate::numeric::reverse_range;

/// Advance `data` to the next permutation in increasing lexicographic
/// order. Returns `false` (leaving the slice untouched) when `data` is
/// already the last permutation or has fewer than two elements.
pub fn next_permutation<T: Ord>(data: &mut [T]) -> bool {
    step_permutation(data, |a, b| a >= b)
}

/// Advance `data` to the next permutation in decreasing lexicographic
/// order. Mirror image of [`next_permutation`].
pub fn prev_permutation<T: Ord>(data: &mut [T]) -> bool {
    step_permutation(data, |a, b| a <= b)
}

/// Shared permutation step. `blocks(a, b)` is true while the adjacent pair
/// `(a, b)` cannot serve as the pivot ascent; flipping the predicate flips
/// the traversal direction.
fn step_permutation<T, F>(data: &mut [T], blocks: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    if data.len() < 2 {
        return false;
    }
    let last = data.len() - 1;

    // Rightmost position whose element is ordered before its successor
    let mut pivot = last - 1;
    while blocks(&data[pivot], &data[pivot + 1]) {
        if pivot == 0 {
            return false; // monotone: no further permutation exists
        }
        pivot -= 1;
    }

    // Rightmost element the pivot can be swapped with; guaranteed to exist
    // once an ascent was found
    let mut successor = last;
    while blocks(&data[pivot], &data[successor]) {
        successor -= 1;
        debug_assert!(successor > pivot);
    }

    data.swap(pivot, successor);
    reverse_range(data, pivot + 1, last);
    true
}

/// Advance an r-combination of values drawn from `[0, max_val]` to its
/// lexicographic successor in place.
///
/// `combination` must be strictly increasing (as every combination in this
/// ordering is). Returns `false` when the combination is exhausted, the
/// slice is empty, or `[0, max_val]` holds fewer than `r` values.
pub fn next_r_combination(max_val: usize, combination: &mut [usize]) -> bool {
    if combination.is_empty() {
        return false;
    }
    let r = combination.len() - 1;
    if max_val <= r {
        return false;
    }

    // Rightmost slot not yet at its maximum value
    let mut i = r;
    while combination[i] == max_val - r + i {
        if i == 0 {
            return false;
        }
        i -= 1;
    }

    combination[i] += 1;
    for j in i + 1..=r {
        combination[j] = combination[i] + j - i;
    }
    true
}

/// All r-element combinations of `input`, preserving input order inside
/// each combination.
///
/// Returns an empty list when `r` exceeds the input length, and the single
/// empty combination when `r` is zero.
pub fn r_combinations<T: Clone>(input: &[T], r: usize) -> Vec<Vec<T>> {
    if r > input.len() {
        return Vec::new();
    }
    combine(input, r)
}

fn combine<T: Clone>(rest: &[T], r: usize) -> Vec<Vec<T>> {
    if r == 0 {
        return vec![Vec::new()];
    }

    // Every combination either contains rest[0] or skips it
    let mut result = Vec::new();
    for mut tail in combine(&rest[1..], r - 1) {
        tail.insert(0, rest[0].clone());
        result.push(tail);
    }
    if rest.len() > r {
        result.extend(combine(&rest[1..], r));
    }
    result
}

/// Iterator over all subsets of a slice.
///
/// Walks a binary incrementing membership mask, so the non-empty subsets
/// come first and the empty subset is yielded last, closing the cycle. A
/// slice of n elements yields exactly 2^n subsets.
pub struct Subsets<'a, T> {
    set: &'a [T],
    mask: Vec<bool>,
    finished: bool,
}

impl<'a, T> Subsets<'a, T> {
    /// Enumerate the subsets of `set`.
    pub fn new(set: &'a [T]) -> Self {
        Self {
            set,
            mask: vec![false; set.len()],
            finished: false,
        }
    }
}

impl<T: Clone> Iterator for Subsets<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.finished {
            return None;
        }

        // Binary increment of the mask; carrying out of the top bit means
        // the mask wrapped to all-false and the empty subset ends the run
        let mut carried_out = true;
        for bit in self.mask.iter_mut() {
            *bit = !*bit;
            if *bit {
                carried_out = false;
                break;
            }
        }
        if carried_out {
            self.finished = true;
        }

        let subset = self
            .set
            .iter()
            .zip(&self.mask)
            .filter(|&(_, &included)| included)
            .map(|(item, _)| item.clone())
            .collect();
        Some(subset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_permutation_cycle() {
        let mut data = [1, 2, 3];
        let mut seen = vec![data.to_vec()];
        while next_permutation(&mut data) {
            seen.push(data.to_vec());
        }
        assert_eq!(
            seen,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_prev_permutation() {
        let mut data = [3, 2, 1];
        assert!(prev_permutation(&mut data));
        assert_eq!(data, [3, 1, 2]);
        assert!(prev_permutation(&mut data));
        assert_eq!(data, [2, 3, 1]);

        let mut first = [1, 2, 3];
        assert!(!prev_permutation(&mut first));
    }

    #[test]
    fn test_permutation_with_duplicates() {
        let mut data = [1, 1, 2];
        let mut count = 1;
        while next_permutation(&mut data) {
            count += 1;
        }
        // 3!/2! distinct arrangements
        assert_eq!(count, 3);
        assert_eq!(data, [2, 1, 1]);
    }

    #[test]
    fn test_permutation_degenerate() {
        let mut empty: [i32; 0] = [];
        assert!(!next_permutation(&mut empty));
        let mut single = [1];
        assert!(!next_permutation(&mut single));
    }

    #[test]
    fn test_next_r_combination() {
        let mut comb = [0, 1, 2];
        let mut all = vec![comb.to_vec()];
        while next_r_combination(4, &mut comb) {
            all.push(comb.to_vec());
        }
        // C(5, 3) combinations of {0..4}
        assert_eq!(all.len(), 10);
        assert_eq!(all.first().unwrap(), &vec![0, 1, 2]);
        assert_eq!(all.last().unwrap(), &vec![2, 3, 4]);
        // Each step is a strict lexicographic advance
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_next_r_combination_degenerate() {
        let mut empty: [usize; 0] = [];
        assert!(!next_r_combination(4, &mut empty));
        // Range [0, 2] cannot hold 4 distinct values
        let mut comb = [0, 1, 2, 3];
        assert!(!next_r_combination(2, &mut comb));
    }

    #[test]
    fn test_r_combinations() {
        let combos = r_combinations(&[1, 2, 3, 4], 2);
        assert_eq!(combos.len(), 6);
        assert!(combos.contains(&vec![1, 2]));
        assert!(combos.contains(&vec![1, 3]));
        assert!(combos.contains(&vec![1, 4]));
        assert!(combos.contains(&vec![2, 3]));
        assert!(combos.contains(&vec![2, 4]));
        assert!(combos.contains(&vec![3, 4]));
    }

    #[test]
    fn test_r_combinations_bounds() {
        assert!(r_combinations(&[1, 2], 3).is_empty());
        assert_eq!(r_combinations(&[1, 2], 0), vec![Vec::<i32>::new()]);
        assert_eq!(r_combinations(&[1, 2, 3], 3), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_subsets_power_set() {
        let set = [1, 2, 3];
        let subsets: Vec<Vec<i32>> = Subsets::new(&set).collect();
        assert_eq!(subsets.len(), 8);
        // Empty subset comes last
        assert!(subsets.last().unwrap().is_empty());
        assert!(subsets[..7].iter().all(|s| !s.is_empty()));
        for wanted in [vec![1], vec![2, 3], vec![1, 2, 3]] {
            assert!(subsets.contains(&wanted));
        }
    }

    #[test]
    fn test_subsets_of_empty_set() {
        let set: [i32; 0] = [];
        let subsets: Vec<Vec<i32>> = Subsets::new(&set).collect();
        assert_eq!(subsets, vec![Vec::<i32>::new()]);
    }
}
