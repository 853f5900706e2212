//! Ordered container primitives.
//!
//! Comparator-parametrized binary search, lower/upper bound, the Lomuto
//! partition scheme, and quickselect order statistics. These are the building
//! blocks the heap and suffix array engines are assembled from: pure functions
//! over slices, with closures standing in for comparison where a caller needs
//! something other than `Ord`.

use crate::error::{Error, Result};

/// Binary search over a sorted slice using caller-supplied predicates.
///
/// `is_smaller(item, target)` must be consistent with the slice order;
/// `is_equal(item, target)` decides whether the converged element is a match.
/// Returns the index of a matching element, or `items.len()` when no element
/// matches. The search converges on the leftmost element for which
/// `is_smaller` is false.
pub fn bin_search_by<T, U: ?Sized>(
    items: &[T],
    target: &U,
    is_equal: impl Fn(&T, &U) -> bool,
    is_smaller: impl Fn(&T, &U) -> bool,
) -> usize {
    if items.is_empty() {
        return 0;
    }

    let mut beg = 0;
    let mut end = items.len() - 1;

    while beg < end {
        let middle = (beg + end) / 2;
        if is_smaller(&items[middle], target) {
            beg = middle + 1;
        } else {
            end = middle;
        }
    }

    if is_equal(&items[beg], target) {
        beg
    } else {
        items.len()
    }
}

/// Binary search over a sorted slice of `Ord` elements.
///
/// Returns the index of a matching element, or `items.len()` when absent.
pub fn bin_search<T: Ord>(items: &[T], target: &T) -> usize {
    bin_search_by(items, target, |item, t| item == t, |item, t| item < t)
}

/// Index of the smallest element strictly greater than `target`.
///
/// Returns `items.len()` when every element is less than or equal to
/// `target` (no such bound exists). The slice must be sorted ascending.
pub fn lower_bound<T: Ord>(items: &[T], target: &T) -> usize {
    let not_found = items.len();

    let Some(last) = items.last() else {
        return not_found;
    };
    if target >= last {
        return not_found;
    }

    let mut beg = 0;
    let mut end = items.len() - 1;
    while beg < end {
        let middle = (beg + end) / 2;
        if items[middle] > *target {
            end = middle;
        } else {
            beg = middle + 1;
        }
    }

    beg
}

/// Index of the biggest element strictly smaller than `target`.
///
/// Returns `items.len()` when every element is greater than or equal to
/// `target` (no such bound exists). The slice must be sorted ascending.
pub fn upper_bound<T: Ord>(items: &[T], target: &T) -> usize {
    let not_found = items.len();

    if items.is_empty() || *target <= items[0] {
        return not_found;
    }
    let last = items.len() - 1;
    if *target > items[last] {
        return last;
    }

    let mut beg = 0;
    let mut end = last;
    while beg < end {
        // Ceiling split so the loop makes progress when only two candidates remain
        let middle = (beg + end + 1) / 2;
        if items[middle] < *target {
            beg = middle;
        } else {
            end = middle - 1;
        }
    }

    beg
}

/// Lomuto partition around the element at `pivot`.
///
/// Moves the pivot value to the end, sweeps smaller-or-equal elements to the
/// front in a single pass, then drops the pivot into the gap. Returns the
/// pivot's final index. A slice with fewer than two elements is returned
/// unchanged with index 0.
pub fn partition_lomuto_at<T: Ord>(data: &mut [T], pivot: usize) -> usize {
    if data.len() < 2 {
        return 0;
    }

    let last = data.len() - 1;
    if pivot != last {
        data.swap(pivot, last);
    }

    let mut insert_pos = 0;
    for i in 0..last {
        if data[i] <= data[last] {
            if i != insert_pos {
                data.swap(i, insert_pos);
            }
            insert_pos += 1;
        }
    }

    if insert_pos != last {
        data.swap(insert_pos, last);
    }

    insert_pos
}

/// Lomuto partition using the last element as the pivot.
pub fn partition_lomuto<T: Ord>(data: &mut [T]) -> usize {
    if data.is_empty() {
        return 0;
    }
    partition_lomuto_at(data, data.len() - 1)
}

/// Value of the n-th smallest element, 1-based, via repeated partitioning.
///
/// Average O(n); the slice is reordered as a side effect. Returns
/// [`Error::RankOutOfRange`] when `n` is zero or exceeds the element count.
pub fn nth_smallest<T: Ord + Clone>(data: &mut [T], n: usize) -> Result<T> {
    if n == 0 || n > data.len() {
        return Err(Error::RankOutOfRange {
            rank: n,
            len: data.len(),
        });
    }

    let target = n - 1;
    let mut beg = 0;
    let mut end = data.len();

    loop {
        debug_assert!(beg <= target && target < end);
        let found = beg + partition_lomuto(&mut data[beg..end]);
        if found == target {
            return Ok(data[found].clone());
        }
        if found > target {
            end = found;
        } else {
            beg = found + 1;
        }
    }
}
