//! Comparison sorts over the shared partition primitive.
//!
//! `quicksort` recurses over [`partition_lomuto`]; `mergesort` is the classic
//! top-down variant with auxiliary halves. The third sort of the family,
//! [`heapsort`](crate::heap::heapsort), lives in the heap module so it can
//! share the bubble-down path with the live heap.

use crate::order::partition_lomuto;

/// In-place recursive quicksort.
///
/// Average O(n log n) with the last element as the pivot in every range.
pub fn quicksort<T: Ord>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }

    // The pivot lands at its final position; recurse on both sides of it
    let pivot = partition_lomuto(data);
    quicksort(&mut data[..pivot]);
    quicksort(&mut data[pivot + 1..]);
}

/// Top-down mergesort.
///
/// Splits into cloned halves, sorts them recursively, and merges back into
/// the original slice. O(n log n) time, O(n) auxiliary space, stable.
pub fn mergesort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }

    let mid = data.len() / 2;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();

    mergesort(&mut left);
    mergesort(&mut right);

    merge(&left, &right, data);
}

/// Merge two sorted runs into `dest`, which must hold exactly both lengths.
/// Ties take from the left run first, keeping the sort stable.
fn merge<T: Ord + Clone>(left: &[T], right: &[T], dest: &mut [T]) {
    debug_assert_eq!(left.len() + right.len(), dest.len());

    let mut l = 0;
    let mut r = 0;
    for slot in dest.iter_mut() {
        let take_right = l == left.len() || (r < right.len() && right[r] < left[l]);
        if take_right {
            *slot = right[r].clone();
            r += 1;
        } else {
            *slot = left[l].clone();
            l += 1;
        }
    }

    debug_assert!(l == left.len() && r == right.len());
}
