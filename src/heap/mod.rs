//! Indexable binary heap with arbitrary-element deletion.
//!
//! The heap is a zero-indexed complete binary tree laid out in a contiguous
//! buffer: the children of index `i` sit at `2i+1` and `2i+2`, its parent at
//! `(i-1)/2`. Ordering is a zero-sized [`HeapOrder`] strategy type, so a
//! min-heap and a max-heap share all code with no runtime dispatch.
//!
//! The repair traversals (`bubble_up`, `bubble_down`, `heapify`) are free
//! functions over a slice plus an explicit logical length. That logical
//! length is what lets [`heapsort`] reuse the exact same paths: it shrinks a
//! counter while parking extracted elements past the logical end of the same
//! buffer, producing an ascending in-place sort.
//!
//! Storage is either owned ([`Heap`]) or borrowed from the caller
//! ([`HeapView`]). Neither is thread-safe; exclusive access is assumed.

use std::marker::PhantomData;

/// Ordering strategy: `goes_before(a, b)` is true when `a` must sit above
/// `b` in the tree. The heap invariant is that `goes_before(child, parent)`
/// is false for every non-root node.
pub trait HeapOrder<T> {
    /// Whether `a` is ordered before `b` under this strategy.
    fn goes_before(a: &T, b: &T) -> bool;
}

/// Smallest element on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

impl<T: Ord> HeapOrder<T> for MinOrder {
    #[inline]
    fn goes_before(a: &T, b: &T) -> bool {
        a < b
    }
}

/// Biggest element on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

impl<T: Ord> HeapOrder<T> for MaxOrder {
    #[inline]
    fn goes_before(a: &T, b: &T) -> bool {
        a > b
    }
}

/// A binary heap with smallest element on top.
pub type MinHeap<T> = Heap<T, MinOrder>;

/// A binary heap with biggest element on top.
pub type MaxHeap<T> = Heap<T, MaxOrder>;

/// Move the element at `idx` up toward the root until its parent is ordered
/// before it (or it becomes the root).
fn bubble_up<T, O: HeapOrder<T>>(data: &mut [T], mut idx: usize) {
    debug_assert!(idx < data.len());

    while idx > 0 {
        let parent = (idx - 1) / 2;
        if !O::goes_before(&data[idx], &data[parent]) {
            break;
        }
        data.swap(idx, parent);
        idx = parent;
    }
}

/// Move the element at `idx` down, swapping with the better-ordered child,
/// until no child is ordered before it. Only the first `len` slots of `data`
/// belong to the heap.
fn bubble_down<T, O: HeapOrder<T>>(data: &mut [T], len: usize, mut idx: usize) {
    debug_assert!(idx < len && len <= data.len());

    loop {
        let left = 2 * idx + 1;
        if left >= len {
            break; // no children
        }

        // Pick whichever child goes first; right may not exist
        let right = left + 1;
        let child = if right < len && O::goes_before(&data[right], &data[left]) {
            right
        } else {
            left
        };

        if !O::goes_before(&data[child], &data[idx]) {
            break;
        }
        data.swap(idx, child);
        idx = child;
    }
}

/// Restore the heap invariant over initially unordered data in linear time,
/// bubbling down every internal node from the deepest parent to the root.
fn heapify<T, O: HeapOrder<T>>(data: &mut [T], len: usize) {
    if len < 2 {
        return;
    }
    let deepest_parent = (len - 2) / 2;
    for idx in (0..=deepest_parent).rev() {
        bubble_down::<T, O>(data, len, idx);
    }
}

/// Remove and return the element at `idx`: the last element fills the hole,
/// the buffer shrinks by one, and the replacement is moved to wherever the
/// invariant puts it. The upward pass is a no-op when `idx` is the root, so
/// extract-top reduces to the plain sink-down procedure.
fn remove_at<T, O: HeapOrder<T>>(data: &mut Vec<T>, idx: usize) -> T {
    debug_assert!(idx < data.len());

    let removed = data.swap_remove(idx);
    if idx < data.len() {
        bubble_up::<T, O>(data, idx);
        let len = data.len();
        bubble_down::<T, O>(data, len, idx);
    }
    removed
}

/// A binary heap owning its backing buffer.
///
/// The ordering comparator is the type parameter `O`; use the [`MinHeap`] and
/// [`MaxHeap`] aliases for the common cases.
#[derive(Debug, Clone)]
pub struct Heap<T, O = MinOrder> {
    data: Vec<T>,
    order: PhantomData<O>,
}

impl<T, O: HeapOrder<T>> Heap<T, O> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            order: PhantomData,
        }
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    /// Build a heap by copying the given elements.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(items.to_vec())
    }

    fn from_vec(mut data: Vec<T>) -> Self {
        let len = data.len();
        heapify::<T, O>(&mut data, len);
        Self {
            data,
            order: PhantomData,
        }
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The top element without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty; calling `top` on an empty heap is a
    /// caller logic error, not a recoverable condition.
    pub fn top(&self) -> &T {
        assert!(!self.data.is_empty(), "top of an empty heap");
        &self.data[0]
    }

    /// Remove and return the top element.
    ///
    /// The last element moves into the root slot and sinks down until the
    /// invariant holds again.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn extract_top(&mut self) -> T {
        assert!(!self.data.is_empty(), "extract from an empty heap");
        remove_at::<T, O>(&mut self.data, 0)
    }

    /// Insert a new element, growing the buffer as needed.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        bubble_up::<T, O>(&mut self.data, last);
    }

    /// Delete the first element equal to `value`, if present.
    ///
    /// The scan is linear; removal re-balances from the vacated slot exactly
    /// like [`extract_top`](Heap::extract_top) does from the root. Returns
    /// whether an element was found and removed.
    pub fn delete_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.data.iter().position(|item| item == value) {
            Some(idx) => {
                remove_at::<T, O>(&mut self.data, idx);
                true
            }
            None => false,
        }
    }

    /// The underlying buffer in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the heap, returning the buffer in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, O: HeapOrder<T>> Default for Heap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Moving a vector in re-heapifies it in place.
impl<T, O: HeapOrder<T>> From<Vec<T>> for Heap<T, O> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

/// A binary heap over caller-owned storage.
///
/// Adopts a mutable reference to an existing vector and re-heapifies it in
/// place; every operation is visible to the owner once the view is dropped.
/// The caller must not touch the vector while the view is alive (the borrow
/// checker enforces this).
#[derive(Debug)]
pub struct HeapView<'a, T, O = MinOrder> {
    data: &'a mut Vec<T>,
    order: PhantomData<O>,
}

impl<'a, T, O: HeapOrder<T>> HeapView<'a, T, O> {
    /// Adopt `data` as heap storage, restoring the invariant in place.
    pub fn new(data: &'a mut Vec<T>) -> Self {
        let len = data.len();
        heapify::<T, O>(data, len);
        Self {
            data,
            order: PhantomData,
        }
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The top element without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn top(&self) -> &T {
        assert!(!self.data.is_empty(), "top of an empty heap");
        &self.data[0]
    }

    /// Remove and return the top element.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn extract_top(&mut self) -> T {
        assert!(!self.data.is_empty(), "extract from an empty heap");
        remove_at::<T, O>(self.data, 0)
    }

    /// Insert a new element into the adopted vector.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        bubble_up::<T, O>(self.data, last);
    }

    /// Delete the first element equal to `value`, if present.
    pub fn delete_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.data.iter().position(|item| item == value) {
            Some(idx) => {
                remove_at::<T, O>(self.data, idx);
                true
            }
            None => false,
        }
    }
}

/// In-place ascending heapsort.
///
/// Builds a max-heap across the whole slice, then repeatedly swaps the top
/// with the last logical slot and shrinks the logical length, so each
/// extracted maximum is parked immediately past the live heap. The logical
/// length is the only state heapsort adds over the shared bubble paths.
pub fn heapsort<T: Ord>(data: &mut [T]) {
    let mut len = data.len();
    heapify::<T, MaxOrder>(data, len);

    while len > 1 {
        data.swap(0, len - 1);
        len -= 1;
        bubble_down::<T, MaxOrder>(data, len, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `goes_before(child, parent)` must be false for every non-root node.
    fn invariant_holds<T, O: HeapOrder<T>>(data: &[T]) -> bool {
        (1..data.len()).all(|idx| !O::goes_before(&data[idx], &data[(idx - 1) / 2]))
    }

    fn drain<T: Ord, O: HeapOrder<T>>(mut heap: Heap<T, O>) -> Vec<T> {
        let mut out = Vec::with_capacity(heap.len());
        while !heap.is_empty() {
            out.push(heap.extract_top());
        }
        out
    }

    #[test]
    fn test_min_heap_extraction_order() {
        let heap = MinHeap::from(vec![2, 8, 7, 4, 1, 6]);
        assert_eq!(drain(heap), vec![1, 2, 4, 6, 7, 8]);
    }

    #[test]
    fn test_max_heap_extraction_order() {
        let heap = MaxHeap::from(vec![2, 8, 7, 4, 1, 6]);
        assert_eq!(drain(heap), vec![8, 7, 6, 4, 2, 1]);
    }

    #[test]
    fn test_from_slice_leaves_source_intact() {
        let source = vec![2, 8, 7];
        let heap = MinHeap::from_slice(&source);
        assert_eq!(source, vec![2, 8, 7]);
        assert_eq!(*heap.top(), 2);
    }

    #[test]
    fn test_insert_and_top() {
        let mut heap = MinHeap::with_capacity(16);
        heap.insert(4);
        heap.insert(1);
        heap.insert(9);
        assert_eq!(*heap.top(), 1);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.extract_top(), 1);
        assert_eq!(*heap.top(), 4);
    }

    #[test]
    fn test_delete_item_present() {
        let mut heap = MinHeap::from(vec![2, 8, 7, 4, 1, 6]);
        assert!(heap.delete_item(&7));
        assert_eq!(heap.len(), 5);
        assert!(invariant_holds::<_, MinOrder>(heap.as_slice()));
        assert_eq!(drain(heap), vec![1, 2, 4, 6, 8]);
    }

    #[test]
    fn test_delete_item_absent() {
        let mut heap = MinHeap::from(vec![2, 8, 7]);
        assert!(!heap.delete_item(&42));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_delete_item_last_slot() {
        let mut heap = MinHeap::from(vec![5, 6, 7]);
        let last = *heap.as_slice().last().unwrap();
        assert!(heap.delete_item(&last));
        assert_eq!(heap.len(), 2);
        assert!(invariant_holds::<_, MinOrder>(heap.as_slice()));
    }

    #[test]
    fn test_delete_item_replacement_moves_up() {
        // Deleting 6 drops the tail element 3 into a slot whose parent is 5;
        // the replacement must travel upward for the invariant to hold.
        let mut heap = MinHeap::new();
        for v in [1, 5, 2, 6, 7, 3] {
            heap.insert(v);
        }
        assert!(heap.delete_item(&6));
        assert!(invariant_holds::<_, MinOrder>(heap.as_slice()));
        assert_eq!(drain(heap), vec![1, 2, 3, 5, 7]);
    }

    #[test]
    fn test_invariant_after_mixed_operations() {
        let mut heap = MinHeap::new();
        for v in [9, 3, 14, 7, 1, 12, 5, 3] {
            heap.insert(v);
            assert!(invariant_holds::<_, MinOrder>(heap.as_slice()));
        }
        heap.extract_top();
        assert!(invariant_holds::<_, MinOrder>(heap.as_slice()));
        heap.delete_item(&12);
        assert!(invariant_holds::<_, MinOrder>(heap.as_slice()));
        heap.insert(2);
        assert!(invariant_holds::<_, MinOrder>(heap.as_slice()));
    }

    #[test]
    #[should_panic(expected = "top of an empty heap")]
    fn test_top_empty_panics() {
        let heap: MinHeap<i32> = MinHeap::new();
        heap.top();
    }

    #[test]
    #[should_panic(expected = "extract from an empty heap")]
    fn test_extract_empty_panics() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        heap.extract_top();
    }

    #[test]
    fn test_heap_view_adopts_caller_storage() {
        let mut storage = vec![2, 8, 7, 4, 1, 6];
        {
            let mut view: HeapView<'_, i32> = HeapView::new(&mut storage);
            assert_eq!(*view.top(), 1);
            assert_eq!(view.extract_top(), 1);
            view.insert(0);
            assert!(view.delete_item(&8));
        }
        // Mutations went through to the caller's vector
        assert_eq!(storage.len(), 5);
        assert!(invariant_holds::<_, MinOrder>(&storage));
        assert_eq!(*storage.iter().min().unwrap(), 0);
    }

    #[test]
    fn test_heapsort() {
        let mut data = vec![2, 8, 7, 4, 1, 6];
        heapsort(&mut data);
        assert_eq!(data, vec![1, 2, 4, 6, 7, 8]);
    }

    #[test]
    fn test_heapsort_already_sorted() {
        let mut data = vec![1, 2, 3, 4, 5];
        heapsort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_heapsort_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        heapsort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![3];
        heapsort(&mut single);
        assert_eq!(single, vec![3]);

        let mut duplicates = vec![4, 4, 1, 4, 1];
        heapsort(&mut duplicates);
        assert_eq!(duplicates, vec![1, 1, 4, 4, 4]);
    }

    #[test]
    fn test_heap_of_strings() {
        let mut heap: MaxHeap<String> = MaxHeap::new();
        heap.insert("pear".to_string());
        heap.insert("apple".to_string());
        heap.insert("quince".to_string());
        assert_eq!(heap.extract_top(), "quince");
        assert_eq!(heap.extract_top(), "pear");
    }
}
