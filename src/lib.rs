//! # Algokit - Classic Algorithms and Data Structures
//!
//! A library of classic algorithms and data structures built around two core
//! engines: an indexable binary heap with arbitrary-element deletion, and a
//! suffix array with O(log n) longest-common-prefix and substring search.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`heap`] - Generic binary heap, borrowed or owned storage, in-place heapsort
//! - [`suffix_array`] - Prefix-doubling suffix array with LCP and substring queries
//! - [`order`] - Comparator-parametrized binary search, bounds, partition, selection
//! - [`sort`] - In-place quicksort and top-down mergesort
//! - [`combinatorics`] - Permutation, combination, and subset generation
//! - [`matching`] - Longest common subsequence and cost-parametrized matching
//! - [`partition`] - Optimal range partitioning (minimize the maximum bucket sum)
//! - [`numeric`] - Modular exponentiation and range reversal helpers
//!
//! ## Quick Start
//!
//! ```
//! use algokit::{MinHeap, SuffixArray};
//!
//! let mut heap = MinHeap::from(vec![2, 8, 7, 4, 1, 6]);
//! assert_eq!(heap.extract_top(), 1);
//! assert_eq!(heap.extract_top(), 2);
//!
//! let sa = SuffixArray::new("abac");
//! assert_eq!(sa.positions(), &[0, 2, 1, 3]);
//! assert_eq!(sa.lcp(0, 2).unwrap(), 1);
//! ```
//!
//! ## Error Handling
//!
//! Queries with documented input preconditions (out-of-range indices, empty
//! search patterns, zero moduli) return [`Result`] values. Structural misuse
//! (reading the top of an empty heap) is a contract violation and panics.

pub mod combinatorics;
pub mod error;
pub mod heap;
pub mod matching;
pub mod numeric;
pub mod order;
pub mod partition;
pub mod sort;
pub mod suffix_array;

pub use error::{Error, Result};
pub use heap::{heapsort, Heap, HeapView, MaxHeap, MinHeap};
pub use suffix_array::SuffixArray;
