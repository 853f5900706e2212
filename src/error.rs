//! Error types for query operations on otherwise-valid structures.
//!
//! Contract violations (e.g. reading the top of an empty heap) are not
//! represented here; those are caller logic errors and panic. This module
//! covers the reportable tier: documented preconditions on inputs that a
//! caller is expected to check or handle.

use thiserror::Error;

/// Error variants for reportable invalid input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index was provided that is outside the structure's bounds.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length it was checked against.
        len: usize,
    },

    /// An order-statistic rank was requested that the range does not contain.
    #[error("rank {rank} out of range for {len} elements")]
    RankOutOfRange {
        /// The requested 1-based rank.
        rank: usize,
        /// Number of elements in the range.
        len: usize,
    },

    /// A substring search was attempted with an empty pattern.
    #[error("search pattern is empty")]
    EmptyPattern,

    /// Modular arithmetic was attempted with a zero modulus.
    #[error("modulus must be non-zero")]
    ZeroModulus,
}

/// A specialized `Result` type for fallible algokit operations.
pub type Result<T> = std::result::Result<T, Error>;
