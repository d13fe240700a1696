use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from accumulator proof extraction and serialization.
///
/// Appends and root computation cannot fail on valid state; only the
/// proof path over a materialized tree and the bincode codecs have an
/// error surface.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested leaf index is beyond the tree's padded capacity, or
    /// falls inside zero padding where no leaf was ever appended.
    #[error("leaf index {leaf_index} out of range (capacity {capacity})")]
    LeafOutOfRange {
        /// The 0-based index that was requested.
        leaf_index: u64,
        /// The padded capacity of the tree the proof was requested from.
        capacity: u64,
    },
    /// The leaf lies inside a complete-subtree summary whose internal
    /// structure was not retained, so no sibling path exists for it.
    #[error("leaf {leaf_index} is inside a summarized subtree and cannot be proved")]
    LeafNotRetained {
        /// The 0-based index that was requested.
        leaf_index: u64,
    },
    /// Invalid serialized data (event logs, proofs).
    #[error("invalid data: {0}")]
    InvalidData(String),
}
