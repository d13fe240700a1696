//! Incremental Merkle accumulator — a tamper-evident, append-only
//! commitment to an ever-growing list of 32-byte item hashes.
//!
//! The accumulator keeps one pending subtree hash per tree level (a
//! "partial"), the binary-counter representation of the leaf count, so
//! its whole state is O(log n) words. Appending is carry propagation;
//! the root, the materialized tree and reconstruction from an event log
//! are pure read-side projections of the partials.
//!
//! # Core types
//!
//! - [`MerkleAccumulator`] — append, root, tree materialization, opened
//!   over any [`SlotStore`] or kept purely in memory.
//! - [`AppendEvent`] — the per-append record enabling replay-free
//!   reconstruction via [`MerkleAccumulator::from_events`].
//! - [`MerkleTree`] — the materialized tree (leaf / summary / internal /
//!   empty), source of [`MerkleProof`] sibling paths.
//!
//! # Store traits
//!
//! - [`SlotStore`] — 32-byte values keyed by small slot indices; slots
//!   0 and 1 hold size and level count big-endian, slot `2 + level` the
//!   partial for that level.
//! - [`NullStore`] — write-discarding store for non-persistent use.
//! - [`MemStore`] — in-memory store (requires `mem_store` feature).
//!
//! # Example
//!
//! ```
//! use merkle_accumulator::MerkleAccumulator;
//!
//! let mut acc = MerkleAccumulator::new_nonpersistent();
//! let events = vec![acc.append([1u8; 32]), acc.append([2u8; 32])];
//! assert_eq!(acc.size(), 2);
//!
//! // One live event per level rebuilds the same accumulator.
//! let rebuilt = MerkleAccumulator::from_events(&events);
//! assert_eq!(rebuilt.root(), acc.root());
//! ```

#![warn(missing_docs)]

mod accumulator;
mod error;
mod event;
/// Arithmetic helpers for the binary-counter view of the accumulator.
pub(crate) mod helper;
mod hash;
/// In-memory slot store (requires `mem_store` feature).
#[cfg(any(test, feature = "mem_store"))]
pub mod mem_store;
mod proof;
mod store;
#[cfg(test)]
mod tests;
mod tree;

pub use accumulator::MerkleAccumulator;
pub use error::{Error, Result};
pub use event::{AppendEvent, decode_events, encode_events};
pub use hash::{EMPTY_HASH, Hash, combine, hash_from_u64, u64_from_hash};
pub use helper::{combine_count_for_append, padded_capacity};
#[cfg(any(test, feature = "mem_store"))]
pub use mem_store::MemStore;
pub use proof::MerkleProof;
pub use store::{LEVEL_COUNT_SLOT, NullStore, SIZE_SLOT, SlotStore, partial_slot};
pub use tree::MerkleTree;
