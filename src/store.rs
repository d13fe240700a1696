//! Slot store abstraction and the persistent layout convention.
//!
//! The accumulator's durable state is a handful of 32-byte slots keyed
//! by small integer indices:
//!
//! - slot 0: `size` as a 32-byte big-endian integer,
//! - slot 1: the partial-level count, likewise,
//! - slot `2 + level`: the pending subtree hash for that level.
//!
//! Stores are synchronous and infallible from the accumulator's point of
//! view; durability and integrity are the store's concern.

use crate::hash::{EMPTY_HASH, Hash};

/// Slot index holding the leaf count.
pub const SIZE_SLOT: u64 = 0;
/// Slot index holding the partial-level count.
pub const LEVEL_COUNT_SLOT: u64 = 1;

/// Slot index holding the partial hash for `level`.
pub fn partial_slot(level: u64) -> u64 {
    2 + level
}

/// An addressable store of 32-byte values keyed by slot index.
///
/// Unwritten slots read as [`EMPTY_HASH`], so a fresh store needs no
/// initialization to host an accumulator.
pub trait SlotStore {
    /// Read the value at `index`, or [`EMPTY_HASH`] if never written.
    fn get_slot(&self, index: u64) -> Hash;
    /// Write `value` at `index`, overwriting any previous value.
    fn set_slot(&mut self, index: u64, value: Hash);
}

/// A store that discards writes and reads every slot as empty.
///
/// Backs non-persistent accumulators: all live state stays in the
/// in-memory partials and nothing is written through.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl SlotStore for NullStore {
    fn get_slot(&self, _index: u64) -> Hash {
        EMPTY_HASH
    }

    fn set_slot(&mut self, _index: u64, _value: Hash) {}
}
