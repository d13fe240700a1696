use std::{cell::RefCell, collections::BTreeMap};

use crate::{
    SlotStore,
    hash::{EMPTY_HASH, Hash},
};

/// In-memory slot store backed by a `BTreeMap`.
///
/// Useful for tests and ephemeral computations. The [`SlotStore`]
/// implementation is on `&MemStore` so the store outlives the
/// accumulator borrowing it and can be reopened afterwards.
#[derive(Debug, Clone)]
pub struct MemStore(RefCell<BTreeMap<u64, Hash>>);

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemStore(RefCell::new(Default::default()))
    }

    /// Number of slots that have been written.
    pub fn slot_count(&self) -> usize {
        self.0.borrow().len()
    }
}

impl SlotStore for &MemStore {
    fn get_slot(&self, index: u64) -> Hash {
        self.0.borrow().get(&index).copied().unwrap_or(EMPTY_HASH)
    }

    fn set_slot(&mut self, index: u64, value: Hash) {
        self.0.borrow_mut().insert(index, value);
    }
}
