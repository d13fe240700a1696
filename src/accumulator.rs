//! The incremental Merkle accumulator.

use std::cell::RefCell;

use crate::{
    AppendEvent, MerkleTree, NullStore, SlotStore,
    hash::{EMPTY_HASH, Hash, combine, hash_from_u64, u64_from_hash},
    store::{LEVEL_COUNT_SLOT, SIZE_SLOT, partial_slot},
};

/// An incremental Merkle accumulator over 32-byte item hashes.
///
/// Maintains one pending subtree hash ("partial") per tree level, the
/// binary-counter representation of the leaf count: appending a leaf is
/// incrementing the counter, and each carry merges two equal-size
/// subtrees one level up. State is O(log n) words.
///
/// `S` is the backing [`SlotStore`]. Every partial write goes through to
/// the store; reads are served from a per-level read-through cache that
/// loads each slot at most once. Use [`NullStore`] (via
/// [`MerkleAccumulator::new_nonpersistent`]) to keep all state in
/// memory.
///
/// An instance is owned by one logical thread of control; concurrent use
/// must be serialized by the caller.
pub struct MerkleAccumulator<S> {
    store: S,
    size: u64,
    // One entry per level; None = not yet loaded from the store.
    partials: RefCell<Vec<Option<Hash>>>,
}

impl MerkleAccumulator<NullStore> {
    /// Create an empty accumulator with no backing store.
    pub fn new_nonpersistent() -> Self {
        MerkleAccumulator {
            store: NullStore,
            size: 0,
            partials: RefCell::new(Vec::new()),
        }
    }

    /// Rebuild a non-persistent accumulator from a per-level event log.
    ///
    /// `events[i]` must describe the current state of level `i`: the log
    /// is the latest event that settled at each level, not a full append
    /// history. Scanning from the highest level down, an event's hash is
    /// taken into its level's slot only when its leaf index is the
    /// newest seen so far; older entries only raise the size bound.
    ///
    /// This is a reconstruction shortcut, not a validator: it trusts its
    /// input, and a malformed log yields a silently inconsistent
    /// accumulator. For a log emitted by [`MerkleAccumulator::append`]
    /// and reduced per level, the result's size, root and subsequent
    /// append behavior are indistinguishable from the original.
    pub fn from_events(events: &[AppendEvent]) -> Self {
        let mut acc = MerkleAccumulator::new_nonpersistent();
        *acc.partials.get_mut() = vec![Some(EMPTY_HASH); events.len()];
        let mut latest_seen: Option<u64> = None;
        for (level, event) in events.iter().enumerate().rev() {
            // The first (highest-level) event is always live; below it,
            // only events newer than everything above them are.
            if latest_seen.is_none_or(|latest| event.leaf_index > latest) {
                latest_seen = Some(event.leaf_index);
                acc.size = event.leaf_index;
                acc.set_partial(level, event.hash);
            }
            if acc.size <= event.leaf_index {
                acc.size = event.leaf_index + 1;
            }
        }
        acc
    }
}

impl<S: SlotStore> MerkleAccumulator<S> {
    /// Prepare a store to host an accumulator.
    ///
    /// A no-op: unwritten slots already read as empty, so the layout
    /// needs no setup. Present for parity with other storage-backed
    /// structures.
    pub fn initialize(_store: &mut S) {}

    /// Open an accumulator over an existing (possibly empty) store.
    ///
    /// Loads `size` and the level count from the metadata slots;
    /// individual partials are loaded lazily on first touch.
    pub fn open(store: S) -> Self {
        let size = u64_from_hash(&store.get_slot(SIZE_SLOT));
        let level_count = u64_from_hash(&store.get_slot(LEVEL_COUNT_SLOT));
        MerkleAccumulator {
            store,
            size,
            partials: RefCell::new(vec![None; level_count as usize]),
        }
    }

    /// Number of leaves appended so far.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of partial levels ever touched (the height of the highest
    /// slot plus one).
    pub fn level_count(&self) -> u64 {
        self.partials.borrow().len() as u64
    }

    /// Return a reference to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // Read a level's partial through the cache, loading it from the
    // store on first touch.
    fn partial(&self, level: usize) -> Hash {
        let mut partials = self.partials.borrow_mut();
        match partials[level] {
            Some(hash) => hash,
            None => {
                let hash = self.store.get_slot(partial_slot(level as u64));
                partials[level] = Some(hash);
                hash
            }
        }
    }

    // Write a level's partial, growing the level array by one when a new
    // level is first touched, mirroring every write to the store.
    fn set_partial(&mut self, level: usize, value: Hash) {
        let partials = self.partials.get_mut();
        if level == partials.len() {
            partials.push(Some(value));
            let level_count = partials.len() as u64;
            self.store
                .set_slot(LEVEL_COUNT_SLOT, hash_from_u64(level_count));
        } else {
            partials[level] = Some(value);
        }
        self.store.set_slot(partial_slot(level as u64), value);
    }

    /// Append a leaf hash and return the event recording where it
    /// settled.
    ///
    /// Carry propagation: walk levels from 0, merging the carry with
    /// each occupied slot (`carry = H(slot, carry)`, slot cleared) until
    /// an empty or brand-new slot absorbs it. The number of merges is
    /// the trailing 1-bit count of the pre-increment size — amortized
    /// O(1), worst case O(log n).
    pub fn append(&mut self, item_hash: Hash) -> AppendEvent {
        self.size += 1;
        self.store.set_slot(SIZE_SLOT, hash_from_u64(self.size));
        let leaf_index = self.size - 1;
        let mut level = 0usize;
        let mut carry = item_hash;
        loop {
            if level == self.partials.get_mut().len() {
                self.set_partial(level, carry);
                return AppendEvent {
                    level: level as u64,
                    leaf_index,
                    hash: carry,
                };
            }
            let slot = self.partial(level);
            if slot == EMPTY_HASH {
                self.set_partial(level, carry);
                return AppendEvent {
                    level: level as u64,
                    leaf_index,
                    hash: carry,
                };
            }
            carry = combine(&slot, &carry);
            self.set_partial(level, EMPTY_HASH);
            level += 1;
        }
    }

    /// Compute the Merkle root of all leaves appended so far.
    ///
    /// The root of the conceptual tree padded to the next power of two,
    /// whose absent leaf ranges are all-zero subtrees: fold the
    /// partials low to high, zero-padding the running hash up to the
    /// current capacity before each combine. The running hash
    /// accumulates the lower (more recent) levels, so each occupied slot
    /// combines as `H(slot, so_far)`.
    ///
    /// An empty accumulator has the all-zero root.
    pub fn root(&self) -> Hash {
        if self.size == 0 {
            return EMPTY_HASH;
        }
        let mut so_far: Option<(Hash, u64)> = None;
        let mut capacity = 1u64;
        let level_count = self.partials.borrow().len();
        for level in 0..level_count {
            let slot = self.partial(level);
            if slot != EMPTY_HASH {
                so_far = Some(match so_far {
                    None => (slot, capacity),
                    Some((mut hash, mut capacity_in_hash)) => {
                        while capacity_in_hash < capacity {
                            hash = combine(&hash, &EMPTY_HASH);
                            capacity_in_hash *= 2;
                        }
                        (combine(&slot, &hash), 2 * capacity)
                    }
                });
            }
            capacity *= 2;
        }
        // Reachable with every slot empty only through a malformed event
        // log; totalize rather than panic.
        so_far.map(|(hash, _)| hash).unwrap_or(EMPTY_HASH)
    }

    /// Materialize the minimal explicit tree consistent with the current
    /// partials, for proof extraction.
    ///
    /// Mirrors [`MerkleAccumulator::root`] over tree nodes: a level-0
    /// slot becomes a leaf, a higher slot a complete-subtree summary,
    /// and the running tree is padded with empty siblings to matching
    /// capacity before each combine. The resulting tree's recomputed
    /// hash equals `root()`.
    pub fn to_merkle_tree(&self) -> MerkleTree {
        let mut tree: Option<MerkleTree> = None;
        let mut capacity = 1u64;
        let level_count = self.partials.borrow().len();
        for level in 0..level_count {
            let slot = self.partial(level);
            if slot != EMPTY_HASH {
                let node = if level == 0 {
                    MerkleTree::leaf(slot)
                } else {
                    MerkleTree::summary(slot, capacity)
                };
                tree = Some(match tree {
                    None => node,
                    Some(mut lower) => {
                        while lower.capacity() < capacity {
                            let empty = MerkleTree::empty(lower.capacity());
                            lower = MerkleTree::internal(lower, empty);
                        }
                        MerkleTree::internal(node, lower)
                    }
                });
            }
            capacity *= 2;
        }
        tree.unwrap_or_else(|| MerkleTree::empty(0))
    }
}
