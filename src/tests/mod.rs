mod test_events;

use crate::{EMPTY_HASH, Hash, combine, padded_capacity};

/// Derive a nonzero leaf hash from an integer (for test convenience).
pub(crate) fn leaf_from_u32(i: u32) -> Hash {
    *blake3::hash(&i.to_le_bytes()).as_bytes()
}

/// Brute-force reference root: a balanced tree over the padded capacity
/// where a subtree with no real leaves hashes to the all-zero value
/// without any combining.
pub(crate) fn reference_root(leaves: &[Hash]) -> Hash {
    if leaves.is_empty() {
        return EMPTY_HASH;
    }
    let capacity = padded_capacity(leaves.len() as u64) as usize;
    reference_node(leaves, 0, capacity)
}

fn reference_node(leaves: &[Hash], start: usize, capacity: usize) -> Hash {
    if start >= leaves.len() {
        return EMPTY_HASH;
    }
    if capacity == 1 {
        return leaves[start];
    }
    let left = reference_node(leaves, start, capacity / 2);
    let right = reference_node(leaves, start + capacity / 2, capacity / 2);
    combine(&left, &right)
}
