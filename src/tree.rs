//! Materialized Merkle trees.
//!
//! A [`MerkleTree`] is a read-only projection of an accumulator's
//! partials, built fresh on each call and never mutated in place. The
//! set of shapes is closed; pattern matching over the four variants
//! carries the padding logic directly.

use crate::{
    Error, MerkleProof, Result,
    hash::{EMPTY_HASH, Hash, combine},
};

/// An explicit Merkle (sub)tree derived from accumulator state.
///
/// Capacities are always powers of two (zero only for the designated
/// empty tree). Internal nodes cache their hash at construction so
/// recomputation is never needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleTree {
    /// A padding subtree all of whose (virtual) leaves are absent.
    /// Hashes to the all-zero value regardless of capacity.
    Empty {
        /// The number of virtual leaves this padding spans.
        capacity: u64,
    },
    /// A single level-0 leaf hash.
    Leaf {
        /// The leaf's hash.
        hash: Hash,
    },
    /// A fully built subtree whose internal structure was not retained;
    /// reconstructed from a partial at level > 0.
    Summary {
        /// The subtree's root hash.
        hash: Hash,
        /// The number of leaves the subtree covers.
        capacity: u64,
    },
    /// A branch combining two children of equal capacity.
    Internal {
        /// `H(left.hash(), right.hash())`, cached at construction.
        hash: Hash,
        /// Combined capacity of both children.
        capacity: u64,
        /// The child covering the lower leaf indices.
        left: Box<MerkleTree>,
        /// The child covering the upper leaf indices.
        right: Box<MerkleTree>,
    },
}

impl MerkleTree {
    /// A padding subtree of the given capacity.
    pub fn empty(capacity: u64) -> Self {
        MerkleTree::Empty { capacity }
    }

    /// A single leaf.
    pub fn leaf(hash: Hash) -> Self {
        MerkleTree::Leaf { hash }
    }

    /// A complete-subtree summary of the given capacity.
    pub fn summary(hash: Hash, capacity: u64) -> Self {
        MerkleTree::Summary { hash, capacity }
    }

    /// Combine two subtrees into a branch, hashing eagerly.
    pub fn internal(left: MerkleTree, right: MerkleTree) -> Self {
        MerkleTree::Internal {
            hash: combine(&left.hash(), &right.hash()),
            capacity: left.capacity() + right.capacity(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The subtree's root hash. Padding subtrees hash to the all-zero
    /// value.
    pub fn hash(&self) -> Hash {
        match self {
            MerkleTree::Empty { .. } => EMPTY_HASH,
            MerkleTree::Leaf { hash } => *hash,
            MerkleTree::Summary { hash, .. } => *hash,
            MerkleTree::Internal { hash, .. } => *hash,
        }
    }

    /// The number of leaves this subtree logically spans.
    pub fn capacity(&self) -> u64 {
        match self {
            MerkleTree::Empty { capacity } => *capacity,
            MerkleTree::Leaf { .. } => 1,
            MerkleTree::Summary { capacity, .. } => *capacity,
            MerkleTree::Internal { capacity, .. } => *capacity,
        }
    }

    /// Whether this is the designated empty tree (capacity 0).
    pub fn is_empty(&self) -> bool {
        matches!(self, MerkleTree::Empty { capacity: 0 })
    }

    /// Extract the sibling-hash path for a retained leaf.
    ///
    /// Descends branches by capacity halving, collecting the off-path
    /// sibling hash at each step. Fails with
    /// [`Error::LeafOutOfRange`] for indices beyond capacity or landing
    /// in zero padding, and [`Error::LeafNotRetained`] when the path
    /// runs into a summary whose internal structure is gone.
    pub fn prove(&self, leaf_index: u64) -> Result<MerkleProof> {
        let capacity = self.capacity();
        if leaf_index >= capacity {
            return Err(Error::LeafOutOfRange {
                leaf_index,
                capacity,
            });
        }
        let mut siblings = Vec::new();
        let mut node = self;
        let mut index = leaf_index;
        loop {
            match node {
                MerkleTree::Leaf { .. } => break,
                MerkleTree::Empty { .. } => {
                    return Err(Error::LeafOutOfRange {
                        leaf_index,
                        capacity,
                    });
                }
                MerkleTree::Summary { .. } => return Err(Error::LeafNotRetained { leaf_index }),
                MerkleTree::Internal { left, right, .. } => {
                    let half = left.capacity();
                    if index < half {
                        siblings.push(right.hash());
                        node = left.as_ref();
                    } else {
                        siblings.push(left.hash());
                        node = right.as_ref();
                        index -= half;
                    }
                }
            }
        }
        // Collected root-down; proofs carry siblings leaf-up.
        siblings.reverse();
        Ok(MerkleProof::new(leaf_index, capacity, siblings))
    }
}
