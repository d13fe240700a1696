//! Inclusion proofs extracted from materialized trees.
//!
//! A proof is the sibling-hash path from a leaf to the root, ordered
//! leaf-up. Verification is a collaborator concern; this crate only
//! exposes the prover-side fold that recomputes the candidate root.

use bincode::{Decode, Encode};

use crate::{
    Error, Result,
    hash::{Hash, combine},
};

/// The sibling-hash path proving one leaf of a materialized tree.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    leaf_index: u64,
    capacity: u64,
    siblings: Vec<Hash>,
}

impl MerkleProof {
    pub(crate) fn new(leaf_index: u64, capacity: u64, siblings: Vec<Hash>) -> Self {
        MerkleProof {
            leaf_index,
            capacity,
            siblings,
        }
    }

    /// The 0-based index of the proved leaf.
    pub fn leaf_index(&self) -> u64 {
        self.leaf_index
    }

    /// The padded capacity of the tree the proof was taken from.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// The sibling hashes, ordered from the leaf's level upward.
    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    /// Fold the path over a claimed leaf hash, yielding the root this
    /// proof commits to.
    ///
    /// At each level the leaf index's bit decides the combine order: an
    /// even index sits in the left child, so the sibling hashes on the
    /// right.
    pub fn compute_root(&self, leaf: Hash) -> Hash {
        let mut hash = leaf;
        let mut index = self.leaf_index;
        for sibling in &self.siblings {
            hash = if index & 1 == 0 {
                combine(&hash, sibling)
            } else {
                combine(sibling, &hash)
            };
            index >>= 1;
        }
        hash
    }

    /// Serialize this proof to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard().with_big_endian().with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| Error::InvalidData(format!("failed to encode MerkleProof: {}", e)))
    }

    /// Deserialize a proof from bytes.
    ///
    /// The bincode size limit is capped at 100 MiB to prevent crafted
    /// length headers from causing huge allocations.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 100 * 1024 * 1024 }>();
        let (proof, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| Error::InvalidData(format!("failed to decode MerkleProof: {}", e)))?;
        Ok(proof)
    }
}
