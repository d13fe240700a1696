//! Hash type, the empty-slot sentinel, and the internal combine function.
//!
//! All internal combinations are `blake3(left || right)` over the raw
//! 64-byte concatenation of the two child hashes. There are no domain
//! tags: the accumulator's padding and sentinel semantics are defined in
//! terms of the plain concatenation, and any interoperating system must
//! reproduce it exactly.

/// A 32-byte hash value.
pub type Hash = [u8; 32];

/// The all-zero hash.
///
/// Serves double duty: the sentinel marking a partial slot as empty, and
/// the hash of a padding subtree whose (virtual) leaves are all absent.
/// A real combination producing the all-zero value would be
/// indistinguishable from an empty slot; with a preimage-resistant hash
/// this is treated as acceptable rather than carrying an explicit
/// presence flag per slot.
pub const EMPTY_HASH: Hash = [0u8; 32];

/// Combine two child hashes into their parent: `blake3(left || right)`.
pub fn combine(left: &Hash, right: &Hash) -> Hash {
    let mut input = [0u8; 64];
    input[..32].copy_from_slice(left);
    input[32..].copy_from_slice(right);
    *blake3::hash(&input).as_bytes()
}

/// Encode a `u64` into a 32-byte big-endian slot value.
///
/// Used for the `size` and level-count metadata slots of the persistent
/// layout.
pub fn hash_from_u64(value: u64) -> Hash {
    let mut hash = EMPTY_HASH;
    hash[24..].copy_from_slice(&value.to_be_bytes());
    hash
}

/// Decode a `u64` from the low 8 bytes of a 32-byte big-endian slot value.
///
/// The upper 24 bytes are ignored, matching big-integer truncation to 64
/// bits.
pub fn u64_from_hash(hash: &Hash) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[24..]);
    u64::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u64_codec_roundtrip() {
        for value in [0u64, 1, 2, 255, 256, 1 << 32, u64::MAX] {
            assert_eq!(u64_from_hash(&hash_from_u64(value)), value);
        }
    }

    #[test]
    fn test_u64_encoding_is_big_endian() {
        let hash = hash_from_u64(0x0102);
        assert_eq!(&hash[..30], &[0u8; 30]);
        assert_eq!(hash[30], 0x01);
        assert_eq!(hash[31], 0x02);
    }

    #[test]
    fn test_u64_decode_ignores_high_bytes() {
        let mut hash = hash_from_u64(7);
        hash[0] = 0xFF;
        assert_eq!(u64_from_hash(&hash), 7);
    }

    #[test]
    fn test_combine_is_order_sensitive() {
        let a = [0xAAu8; 32];
        let b = [0xBBu8; 32];
        assert_ne!(combine(&a, &b), combine(&b, &a));
        assert_eq!(combine(&a, &b), combine(&a, &b));
    }

    #[test]
    fn test_combine_is_plain_concatenation() {
        let a = [0x11u8; 32];
        let b = [0x22u8; 32];
        let mut input = [0u8; 64];
        input[..32].copy_from_slice(&a);
        input[32..].copy_from_slice(&b);
        assert_eq!(combine(&a, &b), *blake3::hash(&input).as_bytes());
    }
}
