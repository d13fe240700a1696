//! Append events: the compact build history of an accumulator.
//!
//! Every append settles the propagated carry into exactly one partial
//! slot and emits one event recording where. A caller that keeps, per
//! level, the latest event settling there holds enough information to
//! rebuild the accumulator without recomputing a single hash (see
//! [`MerkleAccumulator::from_events`](crate::MerkleAccumulator::from_events)).

use bincode::{Decode, Encode};

use crate::{Error, Result, hash::Hash};

/// A record of a single append: which level the carry settled at, which
/// leaf triggered it, and the hash value written there.
///
/// Events are immutable once emitted; the accumulator does not retain
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct AppendEvent {
    /// The level whose partial slot the append settled into.
    pub level: u64,
    /// The 0-based index of the leaf that triggered the append.
    pub leaf_index: u64,
    /// The hash value written to the slot (the fully propagated carry).
    pub hash: Hash,
}

/// Serialize an event log to bytes using bincode.
pub fn encode_events(events: &[AppendEvent]) -> Result<Vec<u8>> {
    let config = bincode::config::standard().with_big_endian().with_no_limit();
    bincode::encode_to_vec(events, config)
        .map_err(|e| Error::InvalidData(format!("failed to encode event log: {}", e)))
}

/// Deserialize an event log from bytes.
///
/// The bincode size limit is capped at 100 MiB to prevent crafted length
/// headers from causing huge allocations.
pub fn decode_events(bytes: &[u8]) -> Result<Vec<AppendEvent>> {
    let config = bincode::config::standard()
        .with_big_endian()
        .with_limit::<{ 100 * 1024 * 1024 }>();
    let (events, _) = bincode::decode_from_slice(bytes, config)
        .map_err(|e| Error::InvalidData(format!("failed to decode event log: {}", e)))?;
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_roundtrip() {
        let events = vec![
            AppendEvent {
                level: 0,
                leaf_index: 2,
                hash: [3u8; 32],
            },
            AppendEvent {
                level: 2,
                leaf_index: 3,
                hash: [7u8; 32],
            },
        ];
        let bytes = encode_events(&events).expect("encode event log");
        let decoded = decode_events(&bytes).expect("decode event log");
        assert_eq!(decoded, events);
    }

    #[test]
    fn test_empty_log_roundtrip() {
        let bytes = encode_events(&[]).expect("encode empty log");
        assert!(decode_events(&bytes).expect("decode empty log").is_empty());
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_events(&[0xFF, 0xFE, 0xFD]).is_err());
    }
}
