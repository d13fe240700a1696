use proptest::proptest;

use crate::{
    AppendEvent, EMPTY_HASH, Hash, MerkleAccumulator, decode_events, encode_events,
    tests::leaf_from_u32,
};

/// Append `leaves` to a fresh non-persistent accumulator, reducing the
/// emitted events to at most one live entry per level as reconstruction
/// expects.
fn build_with_log(leaves: &[Hash]) -> (MerkleAccumulator<crate::NullStore>, Vec<AppendEvent>) {
    let mut acc = MerkleAccumulator::new_nonpersistent();
    let mut log: Vec<AppendEvent> = Vec::new();
    for leaf in leaves {
        let event = acc.append(*leaf);
        let level = event.level as usize;
        if level == log.len() {
            log.push(event);
        } else {
            log[level] = event;
        }
    }
    (acc, log)
}

#[test]
fn test_empty_log_rebuilds_empty_accumulator() {
    let rebuilt = MerkleAccumulator::from_events(&[]);
    assert_eq!(rebuilt.size(), 0);
    assert_eq!(rebuilt.root(), EMPTY_HASH);
}

#[test]
fn test_single_event_rebuilds_single_leaf() {
    let leaf = leaf_from_u32(7);
    let (acc, log) = build_with_log(&[leaf]);
    let rebuilt = MerkleAccumulator::from_events(&log);
    assert_eq!(rebuilt.size(), 1);
    assert_eq!(rebuilt.root(), acc.root());
}

#[test]
fn test_log_positions_denote_levels() {
    let leaves: Vec<Hash> = (0..6).map(leaf_from_u32).collect();
    let (acc, log) = build_with_log(&leaves);
    // 6 leaves = 0b110: pending subtrees at levels 1 and 2, level 0 clear.
    assert_eq!(log.len() as u64, acc.level_count());
    for (level, event) in log.iter().enumerate() {
        assert_eq!(event.level, level as u64);
    }
}

#[test]
fn test_reconstruction_matches_live_accumulator() {
    for n in 1..=40u32 {
        let leaves: Vec<Hash> = (0..n).map(leaf_from_u32).collect();
        let (acc, log) = build_with_log(&leaves);
        let rebuilt = MerkleAccumulator::from_events(&log);
        assert_eq!(rebuilt.size(), acc.size(), "size {}", n);
        assert_eq!(rebuilt.root(), acc.root(), "size {}", n);
        assert_eq!(rebuilt.level_count(), acc.level_count(), "size {}", n);
    }
}

#[test]
fn test_reconstructed_accumulator_appends_identically() {
    let leaves: Vec<Hash> = (0..13).map(leaf_from_u32).collect();
    let (mut acc, log) = build_with_log(&leaves);
    let mut rebuilt = MerkleAccumulator::from_events(&log);
    for i in 13..29 {
        let live = acc.append(leaf_from_u32(i));
        let replayed = rebuilt.append(leaf_from_u32(i));
        assert_eq!(live, replayed);
    }
    assert_eq!(acc.root(), rebuilt.root());
}

#[test]
fn test_serialized_log_round_trips_into_same_root() {
    let leaves: Vec<Hash> = (0..21).map(leaf_from_u32).collect();
    let (acc, log) = build_with_log(&leaves);
    let bytes = encode_events(&log).expect("encode log");
    let decoded = decode_events(&bytes).expect("decode log");
    let rebuilt = MerkleAccumulator::from_events(&decoded);
    assert_eq!(rebuilt.root(), acc.root());
}

proptest! {
    #[test]
    fn test_event_log_fidelity(count in 1u32..300, extra in 0u32..40) {
        let leaves: Vec<Hash> = (0..count).map(leaf_from_u32).collect();
        let (mut acc, log) = build_with_log(&leaves);
        let mut rebuilt = MerkleAccumulator::from_events(&log);
        assert_same_state(&rebuilt, &acc);
        for i in count..count + extra {
            acc.append(leaf_from_u32(i));
            rebuilt.append(leaf_from_u32(i));
        }
        assert_same_state(&rebuilt, &acc);
    }
}

fn assert_same_state(
    rebuilt: &MerkleAccumulator<crate::NullStore>,
    live: &MerkleAccumulator<crate::NullStore>,
) {
    assert_eq!(rebuilt.size(), live.size());
    assert_eq!(rebuilt.root(), live.root());
}
