//! Arithmetic helpers for the binary-counter view of the accumulator.

/// Number of hash combinations the next append will perform, given the
/// current (pre-increment) leaf count.
///
/// Each partial slot is a bit of `size` in binary; an append is a
/// binary-counter increment, so it merges one pending subtree per
/// trailing 1-bit before settling. This is also the level the append
/// event settles at.
pub fn combine_count_for_append(size: u64) -> u32 {
    size.trailing_ones()
}

/// The capacity the conceptual tree is padded to: the smallest power of
/// two that covers `size` leaves. Zero for an empty accumulator.
pub fn padded_capacity(size: u64) -> u64 {
    if size == 0 {
        return 0;
    }
    size.next_power_of_two()
}
