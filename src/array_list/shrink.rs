//! The policy that decides when a list gives memory back after a deletion.
//!
//! Small buffers are never shrunk, since reallocating costs more CPU than the few
//! wasted bytes are worth. Medium buffers need a lot of waste before they shrink,
//! and then halve. Large buffers shrink at a lower waste ratio but only by 3/8.

/// Buffers below this many slots are left alone.
const SMALL_CAPACITY: usize = 64;
/// Buffers above this many slots use the large tier.
const LARGE_CAPACITY: usize = 2048;
/// Large tier: shrink once capacity is at least this many times the length.
const LARGE_WASTE_RATIO: usize = 2;
/// Medium tier: shrink once capacity is at least this many times the length.
const MEDIUM_WASTE_RATIO: usize = 4;

/// Works out whether a buffer of `capacity` slots holding `length` live elements
/// should be reallocated, and to how many slots.
///
/// Returns `(new_capacity, true)` when shrinking pays off and `(capacity, false)`
/// otherwise.
///
/// * `capacity < 64`: never shrinks.
/// * `capacity > 2048`: shrinks when `capacity / length >= 2`, to
///   `round(capacity * 5 / 8)`.
/// * otherwise: shrinks when `capacity / length >= 4`, to `capacity / 2` (truncated).
///
/// The ratios are exact, so `capacity = 50, length = 20` is a ratio of 2.5 and does
/// not reach 4. A `length` of zero counts as infinite waste.
///
/// ```
/// use array_list::calc_capacity;
///
/// assert_eq!(calc_capacity(3000, 1000), (1875, true));
/// assert_eq!(calc_capacity(100, 20), (50, true));
/// assert_eq!(calc_capacity(50, 20), (50, false));
/// assert_eq!(calc_capacity(10, 0), (10, false));
/// ```
pub const fn calc_capacity(capacity: usize, length: usize) -> (usize, bool) {
    if capacity < SMALL_CAPACITY {
        return (capacity, false);
    }

    if capacity > LARGE_CAPACITY {
        if wasted_at_least(capacity, length, LARGE_WASTE_RATIO) {
            return (five_eighths_rounded(capacity), true);
        }
        return (capacity, false);
    }

    if wasted_at_least(capacity, length, MEDIUM_WASTE_RATIO) {
        return (capacity / 2, true);
    }
    return (capacity, false);
}

/// `capacity / length >= ratio` over the reals.
const fn wasted_at_least(capacity: usize, length: usize, ratio: usize) -> bool {
    // An overflowing product is necessarily bigger than any capacity.
    let Some(needed) = length.checked_mul(ratio) else {
        return false;
    };
    return capacity >= needed;
}

/// `capacity * 0.625` rounded half up, without going through floats or overflowing.
const fn five_eighths_rounded(capacity: usize) -> usize {
    let whole = (capacity / 8) * 5;
    let rest = ((capacity % 8) * 5 + 4) / 8;
    return whole + rest;
}
