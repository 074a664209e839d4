//! Sequence-style index normalization
//!
//! Two distinct rules live here:
//! - slice bounds CLAMP: out-of-range bounds are pulled back into `[0, len]`
//!   and never fail;
//! - single-element indices are CHECKED: anything outside `[-len, len)`
//!   is rejected.

use std::ops::Range;

/// Resolve optional, possibly negative slice bounds against `len`
///
/// - absent start is 0; absent end is `len`
/// - a negative bound `v` becomes `max(len + v, 0)`
/// - a non-negative bound `v` becomes `min(v, len)`
///
/// When the resolved start is not below the resolved end the range is
/// empty (`lo..lo`).
pub fn resolve(start: Option<isize>, end: Option<isize>, len: usize) -> Range<usize> {
    let lo = start.map_or(0, |v| clamp_bound(v, len));
    let hi = end.map_or(len, |v| clamp_bound(v, len));

    if lo >= hi {
        lo..lo
    } else {
        lo..hi
    }
}

fn clamp_bound(v: isize, len: usize) -> usize {
    if v < 0 {
        len.saturating_sub(v.unsigned_abs())
    } else {
        (v as usize).min(len)
    }
}

/// Normalize a single-element index, counting negative indices from the end
///
/// Returns `None` when the index falls outside `[-len, len)`.
pub fn normalize_index(index: isize, len: usize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        let i = index as usize;
        (i < len).then_some(i)
    }
}
