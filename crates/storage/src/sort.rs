//! In-place ascending sort
//!
//! The sort is NOT stable. Equal elements may end up in any relative order,
//! so callers must compare equal-key runs as equivalence classes rather than
//! positionally.
//!
//! | Type codes | Strategy | Cost |
//! |------------|----------|------|
//! | i8, u8 | counting sort | O(n) |
//! | i16, u16, i32, u32 | pattern-defeating quicksort | O(n log n) |
//! | f | pattern-defeating quicksort on IEEE total order | O(n log n) |
//!
//! ## NaN
//!
//! Floats are ordered by `f32::total_cmp`: negative NaNs sort before `-inf`,
//! positive NaNs after `+inf`, and `-0.0` sorts before `+0.0`.

use crate::buffer::dispatch;
use crate::element::Element;
use crate::vector::PrimVector;
use tracing::trace;

/// Sort a vector ascending in place
pub fn sort(vector: &mut PrimVector) {
    trace!("sorting {} elements of {}", vector.len(), vector.typecode());
    dispatch!(vector.buffer_mut(), v => Element::sort_slice(v.as_mut_slice()))
}

/// Check whether a vector is in ascending order
pub fn is_sorted(vector: &PrimVector) -> bool {
    dispatch!(vector.buffer(), v => v
        .windows(2)
        .all(|w| w[0].total_cmp(&w[1]) != std::cmp::Ordering::Greater))
}

pub(crate) fn counting_sort_u8(v: &mut [u8]) {
    let mut counts = [0usize; 256];
    for &x in v.iter() {
        counts[x as usize] += 1;
    }

    let mut pos = 0;
    for (value, &count) in counts.iter().enumerate() {
        v[pos..pos + count].fill(value as u8);
        pos += count;
    }
}

pub(crate) fn counting_sort_i8(v: &mut [i8]) {
    let mut counts = [0usize; 256];
    for &x in v.iter() {
        counts[(i16::from(x) + 128) as usize] += 1;
    }

    let mut pos = 0;
    for (slot, &count) in counts.iter().enumerate() {
        v[pos..pos + count].fill((slot as i16 - 128) as i8);
        pos += count;
    }
}
