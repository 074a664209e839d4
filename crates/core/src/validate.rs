//! Domain validation for incoming values
//!
//! Checks run before any mutation so a rejected value never leaves a
//! partially modified vector behind.

use crate::error::{Error, Result};
use crate::typecode::{Domain, TypeCode};
use crate::value::Scalar;

/// Check that `value` may be stored in a vector of type `typecode`
///
/// - Kind mismatch (integer into `f`, float into an integer code) is a
///   `TypeError`.
/// - An integer outside the code's domain is a `RangeError`.
/// - Any float is accepted by `f`; it is narrowed to single precision on
///   storage.
pub fn check(typecode: TypeCode, value: Scalar) -> Result<()> {
    if value.kind() != typecode.kind() {
        return Err(Error::Type {
            typecode,
            expected: typecode.kind(),
            actual: value.kind(),
        });
    }

    match (value, typecode.domain()) {
        (Scalar::Int(v), Domain::Int { min, max }) if v < min || v > max => Err(Error::Range {
            typecode,
            value: v,
            min,
            max,
        }),
        _ => Ok(()),
    }
}
