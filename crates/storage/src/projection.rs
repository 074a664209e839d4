//! Multi-key indirect sorting
//!
//! A projection is an integer vector of indices into one or more parallel
//! attribute vectors. Sorting the projection reorders only the indices: the
//! attribute vectors are never touched. After a successful sort, scanning
//! the projection left to right visits attribute tuples
//! `(attr_1[idx], ..., attr_k[idx])` in non-decreasing lexicographic order.
//!
//! Like [`crate::sort`], the projection sort is unstable: indices whose
//! tuples compare equal may appear in either order.

use crate::buffer::{dispatch, Buffer};
use crate::element::Element;
use crate::vector::PrimVector;
use primvec_core::{Error, NumericKind, Result, Scalar, TypeCode};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Sort `projection` so its indices visit `attributes` in lexicographic order
///
/// # Errors
///
/// - `ValueError` if `attributes` is empty
/// - `TypeError` if `projection` has the float type code
/// - `ValueError` if any attribute length differs from the projection length
/// - `ValueError` if an index is outside `[0, len)`
///
/// On error the projection is left unchanged.
pub fn sort_projection(projection: &mut PrimVector, attributes: &[&PrimVector]) -> Result<()> {
    let n = projection.len();

    if attributes.is_empty() {
        debug!("projection sort rejected: no attribute vectors");
        return Err(Error::Value(
            "projection sort needs at least one attribute vector".to_string(),
        ));
    }

    if projection.typecode() == TypeCode::F {
        debug!("projection sort rejected: float projection");
        return Err(Error::Type {
            typecode: TypeCode::F,
            expected: NumericKind::Integer,
            actual: NumericKind::Float,
        });
    }

    if let Some((pos, attr)) = attributes
        .iter()
        .enumerate()
        .find(|(_, attr)| attr.len() != n)
    {
        debug!(
            "projection sort rejected: attribute {} has length {}, projection has {}",
            pos,
            attr.len(),
            n
        );
        return Err(Error::Value(format!(
            "attribute vector {} has length {}, expected {}",
            pos,
            attr.len(),
            n
        )));
    }

    let keys = projection_keys(projection)?;

    trace!(
        "projection sort: {} indices over {} attribute vectors",
        n,
        attributes.len()
    );

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| compare_tuples(attributes, keys[a], keys[b]));

    projection.buffer_mut().permute(&order);
    Ok(())
}

/// Read the projection's indices, checking each lies in `[0, len)`
fn projection_keys(projection: &PrimVector) -> Result<Vec<usize>> {
    let n = projection.len();
    let mut keys = Vec::with_capacity(n);

    for (pos, value) in projection.iter().enumerate() {
        let key = match value {
            Scalar::Int(i) if i >= 0 && (i as u64) < n as u64 => i as usize,
            other => {
                debug!(
                    "projection sort rejected: index {} at position {}",
                    other, pos
                );
                return Err(Error::Value(format!(
                    "projection index {} at position {} is outside [0, {})",
                    other, pos, n
                )));
            }
        };
        keys.push(key);
    }

    Ok(keys)
}

fn compare_tuples(attributes: &[&PrimVector], a: usize, b: usize) -> Ordering {
    for attr in attributes {
        let ord = compare_at(attr.buffer(), a, b);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn compare_at(buffer: &Buffer, a: usize, b: usize) -> Ordering {
    dispatch!(buffer, v => v[a].total_cmp(&v[b]))
}
