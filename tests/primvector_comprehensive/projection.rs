//! Projection Sort Tests
//!
//! A projection is an index vector into parallel attribute vectors. Ties
//! may come out in either order, so results are checked through the
//! attribute tuples they visit.

use crate::*;

/// Attribute tuple visited at each projected position
fn visited_tuples(projection: &PrimVector, attributes: &[&PrimVector]) -> Vec<Vec<i64>> {
    projection
        .iter()
        .map(|idx| {
            let idx = idx.as_int().expect("integer projection") as isize;
            attributes
                .iter()
                .map(|attr| attr.get(idx).unwrap().as_int().expect("integer attribute"))
                .collect()
        })
        .collect()
}

fn is_permutation_of_range(projection: &PrimVector) -> bool {
    let mut seen: Vec<i64> = projection.iter().filter_map(|x| x.as_int()).collect();
    seen.sort_unstable();
    seen.into_iter().eq(0..projection.len() as i64)
}

// =============================================================================
// CONCRETE SCENARIOS
// =============================================================================

#[test]
fn test_single_attribute_with_tie() {
    let mut projection = PrimVector::from_slice(&[0u32, 1, 2]);
    let attr = PrimVector::from_slice(&[2i32, 1, 1]);

    projection.sort_projection(&[&attr]).unwrap();

    let result = projection.as_slice::<u32>().unwrap();
    assert!(result == [1, 2, 0] || result == [2, 1, 0], "{:?}", result);
    assert_eq!(attr.as_slice::<i32>().unwrap(), &[2, 1, 1]);
}

#[test]
fn test_two_attributes_break_ties() {
    let mut projection = PrimVector::from_slice(&[0i16, 1, 2, 3]);
    let first = PrimVector::from_slice(&[1u8, 0, 1, 0]);
    let second = PrimVector::from_slice(&[5u8, 9, 4, 2]);

    projection.sort_projection(&[&first, &second]).unwrap();
    assert_eq!(projection.as_slice::<i16>().unwrap(), &[3, 1, 2, 0]);
}

#[test]
fn test_float_attribute() {
    let mut projection = PrimVector::from_slice(&[0u8, 1, 2]);
    let attr = PrimVector::from_slice(&[0.5f32, -1.0, f32::NAN]);

    projection.sort_projection(&[&attr]).unwrap();
    assert_eq!(projection.as_slice::<u8>().unwrap(), &[1, 0, 2]);
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_rejections_leave_projection_unchanged() {
    init_tracing();

    let attr = PrimVector::from_slice(&[1i32, 2, 3]);
    let short = PrimVector::from_slice(&[1i32, 2]);

    let mut projection = PrimVector::from_slice(&[2i32, 0, 1]);
    assert!(projection.sort_projection(&[]).unwrap_err().is_value());
    assert!(projection.sort_projection(&[&short]).unwrap_err().is_value());
    assert_eq!(projection.as_slice::<i32>().unwrap(), &[2, 0, 1]);

    let mut out_of_range = PrimVector::from_slice(&[2i32, 3, 0]);
    assert!(out_of_range.sort_projection(&[&attr]).unwrap_err().is_value());
    assert_eq!(out_of_range.as_slice::<i32>().unwrap(), &[2, 3, 0]);

    let mut negative = PrimVector::from_slice(&[2i32, -1, 0]);
    assert!(negative.sort_projection(&[&attr]).unwrap_err().is_value());
    assert_eq!(negative.as_slice::<i32>().unwrap(), &[2, -1, 0]);

    let mut float = PrimVector::from_slice(&[0.0f32, 1.0, 2.0]);
    assert!(float.sort_projection(&[&attr]).unwrap_err().is_type());
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn test_random_projection_orders_tuples() {
    let mut rng = rng(7);
    let n = 2000;

    let a = random_vector(&mut rng, TypeCode::U8, n);
    let b = random_vector(&mut rng, TypeCode::I16, n);
    let mut projection =
        PrimVector::try_from_iter(TypeCode::U32, (0..n).rev().map(|i| i as i64)).unwrap();

    projection.sort_projection(&[&a, &b]).unwrap();

    assert!(is_permutation_of_range(&projection));
    let tuples = visited_tuples(&projection, &[&a, &b]);
    assert!(tuples.windows(2).all(|w| w[0] <= w[1]));
}

proptest! {
    #[test]
    fn prop_projection_tuples_non_decreasing(
        rows in prop::collection::vec((0i64..4, -3i64..3), 0..64),
    ) {
        let first =
            PrimVector::try_from_iter(TypeCode::I8, rows.iter().map(|r| r.0)).unwrap();
        let second =
            PrimVector::try_from_iter(TypeCode::I32, rows.iter().map(|r| r.1)).unwrap();
        let mut projection =
            PrimVector::try_from_iter(TypeCode::U16, 0..rows.len() as i64).unwrap();

        projection.sort_projection(&[&first, &second]).unwrap();

        prop_assert!(is_permutation_of_range(&projection));
        let tuples = visited_tuples(&projection, &[&first, &second]);
        for w in tuples.windows(2) {
            prop_assert!(w[0] <= w[1]);
        }
    }
}
