//! Sort Tests
//!
//! Sorting is unstable, so duplicate keys are compared as equivalence
//! classes (counts per value) rather than by position.

use crate::*;
use std::collections::BTreeMap;

fn value_counts(v: &PrimVector) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for x in v.iter() {
        *counts.entry(x.as_int().expect("integer vector")).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_i32_with_duplicates() {
    let mut v = PrimVector::from_slice(&[5i32, 3, 3, 1]);
    v.sort();
    assert_eq!(v.as_slice::<i32>().unwrap(), &[1, 3, 3, 5]);
}

#[test]
fn test_random_integer_vectors_sort() {
    let mut rng = rng(42);
    for tc in TypeCode::all().iter().filter(|tc| tc.is_integer()) {
        let mut v = random_vector(&mut rng, *tc, 5000);
        let before = value_counts(&v);
        v.sort();

        assert!(v.is_sorted(), "{} not sorted", tc);
        assert_eq!(value_counts(&v), before, "{} lost elements", tc);
    }
}

#[test]
fn test_float_sort_total_order() {
    let mut v = PrimVector::from_slice(&[
        f32::NAN,
        1.0,
        0.0,
        -f32::NAN,
        -0.0,
        f32::NEG_INFINITY,
        f32::INFINITY,
    ]);
    v.sort();

    let sorted = v.as_slice::<f32>().unwrap();
    assert!(sorted[0].is_nan() && sorted[0].is_sign_negative());
    assert_eq!(sorted[1], f32::NEG_INFINITY);
    assert_eq!(sorted[2].to_bits(), (-0.0f32).to_bits());
    assert_eq!(sorted[3].to_bits(), 0.0f32.to_bits());
    assert_eq!(sorted[4], 1.0);
    assert_eq!(sorted[5], f32::INFINITY);
    assert!(sorted[6].is_nan() && sorted[6].is_sign_positive());
}

#[test]
fn test_sort_empty_and_single() {
    let mut empty = PrimVector::new(TypeCode::U8);
    empty.sort();
    assert!(empty.is_empty());

    let mut one = PrimVector::from_slice(&[9i8]);
    one.sort();
    assert_eq!(one.as_slice::<i8>().unwrap(), &[9]);
}

proptest! {
    #[test]
    fn prop_sort_orders_and_is_idempotent(v in any_vector(256)) {
        let mut once = v.clone();
        once.sort();
        prop_assert!(once.is_sorted());
        prop_assert_eq!(once.len(), v.len());

        let mut twice = once.clone();
        twice.sort();
        prop_assert_eq!(twice.serialize(), once.serialize());
    }
}
