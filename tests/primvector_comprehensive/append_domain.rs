//! Append Domain Tests
//!
//! Acceptance and rejection of appended values against each type code's
//! kind and domain.

use crate::*;

// =============================================================================
// CONCRETE SCENARIOS
// =============================================================================

#[test]
fn test_u8_accepts_domain_rejects_outside() {
    let mut v = PrimVector::new(TypeCode::U8);
    v.append(0).unwrap();
    v.append(128).unwrap();
    v.append(255).unwrap();

    assert_eq!(v.get(0).unwrap(), Scalar::Int(0));
    assert_eq!(v.get(2).unwrap(), Scalar::Int(255));

    let err = v.append(256).unwrap_err();
    assert_eq!(err.error_code(), "RangeError");
    let err = v.append(-1).unwrap_err();
    assert_eq!(err.error_code(), "RangeError");
    assert_eq!(v.len(), 3);
}

#[test]
fn test_i16_lower_boundary() {
    let mut v = PrimVector::new(TypeCode::I16);
    assert!(v.append(-32769).unwrap_err().is_range());
    assert!(v.is_empty());
    v.append(-32768).unwrap();
    assert_eq!(v.get(-1).unwrap(), Scalar::Int(-32768));
}

#[test]
fn test_float_vector_rejects_integer_kind() {
    let mut v = PrimVector::new(TypeCode::F);
    let err = v.append(0).unwrap_err();
    assert_eq!(err.error_code(), "TypeError");
    assert!(v.is_empty());
}

#[test]
fn test_u32_full_domain() {
    let mut v = PrimVector::new(TypeCode::U32);
    v.append(0u32).unwrap();
    v.append(u32::MAX).unwrap();
    assert!(v.append(i64::from(u32::MAX) + 1).unwrap_err().is_range());
    assert_eq!(v.as_slice::<u32>().unwrap(), &[0, u32::MAX]);
}

#[test]
fn test_error_codes_are_canonical() {
    init_tracing();

    let mut v = PrimVector::new(TypeCode::I8);
    assert_eq!(v.append(1000).unwrap_err().error_code(), "RangeError");
    assert_eq!(v.append(1.5).unwrap_err().error_code(), "TypeError");
    assert_eq!(v.get(0).unwrap_err().error_code(), "IndexError");
    assert_eq!(PrimVector::from_bytes(&[]).unwrap_err().error_code(), "FormatError");
    assert_eq!(v.sort_projection(&[]).unwrap_err().error_code(), "ValueError");
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_integer_append_matches_domain(tc in any_typecode(), value in any::<i64>()) {
        let mut v = PrimVector::new(tc);
        let result = v.append(value);

        match tc.domain() {
            Domain::Int { min, max } if (min..=max).contains(&value) => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(v.len(), 1);
                prop_assert_eq!(v.get(0).unwrap(), Scalar::Int(value));
            }
            Domain::Int { .. } => {
                prop_assert!(result.unwrap_err().is_range());
                prop_assert!(v.is_empty());
            }
            Domain::Unbounded => {
                prop_assert!(result.unwrap_err().is_type());
                prop_assert!(v.is_empty());
            }
        }
    }

    #[test]
    fn prop_float_append_matches_kind(tc in any_typecode(), value in any::<f64>()) {
        let mut v = PrimVector::new(tc);
        let result = v.append(value);

        if tc.is_integer() {
            prop_assert!(result.unwrap_err().is_type());
            prop_assert!(v.is_empty());
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(v.len(), 1);
        }
    }

    #[test]
    fn prop_failed_append_leaves_vector_unchanged(
        v in any_vector(32),
        value in any::<i64>(),
    ) {
        let before = v.serialize();
        let mut after = v.clone();
        if after.append(value).is_err() {
            prop_assert_eq!(after.serialize(), before);
        }
    }
}
