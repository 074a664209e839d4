//! Scalar values at the vector boundary
//!
//! A [`Scalar`] is what a host hands to `append` and what `get` and
//! iteration hand back. Its variant is the numeric kind of the value:
//!
//! - `Int` - any whole number representable as `i64`
//! - `Float` - an IEEE-754 double
//!
//! ## Equality Rules
//!
//! - Different kinds are NEVER equal (no coercion): `Int(1) != Float(1.0)`
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use crate::typecode::NumericKind;
use serde::{Deserialize, Serialize};

/// A single numeric value, tagged with its kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Scalar {
    /// Whole number
    Int(i64),
    /// Floating point number
    Float(f64),
}

impl Scalar {
    /// Numeric kind of this value
    pub const fn kind(&self) -> NumericKind {
        match self {
            Scalar::Int(_) => NumericKind::Integer,
            Scalar::Float(_) => NumericKind::Float,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            Scalar::Float(_) => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Float(f) => Some(*f),
            Scalar::Int(_) => None,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{:?}", x),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, u8, i16, u16, i32, u32, i64);

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(f64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

// ============================================================================
// Tests
// ============================================================================
