//! Type codes for primitive vectors
//!
//! Every primitive vector carries exactly one type code. The type code fixes
//! the element width, the numeric kind, and (for integer codes) the inclusive
//! domain of legal values.
//!
//! ## The Seven Type Codes
//!
//! | Code | Kind | Width | Domain | Tag |
//! |------|------|-------|--------|-----|
//! | i8 | Integer | 1 | [-128, 127] | 0 |
//! | u8 | Integer | 1 | [0, 255] | 1 |
//! | i16 | Integer | 2 | [-32768, 32767] | 2 |
//! | u16 | Integer | 2 | [0, 65535] | 3 |
//! | i32 | Integer | 4 | [-2^31, 2^31 - 1] | 4 |
//! | u32 | Integer | 4 | [0, 2^32 - 1] | 5 |
//! | f | Float | 4 | unbounded | 6 |
//!
//! The tag column is the byte written at the head of a serialized vector and
//! must never be renumbered.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Numeric kind of a type code or a scalar value
///
/// Integer and floating values are never coerced into one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    /// Whole numbers
    Integer,
    /// IEEE-754 floating point
    Float,
}

impl NumericKind {
    /// Human-readable name (for error messages)
    pub const fn name(&self) -> &'static str {
        match self {
            NumericKind::Integer => "integer",
            NumericKind::Float => "float",
        }
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Legal value range of a type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Inclusive integer range `[min, max]`
    Int {
        /// Smallest legal value
        min: i64,
        /// Largest legal value
        max: i64,
    },
    /// No range restriction (floating point)
    Unbounded,
}

impl Domain {
    /// Check whether an integer lies within the domain
    ///
    /// Always true for `Unbounded`.
    pub const fn contains(&self, value: i64) -> bool {
        match *self {
            Domain::Int { min, max } => value >= min && value <= max,
            Domain::Unbounded => true,
        }
    }
}

/// The seven element type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCode {
    /// Signed 8-bit integer
    #[serde(rename = "i8")]
    I8,
    /// Unsigned 8-bit integer
    #[serde(rename = "u8")]
    U8,
    /// Signed 16-bit integer
    #[serde(rename = "i16")]
    I16,
    /// Unsigned 16-bit integer
    #[serde(rename = "u16")]
    U16,
    /// Signed 32-bit integer
    #[serde(rename = "i32")]
    I32,
    /// Unsigned 32-bit integer
    #[serde(rename = "u32")]
    U32,
    /// 32-bit IEEE-754 float
    #[serde(rename = "f")]
    F,
}

impl TypeCode {
    /// All type codes, in tag order
    pub const ALL: [TypeCode; 7] = [
        TypeCode::I8,
        TypeCode::U8,
        TypeCode::I16,
        TypeCode::U16,
        TypeCode::I32,
        TypeCode::U32,
        TypeCode::F,
    ];

    /// Get all type codes as a slice
    pub fn all() -> &'static [TypeCode] {
        &Self::ALL
    }

    /// Element width in bytes
    pub const fn width(&self) -> usize {
        match self {
            TypeCode::I8 | TypeCode::U8 => 1,
            TypeCode::I16 | TypeCode::U16 => 2,
            TypeCode::I32 | TypeCode::U32 | TypeCode::F => 4,
        }
    }

    /// Legal value range
    pub const fn domain(&self) -> Domain {
        match self {
            TypeCode::I8 => Domain::Int {
                min: i8::MIN as i64,
                max: i8::MAX as i64,
            },
            TypeCode::U8 => Domain::Int {
                min: 0,
                max: u8::MAX as i64,
            },
            TypeCode::I16 => Domain::Int {
                min: i16::MIN as i64,
                max: i16::MAX as i64,
            },
            TypeCode::U16 => Domain::Int {
                min: 0,
                max: u16::MAX as i64,
            },
            TypeCode::I32 => Domain::Int {
                min: i32::MIN as i64,
                max: i32::MAX as i64,
            },
            TypeCode::U32 => Domain::Int {
                min: 0,
                max: u32::MAX as i64,
            },
            TypeCode::F => Domain::Unbounded,
        }
    }

    /// Numeric kind of the elements
    pub const fn kind(&self) -> NumericKind {
        match self {
            TypeCode::F => NumericKind::Float,
            _ => NumericKind::Integer,
        }
    }

    /// Check if this is an integer type code
    pub const fn is_integer(&self) -> bool {
        matches!(self.kind(), NumericKind::Integer)
    }

    /// Short name, as used by hosts (`"i8"`, ..., `"f"`)
    pub const fn name(&self) -> &'static str {
        match self {
            TypeCode::I8 => "i8",
            TypeCode::U8 => "u8",
            TypeCode::I16 => "i16",
            TypeCode::U16 => "u16",
            TypeCode::I32 => "i32",
            TypeCode::U32 => "u32",
            TypeCode::F => "f",
        }
    }

    /// Parse from short name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "i8" => Some(TypeCode::I8),
            "u8" => Some(TypeCode::U8),
            "i16" => Some(TypeCode::I16),
            "u16" => Some(TypeCode::U16),
            "i32" => Some(TypeCode::I32),
            "u32" => Some(TypeCode::U32),
            "f" => Some(TypeCode::F),
            _ => None,
        }
    }

    /// Serialization tag
    pub const fn tag(&self) -> u8 {
        match self {
            TypeCode::I8 => 0,
            TypeCode::U8 => 1,
            TypeCode::I16 => 2,
            TypeCode::U16 => 3,
            TypeCode::I32 => 4,
            TypeCode::U32 => 5,
            TypeCode::F => 6,
        }
    }

    /// Deserialization from tag
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(TypeCode::I8),
            1 => Some(TypeCode::U8),
            2 => Some(TypeCode::I16),
            3 => Some(TypeCode::U16),
            4 => Some(TypeCode::I32),
            5 => Some(TypeCode::U32),
            6 => Some(TypeCode::F),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown type code name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type code: {0:?}")]
pub struct ParseTypeCodeError(pub String);

impl FromStr for TypeCode {
    type Err = ParseTypeCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeCode::from_name(s).ok_or_else(|| ParseTypeCodeError(s.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
