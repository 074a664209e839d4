//! Error types for primitive vector operations
//!
//! Every failure is a contract violation by the caller: a value outside a
//! type code's domain, a value of the wrong kind, an out-of-range index, a
//! malformed buffer, or bad projection arguments. None of them are transient.
//!
//! ## Error Codes (Canonical)
//!
//! | Code | Trigger |
//! |------|---------|
//! | RangeError | integral append outside the type code's domain |
//! | TypeError | value kind does not match the vector's kind |
//! | IndexError | element access outside `[-len, len)` |
//! | FormatError | truncated, size-inconsistent or unknown-tag buffer |
//! | ValueError | projection sort given mismatched or invalid arguments |

use crate::typecode::{NumericKind, TypeCode};
use thiserror::Error;

/// Reasons a serialized buffer is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Buffer ends before the fixed-size header does
    #[error("buffer truncated: need {needed} header bytes, have {available}")]
    Truncated {
        /// Bytes required for the header
        needed: usize,
        /// Bytes present
        available: usize,
    },

    /// Header tag names no known type code
    #[error("unknown type code tag: {0}")]
    UnknownTypecode(u8),

    /// Element count does not account for the payload exactly
    #[error(
        "payload size mismatch: {count} elements of width {width} do not fit {available} bytes"
    )]
    LengthMismatch {
        /// Element count from the header
        count: u64,
        /// Element width of the declared type code
        width: usize,
        /// Payload bytes following the header
        available: usize,
    },

    /// Element count exceeds the configured decode limit
    #[error("element count {count} exceeds limit {limit}")]
    TooLarge {
        /// Element count from the header
        count: u64,
        /// Configured maximum
        limit: u64,
    },
}

/// All primitive vector errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Integral value outside the type code's domain
    #[error("value {value} out of range for {typecode} [{min}, {max}]")]
    Range {
        /// Vector type code
        typecode: TypeCode,
        /// Rejected value
        value: i64,
        /// Domain minimum
        min: i64,
        /// Domain maximum
        max: i64,
    },

    /// Value kind does not match the vector's kind
    #[error("wrong type for {typecode}: expected {expected}, got {actual}")]
    Type {
        /// Vector type code
        typecode: TypeCode,
        /// Kind the vector stores
        expected: NumericKind,
        /// Kind that was supplied
        actual: NumericKind,
    },

    /// Index outside `[-len, len)`
    #[error("index {index} out of range for length {len}")]
    Index {
        /// Requested index
        index: isize,
        /// Vector length
        len: usize,
    },

    /// Malformed serialized buffer
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Invalid argument to a projection sort
    #[error("invalid value: {0}")]
    Value(String),
}

/// Result type for primitive vector operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Range { .. } => "RangeError",
            Error::Type { .. } => "TypeError",
            Error::Index { .. } => "IndexError",
            Error::Format(_) => "FormatError",
            Error::Value(_) => "ValueError",
        }
    }

    /// Check if this error is retryable
    ///
    /// Always false: every error here requires the caller to change its input.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Check if this is a range error
    pub fn is_range(&self) -> bool {
        matches!(self, Error::Range { .. })
    }

    /// Check if this is a type error
    pub fn is_type(&self) -> bool {
        matches!(self, Error::Type { .. })
    }

    /// Check if this is an index error
    pub fn is_index(&self) -> bool {
        matches!(self, Error::Index { .. })
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// Check if this is a value error
    pub fn is_value(&self) -> bool {
        matches!(self, Error::Value(_))
    }
}
