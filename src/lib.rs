//! # PrimVec
//!
//! Compact, type-tagged vectors of primitive numbers.
//!
//! A [`PrimVector`] stores homogeneous integers or single-precision floats in
//! one contiguous buffer, far denser than a vector of boxed values. Every
//! append is checked against the element type's domain, so the buffer never
//! holds a value its type code cannot represent.
//!
//! ## Quick Start
//!
//! ```
//! use primvec::prelude::*;
//!
//! let mut v = PrimVector::new(TypeCode::U8);
//! v.append(200)?;
//! assert!(v.append(256).unwrap_err().is_range());
//!
//! let bytes = v.serialize();
//! assert_eq!(PrimVector::from_bytes(&bytes)?, v);
//! # Ok::<(), primvec::Error>(())
//! ```
//!
//! ## Type Codes
//!
//! | Code | Native | Domain |
//! |------|--------|--------|
//! | `i8` | `i8` | -128 ..= 127 |
//! | `u8` | `u8` | 0 ..= 255 |
//! | `i16` | `i16` | -32768 ..= 32767 |
//! | `u16` | `u16` | 0 ..= 65535 |
//! | `i32` | `i32` | -2^31 ..= 2^31 - 1 |
//! | `u32` | `u32` | 0 ..= 2^32 - 1 |
//! | `f` | `f32` | any float |
//!
//! ## Operations
//!
//! - Sorting: [`PrimVector::sort`], counting sort for 8-bit codes
//! - Projection sorting: [`PrimVector::sort_projection`] orders an index
//!   vector by tuples drawn from parallel attribute vectors
//! - Slicing: [`PrimVector::slice`] with clamped, sequence-style bounds
//! - Serialization: [`PrimVector::serialize`] and [`PrimVector::from_bytes`]

#![warn(missing_docs)]

mod builder;

pub mod prelude;

pub use builder::PrimVectorBuilder;

pub use primvec_core::{
    Domain, Error, FormatError, NumericKind, ParseTypeCodeError, Result, Scalar, TypeCode,
};
pub use primvec_storage::{format, slice, sort_projection, CodecConfig, Element, Iter, PrimVector};
