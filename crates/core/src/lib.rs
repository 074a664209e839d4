//! Core types for PrimVec
//!
//! This crate defines the pieces every other PrimVec crate shares:
//! - TypeCode: the seven element types, their widths and domains
//! - Scalar: boundary values tagged with their numeric kind
//! - Error: the error taxonomy for all vector operations
//! - validate: domain checks applied before any mutation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod typecode;
pub mod validate;
pub mod value;

pub use error::{Error, FormatError, Result};
pub use typecode::{Domain, NumericKind, ParseTypeCodeError, TypeCode};
pub use value::Scalar;
