//! Storage layer for primitive vectors
//!
//! This crate implements the packed container and everything that operates
//! on its buffer:
//! - PrimVector: one contiguous, type-tagged buffer per vector
//! - Element: sealed trait over the seven native element types
//! - In-place sorting (counting sort for 8-bit codes)
//! - Projection sorting by attribute tuples
//! - Sequence-style slicing
//! - Portable little-endian byte format

#![warn(missing_docs)]
#![warn(clippy::all)]

mod buffer;

pub mod config;
pub mod element;
pub mod format;
pub mod projection;
pub mod slice;
pub mod sort;
pub mod vector;

pub use config::CodecConfig;
pub use element::Element;
pub use projection::sort_projection;
pub use vector::{Iter, PrimVector};

pub use primvec_core::{Error, FormatError, Result, Scalar, TypeCode};
