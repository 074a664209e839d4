//! Convenient imports for PrimVec.
//!
//! ```
//! use primvec::prelude::*;
//!
//! let v = PrimVector::try_from_iter(TypeCode::I16, [3, 1, 2])?;
//! assert_eq!(v.len(), 3);
//! # Ok::<(), Error>(())
//! ```

// Container and configuration
pub use crate::builder::PrimVectorBuilder;
pub use primvec_storage::{CodecConfig, Element, PrimVector};

// Error handling
pub use primvec_core::{Error, FormatError, Result};

// Core types
pub use primvec_core::{Domain, NumericKind, Scalar, TypeCode};
