//! Builder for configured vector construction.

use primvec_core::{validate, Error, Result, Scalar, TypeCode};
use primvec_storage::{CodecConfig, PrimVector};
use tracing::debug;

/// Builder for vectors and decoders.
///
/// # Example
///
/// ```
/// use primvec::prelude::*;
///
/// let v = PrimVectorBuilder::new()
///     .typecode(TypeCode::I32)
///     .capacity(1024)
///     .values([1, -2, 3])
///     .build()?;
/// assert_eq!(v.len(), 3);
/// assert!(v.capacity() >= 1024);
///
/// let decoded = PrimVectorBuilder::new()
///     .max_items(16)
///     .decode(&v.serialize())?;
/// assert_eq!(decoded, v);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrimVectorBuilder {
    typecode: Option<TypeCode>,
    capacity: usize,
    values: Vec<Scalar>,
    error: Option<Error>,
    codec: CodecConfig,
}

impl PrimVectorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element type code.
    ///
    /// Required by [`build`](Self::build). When set before
    /// [`decode`](Self::decode), the decoded buffer must carry this code.
    pub fn typecode(mut self, typecode: TypeCode) -> Self {
        self.typecode = Some(typecode);
        self
    }

    /// Reserve room for at least `capacity` elements.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Initial contents, appended in order by [`build`](Self::build).
    ///
    /// The type code must already be set. The iterator is drained here,
    /// once, and draining stops at the first value the type code rejects;
    /// that error is reported by `build`.
    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        if self.error.is_some() {
            return self;
        }

        let Some(typecode) = self.typecode else {
            debug!("builder rejected: values given before typecode");
            let message = "builder needs a typecode before values".to_string();
            self.error = Some(Error::Value(message));
            return self;
        };

        for value in values {
            let value = value.into();
            if let Err(err) = validate::check(typecode, value) {
                debug!("builder rejected value {} for {}", value, typecode);
                self.error = Some(err);
                break;
            }
            self.values.push(value);
        }
        self
    }

    /// Reject serialized buffers holding more than `max_items` elements.
    pub fn max_items(mut self, max_items: u64) -> Self {
        self.codec = CodecConfig::with_max_items(max_items);
        self
    }

    /// Build a vector from the configured type code and values.
    ///
    /// # Errors
    ///
    /// - `ValueError` if no type code was set, or values came before it
    /// - `RangeError` / `TypeError` from the first value that fails to append
    pub fn build(self) -> Result<PrimVector> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let typecode = self.typecode.ok_or_else(|| {
            debug!("builder rejected: no typecode set");
            Error::Value("builder needs a typecode".to_string())
        })?;

        let capacity = self.capacity.max(self.values.len());
        let mut vector = PrimVector::with_capacity(typecode, capacity);
        for value in self.values {
            vector.append(value)?;
        }

        debug!(
            "built {} vector: {} elements, capacity {}",
            typecode,
            vector.len(),
            vector.capacity()
        );
        Ok(vector)
    }

    /// Decode a serialized vector under the configured limits.
    ///
    /// # Errors
    ///
    /// - `FormatError` for malformed or oversized buffers
    /// - `ValueError` if a type code was set and the buffer carries another
    pub fn decode(&self, bytes: &[u8]) -> Result<PrimVector> {
        let vector = PrimVector::from_bytes_with(bytes, &self.codec)?;

        if let Some(expected) = self.typecode {
            if vector.typecode() != expected {
                debug!(
                    "decode rejected: expected {} buffer, found {}",
                    expected,
                    vector.typecode()
                );
                return Err(Error::Value(format!(
                    "expected {} buffer, found {}",
                    expected,
                    vector.typecode()
                )));
            }
        }

        Ok(vector)
    }
}
