//! The primitive vector container
//!
//! A [`PrimVector`] owns one contiguous buffer of homogeneous elements and
//! the type code that describes them. It is mutated only through `append`,
//! `pop`, `clear`, `sort` and projection sorting; slicing and cloning always
//! produce a new, independently owned buffer.
//!
//! ## Invariants
//!
//! - every stored element matches the type code's kind and, for integer
//!   codes, lies within its domain
//! - a failed operation leaves the vector exactly as it was

use crate::buffer::{dispatch, Buffer};
use crate::config::CodecConfig;
use crate::element::Element;
use crate::{format, projection, slice, sort};
use primvec_core::{validate, Error, Result, Scalar, TypeCode};
use xxhash_rust::xxh3::xxh3_64;

/// Upper bound on the reservation taken from an iterator's size hint
const MAX_PREALLOC: usize = 4096;

/// A compact, type-tagged vector of primitive numbers
#[derive(Debug, Clone, PartialEq)]
pub struct PrimVector {
    buffer: Buffer,
}

impl PrimVector {
    /// Create an empty vector
    pub fn new(typecode: TypeCode) -> Self {
        Self::with_capacity(typecode, 0)
    }

    /// Create an empty vector with room for `capacity` elements
    pub fn with_capacity(typecode: TypeCode, capacity: usize) -> Self {
        PrimVector {
            buffer: Buffer::with_capacity(typecode, capacity),
        }
    }

    /// Build a vector by appending every value of `values`, in order
    ///
    /// The iterator is consumed exactly once. The first value that fails
    /// validation aborts construction and its error is returned. At most
    /// `MAX_PREALLOC` elements are reserved up front; the buffer grows
    /// geometrically past that.
    ///
    /// # Example
    ///
    /// ```
    /// use primvec_storage::PrimVector;
    /// use primvec_core::TypeCode;
    ///
    /// let v = PrimVector::try_from_iter(TypeCode::U8, 0..10).unwrap();
    /// assert_eq!(v.len(), 10);
    ///
    /// let err = PrimVector::try_from_iter(TypeCode::U8, [1, 300]).unwrap_err();
    /// assert!(err.is_range());
    /// ```
    pub fn try_from_iter<I>(typecode: TypeCode, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        let values = values.into_iter();
        let reserve = values.size_hint().0.min(MAX_PREALLOC);
        let mut vector = Self::with_capacity(typecode, reserve);
        for value in values {
            vector.append(value)?;
        }
        Ok(vector)
    }

    /// Build a vector from native elements
    pub fn from_slice<T: Element>(items: &[T]) -> Self {
        Self::from_vec(items.to_vec())
    }

    /// Build a vector taking ownership of native elements
    pub fn from_vec<T: Element>(items: Vec<T>) -> Self {
        PrimVector {
            buffer: T::wrap(items),
        }
    }

    /// Deserialize a vector (see [`crate::format`])
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        format::decode(bytes)
    }

    /// Deserialize a vector, enforcing decoder limits
    pub fn from_bytes_with(bytes: &[u8], config: &CodecConfig) -> Result<Self> {
        format::decode_with(bytes, config)
    }

    pub(crate) fn from_buffer(buffer: Buffer) -> Self {
        PrimVector { buffer }
    }

    pub(crate) fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Element type code
    pub fn typecode(&self) -> TypeCode {
        self.buffer.typecode()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the vector has no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements the buffer can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Append a value
    ///
    /// # Errors
    ///
    /// - `TypeError` if the value's kind differs from the vector's kind
    /// - `RangeError` if an integer lies outside the type code's domain
    ///
    /// On error the vector is unchanged.
    pub fn append(&mut self, value: impl Into<Scalar>) -> Result<()> {
        let value = value.into();
        validate::check(self.typecode(), value)?;
        dispatch!(&mut self.buffer, v => v.push(Element::from_checked(value)));
        Ok(())
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> Option<Scalar> {
        dispatch!(&mut self.buffer, v => v.pop().map(Element::to_scalar))
    }

    /// Remove every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        dispatch!(&mut self.buffer, v => v.clear())
    }

    /// Get the element at `index`; negative indices count from the end
    ///
    /// # Errors
    ///
    /// `IndexError` if `index` is outside `[-len, len)`.
    pub fn get(&self, index: isize) -> Result<Scalar> {
        let len = self.len();
        let i = slice::normalize_index(index, len).ok_or(Error::Index { index, len })?;
        Ok(self.scalar_at(i))
    }

    fn scalar_at(&self, i: usize) -> Scalar {
        dispatch!(&self.buffer, v => v[i].to_scalar())
    }

    /// Borrow the elements as a native slice
    ///
    /// Returns `None` if `T` does not back this vector's type code.
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::view(&self.buffer)
    }

    /// Mutably borrow the native elements
    ///
    /// Any value of `T` is within its own type code's domain, so writes
    /// through this view cannot break the vector's invariants.
    pub fn as_mut_slice<T: Element>(&mut self) -> Option<&mut [T]> {
        T::view_mut(&mut self.buffer).map(|v| v.as_mut_slice())
    }

    /// Iterate the elements in storage order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            vector: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Copy of the elements selected by sequence-style bounds
    ///
    /// Bounds clamp rather than fail; see [`crate::slice::resolve`].
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> PrimVector {
        let range = slice::resolve(start, end, self.len());
        PrimVector {
            buffer: self.buffer.copy_range(range),
        }
    }

    /// Sort ascending in place (unstable; see [`crate::sort`])
    pub fn sort(&mut self) {
        sort::sort(self)
    }

    /// Check whether the elements are in ascending order
    pub fn is_sorted(&self) -> bool {
        sort::is_sorted(self)
    }

    /// Treat this vector as a projection and sort it by `attributes`
    ///
    /// See [`crate::projection::sort_projection`].
    pub fn sort_projection(&mut self, attributes: &[&PrimVector]) -> Result<()> {
        projection::sort_projection(self, attributes)
    }

    /// Serialize to the portable byte form
    pub fn serialize(&self) -> Vec<u8> {
        format::encode(self)
    }

    /// 64-bit content hash over the type code and element bits
    ///
    /// Vectors with the same type code and bit-identical elements hash
    /// equally, independent of capacity.
    pub fn content_hash(&self) -> u64 {
        xxh3_64(&self.serialize())
    }
}

impl<'a> IntoIterator for &'a PrimVector {
    type Item = Scalar;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a vector's elements as scalars
///
/// Each call to [`PrimVector::iter`] starts a fresh traversal.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    vector: &'a PrimVector,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        if self.front >= self.back {
            return None;
        }
        let value = self.vector.scalar_at(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Scalar> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.vector.scalar_at(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl std::iter::FusedIterator for Iter<'_> {}
