//! Typed backing storage
//!
//! One variant per type code, each owning a single contiguous `Vec`. The
//! variant is the vector's type tag; length and capacity are the `Vec`'s.

use primvec_core::TypeCode;

/// Contiguous element storage, tagged by type code
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    /// `i8` elements
    I8(Vec<i8>),
    /// `u8` elements
    U8(Vec<u8>),
    /// `i16` elements
    I16(Vec<i16>),
    /// `u16` elements
    U16(Vec<u16>),
    /// `i32` elements
    I32(Vec<i32>),
    /// `u32` elements
    U32(Vec<u32>),
    /// `f` elements
    F(Vec<f32>),
}

/// Run `$body` with `$v` bound to the inner `Vec` of whichever variant `$buf` is
macro_rules! dispatch {
    ($buf:expr, $v:ident => $body:expr) => {
        match $buf {
            $crate::buffer::Buffer::I8($v) => $body,
            $crate::buffer::Buffer::U8($v) => $body,
            $crate::buffer::Buffer::I16($v) => $body,
            $crate::buffer::Buffer::U16($v) => $body,
            $crate::buffer::Buffer::I32($v) => $body,
            $crate::buffer::Buffer::U32($v) => $body,
            $crate::buffer::Buffer::F($v) => $body,
        }
    };
}

pub(crate) use dispatch;

impl Buffer {
    /// Empty buffer with room for `capacity` elements
    pub(crate) fn with_capacity(typecode: TypeCode, capacity: usize) -> Self {
        match typecode {
            TypeCode::I8 => Buffer::I8(Vec::with_capacity(capacity)),
            TypeCode::U8 => Buffer::U8(Vec::with_capacity(capacity)),
            TypeCode::I16 => Buffer::I16(Vec::with_capacity(capacity)),
            TypeCode::U16 => Buffer::U16(Vec::with_capacity(capacity)),
            TypeCode::I32 => Buffer::I32(Vec::with_capacity(capacity)),
            TypeCode::U32 => Buffer::U32(Vec::with_capacity(capacity)),
            TypeCode::F => Buffer::F(Vec::with_capacity(capacity)),
        }
    }

    pub(crate) fn typecode(&self) -> TypeCode {
        match self {
            Buffer::I8(_) => TypeCode::I8,
            Buffer::U8(_) => TypeCode::U8,
            Buffer::I16(_) => TypeCode::I16,
            Buffer::U16(_) => TypeCode::U16,
            Buffer::I32(_) => TypeCode::I32,
            Buffer::U32(_) => TypeCode::U32,
            Buffer::F(_) => TypeCode::F,
        }
    }

    pub(crate) fn len(&self) -> usize {
        dispatch!(self, v => v.len())
    }

    pub(crate) fn capacity(&self) -> usize {
        dispatch!(self, v => v.capacity())
    }

    /// Copy of the elements in `range`, same type code
    pub(crate) fn copy_range(&self, range: std::ops::Range<usize>) -> Self {
        match self {
            Buffer::I8(v) => Buffer::I8(v[range].to_vec()),
            Buffer::U8(v) => Buffer::U8(v[range].to_vec()),
            Buffer::I16(v) => Buffer::I16(v[range].to_vec()),
            Buffer::U16(v) => Buffer::U16(v[range].to_vec()),
            Buffer::I32(v) => Buffer::I32(v[range].to_vec()),
            Buffer::U32(v) => Buffer::U32(v[range].to_vec()),
            Buffer::F(v) => Buffer::F(v[range].to_vec()),
        }
    }

    /// Reorder so that position `k` holds the element previously at `perm[k]`
    ///
    /// `perm` must be a permutation of `0..len`.
    pub(crate) fn permute(&mut self, perm: &[usize]) {
        dispatch!(self, v => {
            let old = v.clone();
            for (dst, &src) in v.iter_mut().zip(perm) {
                *dst = old[src];
            }
        })
    }
}
