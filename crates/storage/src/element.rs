//! Native element types
//!
//! [`Element`] is implemented for exactly the seven native types that back a
//! type code: `i8`, `u8`, `i16`, `u16`, `i32`, `u32` and `f32`. The trait is
//! sealed; it carries the per-width pieces (little-endian encoding, ordering,
//! sort strategy) the rest of the crate dispatches to.

use crate::buffer::Buffer;
use crate::sort::{counting_sort_i8, counting_sort_u8};
use byteorder::{ByteOrder, LittleEndian};
use primvec_core::{Scalar, TypeCode};
use std::cmp::Ordering;

mod private {
    pub trait Sealed {}
}

/// A native type that can be stored in a primitive vector
pub trait Element:
    Copy + Default + PartialOrd + std::fmt::Debug + Send + Sync + private::Sealed + 'static
{
    /// Type code backed by this native type
    const TYPECODE: TypeCode;

    /// Widen to a boundary scalar
    fn to_scalar(self) -> Scalar;

    /// Narrow a scalar that already passed `validate::check` for `TYPECODE`
    #[doc(hidden)]
    fn from_checked(value: Scalar) -> Self;

    /// Total order: numeric for integers, IEEE total order for floats
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Sort ascending in place (unstable)
    fn sort_slice(v: &mut [Self]) {
        v.sort_unstable_by(Self::total_cmp);
    }

    /// Write `src` into `dst` as little-endian bytes; `dst.len() == src.len() * width`
    #[doc(hidden)]
    fn encode_le(src: &[Self], dst: &mut [u8]);

    /// Read little-endian bytes into `dst`; `src.len() == dst.len() * width`
    #[doc(hidden)]
    fn decode_le(src: &[u8], dst: &mut [Self]);

    #[doc(hidden)]
    fn wrap(v: Vec<Self>) -> Buffer;

    #[doc(hidden)]
    fn view(buf: &Buffer) -> Option<&[Self]>;

    #[doc(hidden)]
    fn view_mut(buf: &mut Buffer) -> Option<&mut Vec<Self>>;
}

macro_rules! impl_buffer_access {
    ($variant:ident) => {
        fn wrap(v: Vec<Self>) -> Buffer {
            Buffer::$variant(v)
        }

        fn view(buf: &Buffer) -> Option<&[Self]> {
            match buf {
                Buffer::$variant(v) => Some(v),
                _ => None,
            }
        }

        fn view_mut(buf: &mut Buffer) -> Option<&mut Vec<Self>> {
            match buf {
                Buffer::$variant(v) => Some(v),
                _ => None,
            }
        }
    };
}

macro_rules! impl_integer_element {
    ($t:ty, $variant:ident, $write:ident, $read:ident) => {
        impl private::Sealed for $t {}

        impl Element for $t {
            const TYPECODE: TypeCode = TypeCode::$variant;

            fn to_scalar(self) -> Scalar {
                Scalar::Int(i64::from(self))
            }

            fn from_checked(value: Scalar) -> Self {
                match value {
                    Scalar::Int(v) => v as $t,
                    Scalar::Float(f) => f as $t,
                }
            }

            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn encode_le(src: &[Self], dst: &mut [u8]) {
                LittleEndian::$write(src, dst);
            }

            fn decode_le(src: &[u8], dst: &mut [Self]) {
                LittleEndian::$read(src, dst);
            }

            impl_buffer_access!($variant);
        }
    };
}

impl_integer_element!(i16, I16, write_i16_into, read_i16_into);
impl_integer_element!(u16, U16, write_u16_into, read_u16_into);
impl_integer_element!(i32, I32, write_i32_into, read_i32_into);
impl_integer_element!(u32, U32, write_u32_into, read_u32_into);

impl private::Sealed for i8 {}

impl Element for i8 {
    const TYPECODE: TypeCode = TypeCode::I8;

    fn to_scalar(self) -> Scalar {
        Scalar::Int(i64::from(self))
    }

    fn from_checked(value: Scalar) -> Self {
        match value {
            Scalar::Int(v) => v as i8,
            Scalar::Float(f) => f as i8,
        }
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn sort_slice(v: &mut [Self]) {
        counting_sort_i8(v);
    }

    fn encode_le(src: &[Self], dst: &mut [u8]) {
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.to_le_bytes()[0];
        }
    }

    fn decode_le(src: &[u8], dst: &mut [Self]) {
        for (d, s) in dst.iter_mut().zip(src) {
            *d = i8::from_le_bytes([*s]);
        }
    }

    impl_buffer_access!(I8);
}

impl private::Sealed for u8 {}

impl Element for u8 {
    const TYPECODE: TypeCode = TypeCode::U8;

    fn to_scalar(self) -> Scalar {
        Scalar::Int(i64::from(self))
    }

    fn from_checked(value: Scalar) -> Self {
        match value {
            Scalar::Int(v) => v as u8,
            Scalar::Float(f) => f as u8,
        }
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn sort_slice(v: &mut [Self]) {
        counting_sort_u8(v);
    }

    fn encode_le(src: &[Self], dst: &mut [u8]) {
        dst.copy_from_slice(src);
    }

    fn decode_le(src: &[u8], dst: &mut [Self]) {
        dst.copy_from_slice(src);
    }

    impl_buffer_access!(U8);
}

impl private::Sealed for f32 {}

impl Element for f32 {
    const TYPECODE: TypeCode = TypeCode::F;

    fn to_scalar(self) -> Scalar {
        Scalar::Float(f64::from(self))
    }

    // Doubles are narrowed to single precision here.
    fn from_checked(value: Scalar) -> Self {
        match value {
            Scalar::Float(f) => f as f32,
            Scalar::Int(v) => v as f32,
        }
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    fn encode_le(src: &[Self], dst: &mut [u8]) {
        LittleEndian::write_f32_into(src, dst);
    }

    fn decode_le(src: &[u8], dst: &mut [Self]) {
        LittleEndian::read_f32_into(src, dst);
    }

    impl_buffer_access!(F);
}
