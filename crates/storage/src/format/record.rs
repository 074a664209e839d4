//! Serialized vector record: header plus packed payload

use crate::buffer::{dispatch, Buffer};
use crate::config::CodecConfig;
use crate::element::Element;
use crate::vector::PrimVector;
use byteorder::{ByteOrder, LittleEndian};
use primvec_core::{FormatError, Result, TypeCode};
use tracing::debug;

/// Size of the type code tag
pub const TAG_SIZE: usize = 1;

/// Size of the element count field
pub const COUNT_SIZE: usize = 8;

/// Total header size (tag + count)
pub const HEADER_SIZE: usize = TAG_SIZE + COUNT_SIZE;

/// Number of bytes `encode` will produce for `vector`
pub fn encoded_len(vector: &PrimVector) -> usize {
    HEADER_SIZE + vector.len() * vector.typecode().width()
}

/// Serialize a vector to its portable byte form
pub fn encode(vector: &PrimVector) -> Vec<u8> {
    let mut out = vec![0u8; encoded_len(vector)];

    out[0] = vector.typecode().tag();
    LittleEndian::write_u64(&mut out[TAG_SIZE..HEADER_SIZE], vector.len() as u64);
    let payload = &mut out[HEADER_SIZE..];
    dispatch!(vector.buffer(), items => Element::encode_le(items.as_slice(), payload));

    out
}

/// Deserialize a vector with no size limit
pub fn decode(bytes: &[u8]) -> Result<PrimVector> {
    decode_with(bytes, &CodecConfig::default())
}

/// Deserialize a vector, enforcing the limits in `config`
///
/// # Errors
///
/// `FormatError` when the buffer is shorter than the header, the tag is
/// unknown, the count exceeds `config.max_items`, or the payload is not
/// exactly `count × width` bytes.
pub fn decode_with(bytes: &[u8], config: &CodecConfig) -> Result<PrimVector> {
    if bytes.len() < HEADER_SIZE {
        debug!(
            "rejecting vector buffer: {} bytes, header needs {}",
            bytes.len(),
            HEADER_SIZE
        );
        return Err(FormatError::Truncated {
            needed: HEADER_SIZE,
            available: bytes.len(),
        }
        .into());
    }

    let typecode = TypeCode::from_tag(bytes[0]).ok_or_else(|| {
        debug!("rejecting vector buffer: unknown tag {}", bytes[0]);
        FormatError::UnknownTypecode(bytes[0])
    })?;

    let count = LittleEndian::read_u64(&bytes[TAG_SIZE..HEADER_SIZE]);

    if let Some(limit) = config.max_items {
        if count > limit {
            debug!(
                "rejecting {} vector buffer: {} elements exceeds limit {}",
                typecode, count, limit
            );
            return Err(FormatError::TooLarge { count, limit }.into());
        }
    }

    let payload = &bytes[HEADER_SIZE..];
    let width = typecode.width();

    if count.checked_mul(width as u64) != Some(payload.len() as u64) {
        debug!(
            "rejecting {} vector buffer: count {} does not match {} payload bytes",
            typecode,
            count,
            payload.len()
        );
        return Err(FormatError::LengthMismatch {
            count,
            width,
            available: payload.len(),
        }
        .into());
    }

    let count = payload.len() / width;
    let buffer = match typecode {
        TypeCode::I8 => decode_items::<i8>(payload, count),
        TypeCode::U8 => decode_items::<u8>(payload, count),
        TypeCode::I16 => decode_items::<i16>(payload, count),
        TypeCode::U16 => decode_items::<u16>(payload, count),
        TypeCode::I32 => decode_items::<i32>(payload, count),
        TypeCode::U32 => decode_items::<u32>(payload, count),
        TypeCode::F => decode_items::<f32>(payload, count),
    };

    Ok(PrimVector::from_buffer(buffer))
}

fn decode_items<T: Element>(payload: &[u8], count: usize) -> Buffer {
    let mut items = vec![T::default(); count];
    T::decode_le(payload, &mut items);
    T::wrap(items)
}
