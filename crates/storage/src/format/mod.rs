//! Byte format for serialized primitive vectors
//!
//! This module centralizes all serialization logic. Keeping the byte layout
//! separate from the in-memory container makes format evolution easier to
//! manage.
//!
//! # Layout
//!
//! All multi-byte fields are little-endian, independent of the producing
//! platform's native order.
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 1 | type code tag |
//! | 1 | 8 | element count (u64) |
//! | 9 | count × width | packed elements |
//!
//! # Module Structure
//!
//! - `record`: header and payload encode/decode

pub mod record;

pub use record::{decode, decode_with, encode, encoded_len, COUNT_SIZE, HEADER_SIZE, TAG_SIZE};
