//! Decoder configuration

/// Limits applied when decoding a serialized vector
///
/// The element count in a buffer header is checked against `max_items`
/// before any allocation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Largest element count accepted by the decoder (`None` = no limit)
    pub max_items: Option<u64>,
}

impl CodecConfig {
    /// Config with no limits
    pub const fn unlimited() -> Self {
        CodecConfig { max_items: None }
    }

    /// Config rejecting buffers with more than `max_items` elements
    pub const fn with_max_items(max_items: u64) -> Self {
        CodecConfig {
            max_items: Some(max_items),
        }
    }
}
