//! Encoder Adapters

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::CodecError;
use crate::ports::Encoder;

/// Standard-alphabet base64 encoder with padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Encoder;

impl Base64Encoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode raw bytes as standard base64.
    pub fn encode_base64(&self, input: &[u8]) -> String {
        STANDARD.encode(input)
    }
}

impl Encoder for Base64Encoder {
    fn decode_base64(&self, input: &str) -> Result<Vec<u8>, CodecError> {
        STANDARD
            .decode(input)
            .map_err(|e| CodecError::InvalidBase64(e.to_string()))
    }
}
