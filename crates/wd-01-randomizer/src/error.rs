//! Error types for the Randomizer subsystem

use thiserror::Error;

/// Errors surfaced by randomizer operations.
///
/// Precondition violations (empty character set, inverted ranges) are
/// programming mistakes and panic instead of appearing here.
#[derive(Debug, Error)]
pub enum RandomizerError {
    #[error("Unsupported random algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Problem decoding hash while creating GUID: {hash}")]
    DigestDecode {
        hash: String,
        #[source]
        source: CodecError,
    },

    #[error("Digest too short for GUID: {len} bytes < {required}")]
    DigestTooShort { len: usize, required: usize },
}

/// Errors from the encoder collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Invalid base64 input: {0}")]
    InvalidBase64(String),
}
