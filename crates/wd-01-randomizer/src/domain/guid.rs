//! GUID derivation helpers
//!
//! A GUID is rendered from the first 16 bytes of a hash digest as uppercase
//! hex, grouped `8-4-4-4-12`.

use crate::error::RandomizerError;

/// Host literal used when the local host identity cannot be resolved.
pub const FALLBACK_HOST: &str = "0.0.0.0";

/// Length of the random alphanumeric component of the GUID seed.
pub const GUID_NONCE_LENGTH: usize = 20;

/// Digest bytes consumed per GUID.
pub const GUID_DIGEST_BYTES: usize = 16;

/// Length of a formatted GUID including separators.
pub const GUID_LENGTH: usize = 36;

/// Build the entropy seed `"{host}:{millis}:{nonce}"`.
pub fn seed(host: &str, millis: u64, nonce: &str) -> String {
    format!("{host}:{millis}:{nonce}")
}

/// Render digest bytes in canonical GUID layout.
pub fn format_guid(digest: &[u8]) -> Result<String, RandomizerError> {
    if digest.len() < GUID_DIGEST_BYTES {
        return Err(RandomizerError::DigestTooShort {
            len: digest.len(),
            required: GUID_DIGEST_BYTES,
        });
    }

    let raw = hex::encode_upper(&digest[..GUID_DIGEST_BYTES]);
    Ok(format!(
        "{}-{}-{}-{}-{}",
        &raw[0..8],
        &raw[8..12],
        &raw[12..16],
        &raw[16..20],
        &raw[20..32]
    ))
}

/// Returns true if `s` is a canonical uppercase GUID.
pub fn is_canonical_guid(s: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    if s.len() != GUID_LENGTH {
        return false;
    }

    let mut parts = s.split('-');
    for expected in GROUPS {
        match parts.next() {
            Some(part)
                if part.len() == expected
                    && part.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')) => {}
            _ => return false,
        }
    }
    parts.next().is_none()
}
