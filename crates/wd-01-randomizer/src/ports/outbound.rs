//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces the randomizer **requires** the host application
//! to provide. Default adapters live in `crate::adapters`.

use crate::domain::CharacterSet;
use crate::error::CodecError;

/// Default salt for the GUID hash when configuration does not override it.
pub const DEFAULT_GUID_SALT: &str = "salt";

/// Default number of re-hash rounds applied after the salted digest.
pub const DEFAULT_HASH_ITERATIONS: u32 = 1024;

/// Uniform randomness source.
///
/// # Thread Safety
///
/// Implementations must tolerate concurrent draws from many threads without
/// producing correlated or repeated sequences.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn draw_int(&self, bound: u32) -> u32;

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn draw_u64(&self, bound: u64) -> u64;

    /// Uniform coin flip.
    fn draw_bool(&self) -> bool;

    /// Uniform float in `[0, 1)`.
    fn draw_f32(&self) -> f32;

    /// True when the source runs on an insecure fallback generator.
    fn is_degraded(&self) -> bool {
        false
    }
}

/// Abstract interface for configuration loading.
pub trait ConfigProvider: Send + Sync {
    /// Name of the generator algorithm, read once at source construction.
    fn get_random_algorithm(&self) -> String;

    /// Salt passed to the hasher during GUID derivation.
    fn get_guid_salt(&self) -> String {
        DEFAULT_GUID_SALT.to_string()
    }

    /// Application-wide salt prepended by the hasher. Empty by default.
    fn get_master_salt(&self) -> String {
        String::new()
    }

    /// Re-hash rounds for the hasher.
    fn get_hash_iterations(&self) -> u32 {
        DEFAULT_HASH_ITERATIONS
    }
}

/// Encoding collaborator.
pub trait Encoder: Send + Sync {
    /// Decode standard base64 into raw bytes.
    fn decode_base64(&self, input: &str) -> Result<Vec<u8>, CodecError>;

    /// Alphabet used for GUID seeds and filenames.
    fn alphanumerics(&self) -> CharacterSet {
        CharacterSet::alphanumerics()
    }
}

/// One-way salted hash collaborator.
pub trait Hasher: Send + Sync {
    /// Hash `input` with `salt`, returning the digest base64-encoded.
    fn hash(&self, input: &str, salt: &str) -> String;
}

/// Security log sink for diagnostics that must never be dropped.
pub trait SecurityLogger: Send + Sync {
    /// Record a critical-severity security event.
    fn log_critical(&self, message: &str);
}

/// Best-effort identity of the local host.
///
/// Implementations must answer immediately; resolution failure is `None`,
/// never a retry loop.
pub trait HostIdentity: Send + Sync {
    /// Host identity such as `"hostname/10.0.0.1"`, if resolvable.
    fn host_identity(&self) -> Option<String>;
}

/// Wall-clock time source.
pub trait TimeSource: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedConfig;

    impl ConfigProvider for NamedConfig {
        fn get_random_algorithm(&self) -> String {
            "OsRng".to_string()
        }
    }

    struct RejectingEncoder;

    impl Encoder for RejectingEncoder {
        fn decode_base64(&self, input: &str) -> Result<Vec<u8>, CodecError> {
            Err(CodecError::InvalidBase64(input.to_string()))
        }
    }

    #[test]
    fn test_config_default_guid_salt() {
        assert_eq!(NamedConfig.get_guid_salt(), DEFAULT_GUID_SALT);
    }

    #[test]
    fn test_encoder_default_alphabet() {
        assert_eq!(RejectingEncoder.alphanumerics(), CharacterSet::alphanumerics());
    }
}
