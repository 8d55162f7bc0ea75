//! Randomizer Service
//!
//! Orchestrates the random source and the GUID collaborators behind the
//! `RandomizerApi` port.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::adapters::{
    Base64Encoder, SecureRandomSource, Sha512Hasher, SystemHostIdentity, SystemTimeSource,
};
use crate::domain::{guid, CharacterSet};
use crate::error::RandomizerError;
use crate::ports::{
    ConfigProvider, Encoder, Hasher, HostIdentity, RandomSource, RandomizerApi, SecurityLogger,
    TimeSource, DEFAULT_GUID_SALT,
};

/// Length of the random stem of generated filenames.
pub const FILENAME_LENGTH: usize = 12;

/// Randomizer service implementation
///
/// Implements the `RandomizerApi` port using injected dependencies. The
/// composition root builds one instance and shares it through `Arc`.
pub struct Randomizer<R: RandomSource> {
    /// Entropy for every draw (driven port)
    source: Arc<R>,
    encoder: Arc<dyn Encoder>,
    hasher: Arc<dyn Hasher>,
    logger: Arc<dyn SecurityLogger>,
    host: Arc<dyn HostIdentity>,
    clock: Arc<dyn TimeSource>,
    guid_salt: String,
}

impl<R: RandomSource> Randomizer<R> {
    /// Create a randomizer with system host identity and wall clock.
    pub fn new(
        source: Arc<R>,
        encoder: Arc<dyn Encoder>,
        hasher: Arc<dyn Hasher>,
        logger: Arc<dyn SecurityLogger>,
    ) -> Self {
        Self {
            source,
            encoder,
            hasher,
            logger,
            host: Arc::new(SystemHostIdentity::new()),
            clock: Arc::new(SystemTimeSource::new()),
            guid_salt: DEFAULT_GUID_SALT.to_string(),
        }
    }

    /// Replace the host identity used in GUID seeds.
    #[must_use]
    pub fn with_host_identity(mut self, host: Arc<dyn HostIdentity>) -> Self {
        self.host = host;
        self
    }

    /// Replace the clock used in GUID seeds.
    #[must_use]
    pub fn with_time_source(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the salt passed to the hasher for GUIDs.
    #[must_use]
    pub fn with_guid_salt(mut self, salt: impl Into<String>) -> Self {
        self.guid_salt = salt.into();
        self
    }

    /// The underlying random source.
    pub fn source(&self) -> &Arc<R> {
        &self.source
    }

    /// True when the random source runs on an insecure fallback.
    pub fn is_degraded(&self) -> bool {
        self.source.is_degraded()
    }

    fn decode_digest(&self, hash: &str) -> Result<Vec<u8>, RandomizerError> {
        self.encoder.decode_base64(hash).map_err(|source| {
            let err = RandomizerError::DigestDecode {
                hash: hash.to_string(),
                source,
            };
            self.logger.log_critical(&err.to_string());
            err
        })
    }
}

impl Randomizer<SecureRandomSource> {
    /// Build the default stack from configuration: `SecureRandomSource`,
    /// base64 encoder and an iterated SHA-512 hasher using the configured
    /// master salt and rounds.
    ///
    /// An unsupported algorithm yields a degraded randomizer, never an error.
    pub fn from_config(config: &dyn ConfigProvider, logger: Arc<dyn SecurityLogger>) -> Self {
        let source = Arc::new(SecureRandomSource::from_config(config, logger.as_ref()));

        Self::new(
            source,
            Arc::new(Base64Encoder::new()),
            Arc::new(Sha512Hasher::from_config(config)),
            logger,
        )
        .with_guid_salt(config.get_guid_salt())
    }
}

/// Largest `f32` strictly below a finite `x`.
fn largest_below(x: f32) -> f32 {
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

impl<R: RandomSource + fmt::Debug> fmt::Debug for Randomizer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Randomizer")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<R: RandomSource> RandomizerApi for Randomizer<R> {
    fn random_string(&self, length: usize, charset: &CharacterSet) -> String {
        assert!(!charset.is_empty(), "character set must not be empty");

        let chars = charset.as_slice();
        assert!(
            chars.len() <= u32::MAX as usize,
            "character set too large: {} chars",
            chars.len()
        );

        let bound = chars.len() as u32;
        (0..length)
            .map(|_| {
                let idx = self.source.draw_int(bound) as usize;
                assert!(
                    idx < chars.len(),
                    "random source drew {idx} outside [0, {bound})"
                );
                chars[idx]
            })
            .collect()
    }

    fn random_boolean(&self) -> bool {
        self.source.draw_bool()
    }

    fn random_integer(&self, min: i64, max: i64) -> i64 {
        assert!(max > min, "random_integer requires max > min ({min} >= {max})");

        // The span of any i64 range fits in u64
        let span = max.wrapping_sub(min) as u64;
        min.wrapping_add(self.source.draw_u64(span) as i64)
    }

    fn random_real(&self, min: f32, max: f32) -> f32 {
        assert!(
            min.is_finite() && max.is_finite() && min < max,
            "random_real requires finite min < max ({min}, {max})"
        );

        // widened so the span of any finite range stays finite
        let factor = f64::from(max) - f64::from(min);
        let value = (f64::from(self.source.draw_f32()) * factor + f64::from(min)) as f32;

        // narrowing can round up onto max
        if value < max {
            value
        } else {
            largest_below(max)
        }
    }

    fn random_filename(&self, extension: &str) -> String {
        let stem = self.random_string(FILENAME_LENGTH, &self.encoder.alphanumerics());
        format!("{stem}.{extension}")
    }

    fn random_guid(&self) -> Result<String, RandomizerError> {
        let host = self
            .host
            .host_identity()
            .unwrap_or_else(|| guid::FALLBACK_HOST.to_string());
        let nonce = self.random_string(guid::GUID_NONCE_LENGTH, &self.encoder.alphanumerics());
        let seed = guid::seed(&host, self.clock.now_millis(), &nonce);

        let hash = self.hasher.hash(&seed, &self.guid_salt);
        let digest = self.decode_digest(&hash)?;

        let guid = guid::format_guid(&digest).inspect_err(|err| {
            self.logger.log_critical(&err.to_string());
        })?;

        debug!(guid = %guid, "GUID derived");
        Ok(guid)
    }
}
