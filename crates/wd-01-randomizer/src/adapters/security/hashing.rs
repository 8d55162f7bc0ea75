//! Salted Hasher Adapters

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha512};

use crate::ports::{ConfigProvider, Hasher, DEFAULT_HASH_ITERATIONS};

/// Iterated, salted SHA-512.
///
/// `digest = SHA512(master_salt || salt || input)`, then re-hashed
/// `iterations` times. Output is standard base64 of the 64-byte digest.
#[derive(Debug, Clone)]
pub struct Sha512Hasher {
    master_salt: Vec<u8>,
    iterations: u32,
}

impl Sha512Hasher {
    /// Create a hasher with an application-wide master salt.
    pub fn new(master_salt: impl Into<Vec<u8>>, iterations: u32) -> Self {
        Self {
            master_salt: master_salt.into(),
            iterations,
        }
    }

    /// Build from the `[hasher]` settings of a config provider.
    pub fn from_config(config: &dyn ConfigProvider) -> Self {
        Self::new(config.get_master_salt(), config.get_hash_iterations())
    }

    /// Number of re-hash rounds.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Raw digest bytes before base64 encoding.
    pub fn digest(&self, input: &str, salt: &str) -> [u8; 64] {
        let mut hasher = Sha512::new();
        hasher.update(&self.master_salt);
        hasher.update(salt.as_bytes());
        hasher.update(input.as_bytes());
        let mut digest = hasher.finalize();

        for _ in 0..self.iterations {
            digest = Sha512::digest(digest);
        }

        let mut out = [0u8; 64];
        out.copy_from_slice(&digest);
        out
    }
}

impl Default for Sha512Hasher {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_HASH_ITERATIONS)
    }
}

impl Hasher for Sha512Hasher {
    fn hash(&self, input: &str, salt: &str) -> String {
        STANDARD.encode(self.digest(input, salt))
    }
}
