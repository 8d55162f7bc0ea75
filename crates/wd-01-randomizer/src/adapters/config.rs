use crate::domain::RandomAlgorithm;
use crate::ports::{ConfigProvider, DEFAULT_GUID_SALT, DEFAULT_HASH_ITERATIONS};

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider with hardcoded values.
///
/// Useful for testing and development. For deployments, use `TomlConfigProvider`.
#[derive(Debug, Clone)]
pub struct StaticConfigProvider {
    algorithm: String,
    guid_salt: String,
    master_salt: String,
    hash_iterations: u32,
}

impl StaticConfigProvider {
    /// Create with the default algorithm and GUID salt.
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: RandomAlgorithm::default().as_str().to_string(),
            guid_salt: DEFAULT_GUID_SALT.to_string(),
            master_salt: String::new(),
            hash_iterations: DEFAULT_HASH_ITERATIONS,
        }
    }

    /// Use the named algorithm. Unknown names are accepted here and
    /// surface as a degraded source at construction.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Use a custom GUID salt.
    #[must_use]
    pub fn with_guid_salt(mut self, salt: impl Into<String>) -> Self {
        self.guid_salt = salt.into();
        self
    }

    /// Use a master salt for the hasher.
    #[must_use]
    pub fn with_master_salt(mut self, salt: impl Into<String>) -> Self {
        self.master_salt = salt.into();
        self
    }

    /// Use a custom number of hash rounds.
    #[must_use]
    pub fn with_hash_iterations(mut self, iterations: u32) -> Self {
        self.hash_iterations = iterations;
        self
    }
}

impl Default for StaticConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_random_algorithm(&self) -> String {
        self.algorithm.clone()
    }

    fn get_guid_salt(&self) -> String {
        self.guid_salt.clone()
    }

    fn get_master_salt(&self) -> String {
        self.master_salt.clone()
    }

    fn get_hash_iterations(&self) -> u32 {
        self.hash_iterations
    }
}

// ============================================================================
// TomlConfigProvider - File Config Loading (requires "config-file" feature)
// ============================================================================

#[cfg(feature = "config-file")]
mod toml_config {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;
    use thiserror::Error;

    /// Configuration file structure.
    #[derive(Debug, Deserialize, Default)]
    struct ConfigFile {
        #[serde(default)]
        randomizer: RandomizerSection,
        #[serde(default)]
        hasher: HasherSection,
    }

    #[derive(Debug, Deserialize, Default)]
    struct RandomizerSection {
        algorithm: Option<String>,
        guid_salt: Option<String>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct HasherSection {
        master_salt: Option<String>,
        iterations: Option<u32>,
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [randomizer]
    /// algorithm = "StdRng"
    /// guid_salt = "salt"
    ///
    /// [hasher]
    /// master_salt = ""
    /// iterations = 1024
    /// ```
    ///
    /// Missing keys fall back to the `StaticConfigProvider` defaults.
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        inner: StaticConfigProvider,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if file cannot be read or parsed.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let mut inner = StaticConfigProvider::new();
            if let Some(algorithm) = file.randomizer.algorithm {
                inner = inner.with_algorithm(algorithm);
            }
            if let Some(salt) = file.randomizer.guid_salt {
                inner = inner.with_guid_salt(salt);
            }
            if let Some(salt) = file.hasher.master_salt {
                inner = inner.with_master_salt(salt);
            }
            if let Some(iterations) = file.hasher.iterations {
                inner = inner.with_hash_iterations(iterations);
            }

            Ok(Self { inner })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn get_random_algorithm(&self) -> String {
            self.inner.get_random_algorithm()
        }

        fn get_guid_salt(&self) -> String {
            self.inner.get_guid_salt()
        }

        fn get_master_salt(&self) -> String {
            self.inner.get_master_salt()
        }

        fn get_hash_iterations(&self) -> u32 {
            self.inner.get_hash_iterations()
        }
    }

    /// Errors that can occur during config loading.
    #[derive(Debug, Clone, Error)]
    pub enum ConfigError {
        /// File I/O error.
        #[error("Failed to read {path}: {error}")]
        Io {
            /// Path of the file that failed to load.
            path: String,
            /// Error message from the I/O operation.
            error: String,
        },
        /// TOML parsing error.
        #[error("Failed to parse config: {0}")]
        Parse(String),
    }
}

#[cfg(feature = "config-file")]
pub use toml_config::{ConfigError, TomlConfigProvider};
