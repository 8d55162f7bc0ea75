//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.
//!
//! - `security/` - random sources, encoder, hasher, security loggers
//! - `config` - `StaticConfigProvider`, `TomlConfigProvider` (feature `config-file`)
//! - `system` - host identity and clock

pub mod config;
pub mod security;
pub mod system;

pub use config::StaticConfigProvider;
#[cfg(feature = "config-file")]
pub use config::{ConfigError, TomlConfigProvider};
pub use security::{
    Base64Encoder, MemorySecurityLogger, SecureRandomSource, SequenceRandomSource, Sha512Hasher,
    TracingSecurityLogger,
};
pub use system::{FixedHostIdentity, FixedTimeSource, SystemHostIdentity, SystemTimeSource};
