//! # WD-01 Randomizer
//!
//! Cryptographically strong random tokens for security-sensitive code:
//! strings over a caller-chosen alphabet, booleans, bounded integers and
//! reals, throwaway filenames and GUID-shaped identifiers.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `CharacterSet`: Ordered, duplicate-free alphabet
//!   - `union` / `contains`: Set helpers over alphabets
//!   - `RandomAlgorithm`: Named generator selected by configuration
//!   - `guid`: Seed layout and canonical 8-4-4-4-12 rendering
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `RandomizerApi`: Driving port (inbound API)
//!   - `RandomSource`, `ConfigProvider`, `Encoder`, `Hasher`,
//!     `SecurityLogger`, `HostIdentity`, `TimeSource`: Driven ports
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `Randomizer`: Implements `RandomizerApi`
//!
//! - **Adapters Layer** (`adapters/`): Concrete port implementations
//!
//! ## Degraded Mode
//!
//! An unrecognised algorithm name never fails construction. The randomizer
//! falls back to an insecure generator, logs one critical security event and
//! reports `is_degraded() == true` so callers can refuse to mint tokens.
//!
//! ## Usage Example
//!
//! ```
//! use std::sync::Arc;
//! use wd_01_randomizer::{
//!     CharacterSet, Randomizer, RandomizerApi, StaticConfigProvider, TracingSecurityLogger,
//! };
//!
//! let randomizer = Randomizer::from_config(
//!     &StaticConfigProvider::new(),
//!     Arc::new(TracingSecurityLogger::default()),
//! );
//!
//! let token = randomizer.random_string(32, &CharacterSet::alphanumerics());
//! assert_eq!(token.len(), 32);
//!
//! let guid = randomizer.random_guid().unwrap();
//! assert_eq!(guid.len(), 36);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{
    Base64Encoder, FixedHostIdentity, FixedTimeSource, MemorySecurityLogger, SecureRandomSource,
    SequenceRandomSource, Sha512Hasher, StaticConfigProvider, SystemHostIdentity,
    SystemTimeSource, TracingSecurityLogger,
};
#[cfg(feature = "config-file")]
pub use adapters::{ConfigError, TomlConfigProvider};
pub use domain::{
    contains, format_guid, is_canonical_guid, union, CharacterSet, RandomAlgorithm,
    CHAR_ALPHANUMERICS, CHAR_DIGITS, CHAR_LETTERS, CHAR_LOWERS, CHAR_SPECIALS, CHAR_UPPERS,
    FALLBACK_HOST, GUID_LENGTH,
};
pub use error::{CodecError, RandomizerError};
pub use ports::{
    ConfigProvider, Encoder, Hasher, HostIdentity, RandomSource, RandomizerApi, SecurityLogger,
    TimeSource, DEFAULT_GUID_SALT, DEFAULT_HASH_ITERATIONS,
};
pub use service::{Randomizer, FILENAME_LENGTH};
