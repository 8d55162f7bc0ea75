//! # Security Adapters
//!
//! Implements the security port traits:
//! - `RandomSource`: generator-backed and deterministic sources
//! - `Encoder`: base64 decoding
//! - `Hasher`: iterated salted SHA-512
//! - `SecurityLogger`: tracing and in-memory sinks
//!
//! ## Mock vs Production
//!
//! | Port | Mock (Testing) | Production |
//! |------|----------------|------------|
//! | `RandomSource` | `SequenceRandomSource` | `SecureRandomSource` |
//! | `SecurityLogger` | `MemorySecurityLogger` | `TracingSecurityLogger` |

mod codec;
mod hashing;
mod logging;
mod random;

pub use codec::Base64Encoder;
pub use hashing::Sha512Hasher;
pub use logging::{MemorySecurityLogger, TracingSecurityLogger};
pub use random::{SecureRandomSource, SequenceRandomSource};
