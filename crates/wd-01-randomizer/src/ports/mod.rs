//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** `RandomizerApi`, the API this crate exposes
//! - **Driven Ports (Outbound):** collaborators the host application supplies

pub mod inbound;
pub mod outbound;

pub use inbound::RandomizerApi;
pub use outbound::{
    ConfigProvider, Encoder, Hasher, HostIdentity, RandomSource, SecurityLogger, TimeSource,
    DEFAULT_GUID_SALT, DEFAULT_HASH_ITERATIONS,
};
