//! Service Layer
//!
//! Application service that orchestrates the domain logic and reaches
//! entropy, hashing and logging through the outbound ports.

pub mod randomizer;

pub use randomizer::{Randomizer, FILENAME_LENGTH};
