//! # Driving Ports (Inbound API)
//!
//! The randomness API consumed by the rest of the toolkit.

use crate::domain::CharacterSet;
use crate::error::RandomizerError;

/// Primary randomizer API (Driving Port)
pub trait RandomizerApi: Send + Sync {
    /// `length` independent uniform picks from `charset`, in draw order.
    ///
    /// # Panics
    ///
    /// Panics if `charset` is empty.
    fn random_string(&self, length: usize, charset: &CharacterSet) -> String;

    /// Uniform coin flip.
    fn random_boolean(&self) -> bool;

    /// Uniform integer in `[min, max)`. The upper bound is exclusive.
    ///
    /// # Panics
    ///
    /// Panics unless `max > min`.
    fn random_integer(&self, min: i64, max: i64) -> i64;

    /// Uniform real in `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics unless both bounds are finite and `min < max`.
    fn random_real(&self, min: f32, max: f32) -> f32;

    /// Unguessable filename: 12 alphanumerics, a dot, then `extension`.
    fn random_filename(&self, extension: &str) -> String;

    /// Hash-derived identifier in `8-4-4-4-12` uppercase hex layout.
    fn random_guid(&self) -> Result<String, RandomizerError>;
}
