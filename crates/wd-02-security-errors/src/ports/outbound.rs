//! # Driven Ports (Outbound SPI)

use crate::domain::SecurityException;

/// Receives every security exception at construction time.
///
/// Called synchronously from the constructor, so implementations must not
/// block indefinitely and must not panic.
pub trait IntrusionDetector: Send + Sync {
    /// Record one occurrence of `exception`.
    fn record_exception(&self, exception: &SecurityException);
}

