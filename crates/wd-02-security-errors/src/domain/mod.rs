//! Domain layer: the exception value and its classification.

pub mod exception;
pub mod kind;

pub use exception::{PendingException, SecurityException};
pub use kind::{SecurityErrorKind, Severity};
