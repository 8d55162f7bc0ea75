//! # WD-02 Security Errors
//!
//! Base error type for security-relevant faults. Every `SecurityException`
//! carries two messages, one safe for the end user and one detailed for the
//! security log, and is reported to intrusion detection when it is built.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`)
//!   - `SecurityException`: Dual-message error, reported on construction
//!   - `PendingException`: Unreported draft, reported explicitly
//!   - `SecurityErrorKind` / `Severity`: Fault family and log weight
//!
//! - **Ports Layer** (`ports/`)
//!   - `IntrusionDetector`: Driven port receiving every exception
//!
//! - **Service Layer** (`service/`)
//!   - `ExceptionReporter`: Raises exceptions against a shared detector
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `RecordingIntrusionDetector`, `LoggingIntrusionDetector`,
//!     `FanOutIntrusionDetector`
//!
//! ## Invariants
//!
//! - A `SecurityException` value cannot exist without having been passed to
//!   a detector exactly once. Propagating it with `?` does not report again.
//! - `Display` shows the user message only. The log message never leaks
//!   through formatting.
//!
//! ## Usage Example
//!
//! ```
//! use std::sync::Arc;
//! use wd_02_security_errors::{
//!     ExceptionReporter, RecordingIntrusionDetector, SecurityErrorKind,
//! };
//!
//! let detector = Arc::new(RecordingIntrusionDetector::new());
//! let reporter = ExceptionReporter::new(detector.clone());
//!
//! let err = reporter.raise(
//!     SecurityErrorKind::Authentication,
//!     "Login failed",
//!     "Bad password for user 'alice' from 10.0.0.7",
//! );
//!
//! assert_eq!(err.to_string(), "Login failed");
//! assert_eq!(detector.count(), 1);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{
    FanOutIntrusionDetector, LoggingIntrusionDetector, RecordedException,
    RecordingIntrusionDetector,
};
pub use domain::{PendingException, SecurityErrorKind, SecurityException, Severity};
pub use ports::IntrusionDetector;
pub use service::ExceptionReporter;
