//! Detector that writes every report to the log.

use warden_telemetry::security_event;

use crate::domain::{SecurityException, Severity};
use crate::ports::IntrusionDetector;

const MODULE: &str = "IntrusionDetector";

/// Logs each exception's log message on the `security` target.
///
/// | Severity | Level |
/// |----------|-------|
/// | Critical, High | `error` |
/// | Medium | `warn` |
/// | Low | `info` |
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingIntrusionDetector;

impl LoggingIntrusionDetector {
    pub fn new() -> Self {
        Self
    }
}

impl IntrusionDetector for LoggingIntrusionDetector {
    fn record_exception(&self, exception: &SecurityException) {
        let kind = exception.kind();
        let severity = exception.severity();
        let message = exception.log_message();

        match severity {
            Severity::Critical | Severity::High => security_event!(
                error,
                MODULE,
                "Security exception recorded",
                kind = %kind,
                severity = %severity,
                detail = %message
            ),
            Severity::Medium => security_event!(
                warn,
                MODULE,
                "Security exception recorded",
                kind = %kind,
                severity = %severity,
                detail = %message
            ),
            Severity::Low => security_event!(
                info,
                MODULE,
                "Security exception recorded",
                kind = %kind,
                severity = %severity,
                detail = %message
            ),
        }
    }
}
