//! Security exception base.
//!
//! Fields are private and every public constructor reports to an
//! `IntrusionDetector` before returning, so a `SecurityException` in hand
//! has always been recorded exactly once.

use std::error::Error;

use thiserror::Error;

use super::kind::{SecurityErrorKind, Severity};
use crate::ports::IntrusionDetector;

type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Security-relevant fault with separate user and log messages.
///
/// `Display` renders the user message only.
#[derive(Debug, Error)]
#[error("{user_message}")]
pub struct SecurityException {
    kind: SecurityErrorKind,
    user_message: String,
    log_message: String,
    #[source]
    cause: Option<Cause>,
}

impl SecurityException {
    /// Build and report an exception.
    pub fn new(
        detector: &dyn IntrusionDetector,
        kind: SecurityErrorKind,
        user_message: impl Into<String>,
        log_message: impl Into<String>,
    ) -> Self {
        Self::bare(kind)
            .with_user_message(user_message)
            .with_log_message(log_message)
            .report(detector)
    }

    /// Build and report an exception wrapping an underlying error.
    pub fn with_cause(
        detector: &dyn IntrusionDetector,
        kind: SecurityErrorKind,
        user_message: impl Into<String>,
        log_message: impl Into<String>,
        cause: impl Into<Cause>,
    ) -> Self {
        Self::bare(kind)
            .with_user_message(user_message)
            .with_log_message(log_message)
            .with_cause(cause)
            .report(detector)
    }

    /// Start an exception without reporting it.
    ///
    /// Used where no detector exists yet, such as while the detector itself
    /// is being bootstrapped. The draft becomes a `SecurityException` only
    /// through [`PendingException::report`].
    pub fn deferred(kind: SecurityErrorKind) -> PendingException {
        Self::bare(kind)
    }

    fn bare(kind: SecurityErrorKind) -> PendingException {
        PendingException {
            inner: SecurityException {
                kind,
                user_message: String::new(),
                log_message: String::new(),
                cause: None,
            },
        }
    }

    /// Category the detector records.
    pub fn kind(&self) -> SecurityErrorKind {
        self.kind
    }

    /// Severity implied by [`Self::kind`].
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Message safe to show the end user.
    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// Detailed message for the security log.
    pub fn log_message(&self) -> &str {
        &self.log_message
    }

    /// Underlying error, also exposed through [`Error::source`].
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// An exception that has not reached a detector yet.
#[derive(Debug)]
#[must_use = "a pending exception is only raised once reported"]
pub struct PendingException {
    inner: SecurityException,
}

impl PendingException {
    /// Set the message safe to show the end user.
    pub fn with_user_message(mut self, message: impl Into<String>) -> Self {
        self.inner.user_message = message.into();
        self
    }

    /// Set the detailed message for the security log.
    pub fn with_log_message(mut self, message: impl Into<String>) -> Self {
        self.inner.log_message = message.into();
        self
    }

    /// Attach the error that triggered this exception.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.inner.cause = Some(cause.into());
        self
    }

    /// Category the exception will be recorded under.
    pub fn kind(&self) -> SecurityErrorKind {
        self.inner.kind
    }

    /// Record with `detector` and release the exception.
    pub fn report(self, detector: &dyn IntrusionDetector) -> SecurityException {
        detector.record_exception(&self.inner);
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingIntrusionDetector;
    use proptest::prelude::*;
    use std::io;

    #[test]
    fn test_new_reports_exactly_once() {
        let detector = RecordingIntrusionDetector::new();
        let err = SecurityException::new(
            &detector,
            SecurityErrorKind::AccessControl,
            "Access denied",
            "user 42 requested /admin without role ADMIN",
        );

        assert_eq!(detector.count(), 1);
        let recorded = detector.recorded();
        assert_eq!(recorded[0].kind, SecurityErrorKind::AccessControl);
        assert_eq!(recorded[0].user_message, err.user_message());
        assert_eq!(recorded[0].log_message, err.log_message());
    }

    #[test]
    fn test_messages_not_conflated() {
        let detector = RecordingIntrusionDetector::new();
        let err = SecurityException::new(
            &detector,
            SecurityErrorKind::Validation,
            "Invalid input",
            "field 'age' = '-1; DROP TABLE'",
        );

        assert_eq!(err.user_message(), "Invalid input");
        assert_eq!(err.log_message(), "field 'age' = '-1; DROP TABLE'");
        assert_eq!(err.to_string(), "Invalid input");
        assert!(!format!("{err}").contains("DROP"));
    }

    #[test]
    fn test_empty_messages_allowed() {
        let detector = RecordingIntrusionDetector::new();
        let err = SecurityException::new(&detector, SecurityErrorKind::General, "", "");
        assert_eq!(err.user_message(), "");
        assert_eq!(err.log_message(), "");
        assert_eq!(detector.count(), 1);
    }

    #[test]
    fn test_cause_is_source() {
        let detector = RecordingIntrusionDetector::new();
        let err = SecurityException::with_cause(
            &detector,
            SecurityErrorKind::Integrity,
            "Request rejected",
            "HMAC mismatch on session cookie",
            io::Error::new(io::ErrorKind::InvalidData, "bad mac"),
        );

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "bad mac");
        assert!(err.cause().is_some());
        assert_eq!(detector.count(), 1);
        assert!(detector.recorded()[0].has_cause);
    }

    #[test]
    fn test_no_cause_has_no_source() {
        let detector = RecordingIntrusionDetector::new();
        let err = SecurityException::new(&detector, SecurityErrorKind::General, "a", "b");
        assert!(err.source().is_none());
        assert!(err.cause().is_none());
    }

    #[test]
    fn test_severity_follows_kind() {
        let detector = RecordingIntrusionDetector::new();
        let err = SecurityException::new(&detector, SecurityErrorKind::Intrusion, "a", "b");
        assert_eq!(err.severity(), Severity::Critical);
    }

    #[test]
    fn test_deferred_not_recorded_until_reported() {
        let detector = RecordingIntrusionDetector::new();
        let pending = SecurityException::deferred(SecurityErrorKind::Availability)
            .with_user_message("Service unavailable")
            .with_log_message("detector not ready");

        assert_eq!(pending.kind(), SecurityErrorKind::Availability);
        assert_eq!(detector.count(), 0);

        let err = pending.report(&detector);
        assert_eq!(detector.count(), 1);
        assert_eq!(err.user_message(), "Service unavailable");
        assert_eq!(err.log_message(), "detector not ready");
    }

    #[test]
    fn test_deferred_with_cause_keeps_source() {
        let detector = RecordingIntrusionDetector::new();
        let err = SecurityException::deferred(SecurityErrorKind::Integrity)
            .with_cause(io::Error::new(io::ErrorKind::InvalidData, "bad mac"))
            .report(&detector);

        assert_eq!(err.kind(), SecurityErrorKind::Integrity);
        assert_eq!(err.severity(), SecurityErrorKind::Integrity.severity());
        assert_eq!(err.cause().map(|c| c.to_string()), Some("bad mac".into()));
        assert!(detector.recorded()[0].has_cause);
    }

    #[test]
    fn test_deferred_dropped_is_never_recorded() {
        let detector = RecordingIntrusionDetector::new();
        drop(SecurityException::deferred(SecurityErrorKind::General));
        assert_eq!(detector.count(), 0);
    }

    #[test]
    fn test_propagation_does_not_rereport() {
        fn inner(detector: &RecordingIntrusionDetector) -> Result<(), SecurityException> {
            Err(SecurityException::new(
                detector,
                SecurityErrorKind::Authentication,
                "Login failed",
                "bad password",
            ))
        }

        fn outer(detector: &RecordingIntrusionDetector) -> Result<(), SecurityException> {
            inner(detector)?;
            Ok(())
        }

        let detector = RecordingIntrusionDetector::new();
        assert!(outer(&detector).is_err());
        assert_eq!(detector.count(), 1);
    }

    proptest! {
        #[test]
        fn prop_messages_round_trip(user in ".*", log in ".*") {
            let detector = RecordingIntrusionDetector::new();
            let err = SecurityException::new(
                &detector,
                SecurityErrorKind::General,
                user.clone(),
                log.clone(),
            );
            prop_assert_eq!(err.user_message(), user.as_str());
            prop_assert_eq!(err.log_message(), log.as_str());
            prop_assert_eq!(err.to_string(), user);
            prop_assert_eq!(detector.count(), 1);
        }
    }
}
