//! Exception Reporter
//!
//! Holds the shared detector so call sites raise exceptions without
//! threading it through every signature.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::domain::{PendingException, SecurityErrorKind, SecurityException};
use crate::ports::IntrusionDetector;

/// Factory for reported `SecurityException`s.
#[derive(Clone)]
pub struct ExceptionReporter {
    detector: Arc<dyn IntrusionDetector>,
}

impl ExceptionReporter {
    pub fn new(detector: Arc<dyn IntrusionDetector>) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &Arc<dyn IntrusionDetector> {
        &self.detector
    }

    /// Build and report an exception.
    pub fn raise(
        &self,
        kind: SecurityErrorKind,
        user_message: impl Into<String>,
        log_message: impl Into<String>,
    ) -> SecurityException {
        SecurityException::new(self.detector.as_ref(), kind, user_message, log_message)
    }

    /// Build and report an exception wrapping `cause`.
    pub fn raise_with_cause(
        &self,
        kind: SecurityErrorKind,
        user_message: impl Into<String>,
        log_message: impl Into<String>,
        cause: impl Into<Box<dyn Error + Send + Sync + 'static>>,
    ) -> SecurityException {
        SecurityException::with_cause(
            self.detector.as_ref(),
            kind,
            user_message,
            log_message,
            cause,
        )
    }

    /// Report a draft built earlier with [`SecurityException::deferred`].
    pub fn report(&self, pending: PendingException) -> SecurityException {
        pending.report(self.detector.as_ref())
    }
}

impl fmt::Debug for ExceptionReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionReporter").finish_non_exhaustive()
    }
}
