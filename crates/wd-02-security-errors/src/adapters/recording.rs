//! In-memory detector.

use parking_lot::Mutex;

use crate::domain::{SecurityErrorKind, SecurityException, Severity};
use crate::ports::IntrusionDetector;

/// Snapshot of one reported exception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedException {
    pub kind: SecurityErrorKind,
    pub severity: Severity,
    pub user_message: String,
    pub log_message: String,
    pub has_cause: bool,
}

impl From<&SecurityException> for RecordedException {
    fn from(e: &SecurityException) -> Self {
        Self {
            kind: e.kind(),
            severity: e.severity(),
            user_message: e.user_message().to_string(),
            log_message: e.log_message().to_string(),
            has_cause: e.cause().is_some(),
        }
    }
}

/// Thread-safe detector that keeps every report in order.
#[derive(Debug, Default)]
pub struct RecordingIntrusionDetector {
    records: Mutex<Vec<RecordedException>>,
}

impl RecordingIntrusionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of exceptions reported so far.
    pub fn count(&self) -> usize {
        self.records.lock().len()
    }

    /// Number of reports of the given kind.
    pub fn count_of(&self, kind: SecurityErrorKind) -> usize {
        self.records.lock().iter().filter(|r| r.kind == kind).count()
    }

    /// Copy of every report, oldest first.
    pub fn recorded(&self) -> Vec<RecordedException> {
        self.records.lock().clone()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl IntrusionDetector for RecordingIntrusionDetector {
    fn record_exception(&self, exception: &SecurityException) {
        let record = RecordedException::from(exception);
        self.records.lock().push(record);
    }
}
