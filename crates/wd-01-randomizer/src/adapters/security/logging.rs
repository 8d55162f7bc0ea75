//! Security Logger Adapters

use parking_lot::Mutex;
use warden_telemetry::security_event;

use crate::ports::SecurityLogger;

/// Security logger writing to the `security` tracing target.
///
/// `tracing` has no critical level; critical events are emitted at `ERROR`
/// with `severity = "CRITICAL"`.
#[derive(Debug, Clone)]
pub struct TracingSecurityLogger {
    module: String,
}

impl TracingSecurityLogger {
    /// Create a logger tagging every event with `module`.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }

    /// Module name attached to events.
    pub fn module(&self) -> &str {
        &self.module
    }
}

impl Default for TracingSecurityLogger {
    fn default() -> Self {
        Self::new("Randomizer")
    }
}

impl SecurityLogger for TracingSecurityLogger {
    fn log_critical(&self, message: &str) {
        security_event!(
            error,
            self.module.as_str(),
            "Critical security event",
            severity = "CRITICAL",
            detail = %message
        );
    }
}

/// In-memory security logger that keeps every critical message.
#[derive(Debug, Default)]
pub struct MemorySecurityLogger {
    entries: Mutex<Vec<String>>,
}

impl MemorySecurityLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages logged so far, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Number of messages logged so far.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl SecurityLogger for MemorySecurityLogger {
    fn log_critical(&self, message: &str) {
        self.entries.lock().push(message.to_string());
    }
}
