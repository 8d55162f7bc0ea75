//! Fault families and their log severity.

use std::fmt;

/// How loudly a detector should log an exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Family of a security fault.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SecurityErrorKind {
    /// Caller lacks permission for the resource or action.
    AccessControl,
    /// Identity could not be established.
    Authentication,
    /// A resource was exhausted or refused service.
    Availability,
    /// Input could not be canonicalized or decoded.
    Encoding,
    /// A cryptographic operation failed.
    Encryption,
    /// Data was tampered with or failed a checksum.
    Integrity,
    /// Activity looks like an attack in progress.
    Intrusion,
    /// Input failed validation.
    Validation,
    /// Anything else.
    #[default]
    General,
}

impl SecurityErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [SecurityErrorKind; 9] = [
        SecurityErrorKind::AccessControl,
        SecurityErrorKind::Authentication,
        SecurityErrorKind::Availability,
        SecurityErrorKind::Encoding,
        SecurityErrorKind::Encryption,
        SecurityErrorKind::Integrity,
        SecurityErrorKind::Intrusion,
        SecurityErrorKind::Validation,
        SecurityErrorKind::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityErrorKind::AccessControl => "access_control",
            SecurityErrorKind::Authentication => "authentication",
            SecurityErrorKind::Availability => "availability",
            SecurityErrorKind::Encoding => "encoding",
            SecurityErrorKind::Encryption => "encryption",
            SecurityErrorKind::Integrity => "integrity",
            SecurityErrorKind::Intrusion => "intrusion",
            SecurityErrorKind::Validation => "validation",
            SecurityErrorKind::General => "general",
        }
    }

    /// Log weight for this family.
    pub fn severity(&self) -> Severity {
        match self {
            SecurityErrorKind::Intrusion => Severity::Critical,
            SecurityErrorKind::AccessControl
            | SecurityErrorKind::Authentication
            | SecurityErrorKind::Integrity => Severity::High,
            SecurityErrorKind::Encryption | SecurityErrorKind::Availability => Severity::Medium,
            SecurityErrorKind::Encoding
            | SecurityErrorKind::Validation
            | SecurityErrorKind::General => Severity::Low,
        }
    }
}

impl fmt::Display for SecurityErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
