//! Core types for the diagnostic model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a check finding.
///
/// A `Warning` flags a best-practice deviation; an `Error` flags structurally
/// invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Structurally invalid input that must be fixed.
    Error,
    /// Best-practice deviation that should be addressed.
    #[default]
    Warning,
}

impl Severity {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single finding produced by a check.
///
/// Diagnostics are immutable once created. Two diagnostics are equal iff
/// severity, message, and originating check all match, which lets tests
/// compare results as sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity of the finding.
    pub severity: Severity,
    /// A human-readable message describing the finding.
    pub message: String,
    /// The name of the check that produced this finding.
    pub check: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(severity: Severity, check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            check: check.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, check, message)
    }

    /// Create an error diagnostic.
    pub fn error(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, check, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.check, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_severity_serialization() {
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(
            serde_json::from_str::<Severity>("\"error\"").unwrap(),
            Severity::Error
        );
    }

    #[test]
    fn test_diagnostic_equality() {
        let a = Diagnostic::warning("some-check", "message");
        let b = Diagnostic::warning("some-check", "message");
        assert_eq!(a, b);

        let c = Diagnostic::error("some-check", "message");
        assert_ne!(a, c);

        let d = Diagnostic::warning("other-check", "message");
        assert_ne!(a, d);
    }

    #[test]
    fn test_diagnostic_in_set() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Diagnostic::warning("some-check", "message"));
        set.insert(Diagnostic::warning("some-check", "message"));
        assert_eq!(set.len(), 1);
    }
}
