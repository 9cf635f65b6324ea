//! Severity classification for misplaced rooms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a room's placement verdict is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Moderate,
    Minor,
    Compliant,
}

impl Severity {
    /// Returns the wire label for this severity.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Moderate => "moderate",
            Severity::Minor => "minor",
            Severity::Compliant => "compliant",
        }
    }

    /// True for any non-compliant classification.
    pub fn is_issue(&self) -> bool {
        !matches!(self, Severity::Compliant)
    }

    /// Prefix used when rendering a misplacement message.
    pub fn message_prefix(&self) -> &'static str {
        match self {
            Severity::Critical => "🚨 CRITICAL: ",
            Severity::Moderate => "⚠️ ",
            Severity::Minor => "ℹ️ ",
            Severity::Compliant => "",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliant_is_not_an_issue() {
        assert!(!Severity::Compliant.is_issue());
        assert!(Severity::Critical.is_issue());
        assert!(Severity::Moderate.is_issue());
        assert!(Severity::Minor.is_issue());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&Severity::Compliant).unwrap(),
            "\"compliant\""
        );
    }

    #[test]
    fn critical_prefix_is_loud() {
        assert!(Severity::Critical.message_prefix().contains("CRITICAL"));
        assert_eq!(Severity::Compliant.message_prefix(), "");
    }
}
