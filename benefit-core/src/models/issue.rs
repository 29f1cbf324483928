use serde::{Deserialize, Serialize};

/// How serious a validation finding is.
///
/// `Ord` follows escalation order: `Warning < Error < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Advisory only; does not block computation.
    Warning,
    /// Missing required data; the record needs attention before
    /// a report can be finalised.
    Error,
    /// Logically impossible data or a calculation defect; always
    /// requires manual review.
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

/// A single finding from the validation engine.
///
/// The engine only flags; it never remediates. Issues are collected
/// and returned, not thrown, so callers can show provisional figures
/// alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The record field the finding concerns.
    pub field: String,

    /// Human-readable description of the problem.
    pub issue: String,

    pub severity: Severity,

    /// Whether a human reviewer must clear this finding before the
    /// report can be finalised.
    pub requires_manual_review: bool,
}

impl ValidationIssue {
    pub fn warning(field: &str, issue: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            issue: issue.into(),
            severity: Severity::Warning,
            requires_manual_review: false,
        }
    }

    pub fn error(field: &str, issue: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            issue: issue.into(),
            severity: Severity::Error,
            requires_manual_review: true,
        }
    }

    pub fn critical(field: &str, issue: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            issue: issue.into(),
            severity: Severity::Critical,
            requires_manual_review: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn severity_orders_by_escalation() {
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn critical_constructor_forces_manual_review() {
        let issue = ValidationIssue::critical("office_area_sqm", "office exceeds home");

        assert_eq!(issue.severity, Severity::Critical);
        assert!(issue.requires_manual_review);
    }

    #[test]
    fn warning_constructor_does_not_require_review() {
        let issue = ValidationIssue::warning("utilities", "missing line item");

        assert!(!issue.requires_manual_review);
    }
}
