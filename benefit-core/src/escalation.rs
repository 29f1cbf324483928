//! Review escalation for validation findings.
//!
//! Validation itself is pure; this module is the orchestration layer
//! that turns a non-empty issue list into a single notification to a
//! role-based reviewer. Delivery is at-most-once and unconfirmed: a
//! failed attempt is logged and dropped, and callers needing
//! guaranteed delivery must add their own retry or outbox layer.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Severity, ValidationIssue};
use crate::validation::highest_severity;

/// The role the review request is addressed to. Resolving the role to
/// a person is the messaging collaborator's job.
pub const REVIEWER_ROLE: &str = "senior-reviewer";

/// Delivery failure reported by the messaging collaborator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotifyError {
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Message priority, derived from the worst severity present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical => Self::Urgent,
            Severity::Error => Self::High,
            Severity::Warning => Self::Normal,
        }
    }
}

/// The single operation the engine needs from the messaging
/// collaborator. Implementations must be thread-safe; the engine may
/// escalate from concurrent calculations.
pub trait Notifier: Send + Sync {
    fn notify(
        &self,
        recipient_role: &str,
        subject: &str,
        body: &str,
        priority: Priority,
    ) -> Result<(), NotifyError>;
}

/// Requests a human review of the given issues.
///
/// No-op for an empty list. Otherwise builds one message grouped by
/// severity and makes exactly one delivery attempt addressed to
/// [`REVIEWER_ROLE`]; a failure is logged and swallowed. Returns the
/// priority used, or `None` when nothing was sent.
pub fn escalate<N: Notifier + ?Sized>(
    notifier: &N,
    client_ref: &str,
    issues: &[ValidationIssue],
) -> Option<Priority> {
    let highest = highest_severity(issues)?;
    let priority = Priority::from_severity(highest);

    let subject = format!(
        "Review required for client {client_ref}: {} issue(s) found",
        issues.len()
    );
    let body = format_issue_report(client_ref, issues);

    match notifier.notify(REVIEWER_ROLE, &subject, &body, priority) {
        Ok(()) => {
            info!(
                client_ref,
                issues = issues.len(),
                priority = priority.as_str(),
                "review request sent"
            );
        }
        Err(error) => {
            // At-most-once: delivery problems belong to the collaborator.
            warn!(client_ref, %error, "review notification failed; not retrying");
        }
    }

    Some(priority)
}

/// Renders the issue list grouped by severity, worst first, with
/// per-group counts and an action-required footer.
fn format_issue_report(
    client_ref: &str,
    issues: &[ValidationIssue],
) -> String {
    let mut body = format!(
        "Validation findings for client {client_ref} ({}):\n",
        Utc::now().format("%Y-%m-%d")
    );

    for severity in [Severity::Critical, Severity::Error, Severity::Warning] {
        let group: Vec<&ValidationIssue> =
            issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        body.push_str(&format!("\n{} ({}):\n", severity.as_str(), group.len()));
        for issue in group {
            body.push_str(&format!("  - {}: {}\n", issue.field, issue.issue));
        }
    }

    body.push_str("\nAction required: review the findings above and clear or escalate them.\n");
    body
}
