//! Audit log entries and event classification.
//!
//! The backend reports most log rows with a free-text `event` field only.
//! Newer endpoints attach typed `kind`/`severity` fields; those win whenever
//! present and the substring heuristics below are the documented fallback,
//! applied once when the entry is mapped for display.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Access,
    Activity,
    System,
    Auth,
    Error,
}

impl LogKind {
    pub const ALL: [LogKind; 5] = [
        LogKind::Access,
        LogKind::Activity,
        LogKind::System,
        LogKind::Auth,
        LogKind::Error,
    ];
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogSeverity {
    Info,
    Warning,
    Error,
    Success,
}

impl LogSeverity {
    pub const ALL: [LogSeverity; 4] = [
        LogSeverity::Info,
        LogSeverity::Warning,
        LogSeverity::Error,
        LogSeverity::Success,
    ];
}

/// A single audit/activity log row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub event: String,
    pub kind: Option<LogKind>,
    pub severity: Option<LogSeverity>,
    pub actor: Option<String>,
    pub ip: Option<String>,
}

impl LogEntry {
    /// Kind reported by the backend, or classified from the event text.
    pub fn resolved_kind(&self) -> LogKind {
        self.kind.unwrap_or_else(|| classify_event(&self.event).0)
    }

    /// Severity reported by the backend, or classified from the event text.
    pub fn resolved_severity(&self) -> LogSeverity {
        self.severity
            .unwrap_or_else(|| classify_event(&self.event).1)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Derives (kind, severity) from a free-text event description.
///
/// Matching is case-insensitive and ordered: error markers take precedence,
/// then authentication events, mutations, reads, and finally a system/info
/// default. Any input yields a defined classification.
pub fn classify_event(event: &str) -> (LogKind, LogSeverity) {
    let text = event.to_lowercase();

    if contains_any(&text, &["error", "exception", "fatal", "panic"]) {
        return (LogKind::Error, LogSeverity::Error);
    }
    if contains_any(&text, &["login", "logout", "sign-in", "signin", "password", "session"]) {
        let severity = if contains_any(&text, &["fail", "denied", "invalid", "expired"]) {
            LogSeverity::Warning
        } else {
            LogSeverity::Info
        };
        return (LogKind::Auth, severity);
    }
    if contains_any(&text, &["fail", "denied", "rejected", "timeout"]) {
        return (LogKind::System, LogSeverity::Warning);
    }
    if contains_any(&text, &["created", "updated", "deleted", "signed", "uploaded", "approved"]) {
        return (LogKind::Activity, LogSeverity::Success);
    }
    if contains_any(&text, &["viewed", "accessed", "downloaded", "exported", "listed"]) {
        return (LogKind::Access, LogSeverity::Info);
    }

    (LogKind::System, LogSeverity::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_covers_the_taxonomy() {
        assert_eq!(
            classify_event("Database error while saving contract"),
            (LogKind::Error, LogSeverity::Error)
        );
        assert_eq!(
            classify_event("User login from new device"),
            (LogKind::Auth, LogSeverity::Info)
        );
        assert_eq!(
            classify_event("Login failed: wrong credentials"),
            (LogKind::Auth, LogSeverity::Warning)
        );
        assert_eq!(
            classify_event("Contract signed by tenant"),
            (LogKind::Activity, LogSeverity::Success)
        );
        assert_eq!(
            classify_event("Report exported to CSV"),
            (LogKind::Access, LogSeverity::Info)
        );
        assert_eq!(
            classify_event("Scheduled maintenance window"),
            (LogKind::System, LogSeverity::Info)
        );
    }

    #[test]
    fn typed_fields_win_over_classification() {
        let entry = LogEntry {
            id: 1,
            timestamp: Utc::now(),
            event: "Login failed".into(),
            kind: Some(LogKind::System),
            severity: Some(LogSeverity::Error),
            actor: None,
            ip: None,
        };
        assert_eq!(entry.resolved_kind(), LogKind::System);
        assert_eq!(entry.resolved_severity(), LogSeverity::Error);
    }

    #[test]
    fn untyped_entries_are_classified() {
        let entry = LogEntry {
            id: 2,
            timestamp: Utc::now(),
            event: "Tenant viewed property listing".into(),
            kind: None,
            severity: None,
            actor: None,
            ip: None,
        };
        assert_eq!(entry.resolved_kind(), LogKind::Access);
        assert_eq!(entry.resolved_severity(), LogSeverity::Info);
    }
}
