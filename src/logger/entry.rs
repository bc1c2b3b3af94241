//! Log entry data structures

use chrono::{DateTime, Local};
use std::fmt;

/// Timestamp layout written at the start of every log line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
    Information,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Information => write!(f, "INFORMATION"),
        }
    }
}

/// A single log line
///
/// Rendered as `<timestamp>: <SEVERITY>: <message>`.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// When the entry was created (local time)
    pub timestamp: DateTime<Local>,

    pub severity: Severity,

    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.severity,
            self.message
        )
    }
}
