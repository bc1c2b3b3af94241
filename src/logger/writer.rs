//! Append-only log file writer

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PetError, PetResult};

use super::entry::{LogEntry, Severity};

/// Writes log entries to the log file
///
/// The file is opened in append mode for every entry and closed again, so a
/// crash never leaves a partially buffered log behind.
#[derive(Debug, Clone)]
pub struct Logger {
    log_path: PathBuf,
}

impl Logger {
    /// Create a Logger that appends to the given path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log a message, reporting failures on stderr only
    pub fn log(&self, message: impl Into<String>, severity: Severity) {
        let entry = LogEntry::new(message, severity);
        if let Err(e) = self.write_entry(&entry) {
            eprintln!("Error writing to log file: {}", e);
        }
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.log(message, Severity::Warning);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(message, Severity::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(message, Severity::Information);
    }

    /// Log a message and return any write failure to the caller
    pub fn try_log(&self, message: impl Into<String>, severity: Severity) -> PetResult<()> {
        self.write_entry(&LogEntry::new(message, severity))
    }

    fn write_entry(&self, entry: &LogEntry) -> PetResult<()> {
        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    PetError::Io(format!(
                        "Failed to create log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| PetError::Io(format!("Failed to open log file: {}", e)))?;

        writeln!(file, "{}", entry)
            .map_err(|e| PetError::Io(format!("Failed to write log entry: {}", e)))?;

        file.flush()
            .map_err(|e| PetError::Io(format!("Failed to flush log file: {}", e)))?;

        Ok(())
    }

    /// Get the path to the log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
