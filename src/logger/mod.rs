//! Diagnostic logging for PET
//!
//! Warnings about missing files, rejected expense lines, and the outcome of
//! budget saves are appended to a plain-text log that the program never reads
//! back. Writing the log must never interrupt the user, so failures are
//! reported on stderr and otherwise ignored.

pub mod entry;
pub mod writer;

pub use entry::{LogEntry, Severity};
pub use writer::Logger;
