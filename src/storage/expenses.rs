//! Expense file persistence
//!
//! The expense file holds one record per line as
//! `date,category,amount,description`, with no header and no quoting. Loading
//! is parse-or-skip: each line is either accepted as an [`Expense`] or
//! rejected with a reason, and a rejected line never aborts the load.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::PetResult;
use crate::logger::Logger;
use crate::models::Expense;
use crate::validate::{parse_amount, parse_date};

use super::file_io::write_text_atomic;

/// Number of comma-separated fields in a record line
pub const FIELD_COUNT: usize = 4;

/// Result of parsing one line of the expense file
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Accepted(Expense),
    Rejected(RejectReason),
}

/// Why a line of the expense file was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    FieldCount(usize),
    InvalidDate(String),
    EmptyCategory,
    InvalidAmount(String),
    EmptyDescription,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected {} fields, found {}", FIELD_COUNT, n),
            Self::InvalidDate(s) => write!(f, "invalid date '{}'", s),
            Self::EmptyCategory => write!(f, "empty category"),
            Self::InvalidAmount(s) => write!(f, "invalid amount '{}'", s),
            Self::EmptyDescription => write!(f, "empty description"),
        }
    }
}

/// Parse a single record line
pub fn parse_line(line: &str) -> LineOutcome {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();

    let [date, category, amount, description] = fields.as_slice() else {
        return LineOutcome::Rejected(RejectReason::FieldCount(fields.len()));
    };

    let Some(date) = parse_date(date) else {
        return LineOutcome::Rejected(RejectReason::InvalidDate(date.to_string()));
    };
    if category.is_empty() {
        return LineOutcome::Rejected(RejectReason::EmptyCategory);
    }
    let Some(amount) = parse_amount(amount) else {
        return LineOutcome::Rejected(RejectReason::InvalidAmount(amount.to_string()));
    };
    if description.is_empty() {
        return LineOutcome::Rejected(RejectReason::EmptyDescription);
    }

    LineOutcome::Accepted(Expense {
        date,
        category: category.to_string(),
        amount,
        description: description.to_string(),
    })
}

/// Render an expense as a record line (without the trailing newline)
///
/// Amounts use the shortest representation that parses back to the same value.
pub fn format_line(expense: &Expense) -> String {
    format!(
        "{},{},{},{}",
        expense.date_string(),
        expense.category,
        expense.amount,
        expense.description
    )
}

/// Records read from the expense file and the sum of their amounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedExpenses {
    pub expenses: Vec<Expense>,
    pub total: f64,
}

impl LoadedExpenses {
    fn push(&mut self, expense: Expense) {
        self.total += expense.amount;
        self.expenses.push(expense);
    }
}

/// Load expenses from the expense file
///
/// Never fails: a missing file is logged as a warning and yields no records,
/// malformed lines are logged as errors and skipped.
pub fn load_expenses(path: &Path, logger: &Logger) -> LoadedExpenses {
    let mut loaded = LoadedExpenses::default();

    if !path.exists() {
        logger.warning(format!("File not found - {}", path.display()));
        return loaded;
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            logger.error(format!("Failed to open {}: {}", path.display(), e));
            return loaded;
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(e) => {
                logger.error(format!(
                    "Failed to read line {} in {}: {}",
                    line_number + 1,
                    path.display(),
                    e
                ));
                break;
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                logger.error(format!(
                    "Invalid data at line {} in {}: {} ({})",
                    line_number,
                    path.display(),
                    String::from_utf8_lossy(&buf).trim(),
                    e
                ));
                continue;
            }
        };

        match parse_line(line) {
            LineOutcome::Accepted(expense) => loaded.push(expense),
            LineOutcome::Rejected(reason) => logger.error(format!(
                "Invalid data at line {} in {}: {} ({})",
                line_number,
                path.display(),
                line.trim(),
                reason
            )),
        }
    }

    loaded
}

/// Overwrite the expense file with the given records
///
/// Failures are logged and returned; nothing is retried.
pub fn save_expenses(expenses: &[Expense], path: &Path, logger: &Logger) -> PetResult<()> {
    let contents: String = expenses
        .iter()
        .map(|expense| format_line(expense) + "\n")
        .collect();

    write_text_atomic(path, &contents).map_err(|e| {
        logger.error(format!("Error saving expenses: {}", e));
        e
    })
}
