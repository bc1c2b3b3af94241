//! Storage layer for PET
//!
//! Plain-text persistence for the expense records and the budget value.
//! Both follow a fail-open policy: missing or malformed data is logged and
//! replaced by an empty or zero default, never surfaced as a hard error.

pub mod budget;
pub mod expenses;
pub mod file_io;

pub use budget::{load_budget, save_budget};
pub use expenses::{
    format_line, load_expenses, parse_line, save_expenses, LineOutcome, LoadedExpenses,
    RejectReason,
};
pub use file_io::{read_text_optional, write_text_atomic};

use crate::config::paths::PetPaths;
use crate::error::{PetError, PetResult};
use crate::logger::Logger;
use crate::models::Expense;

/// Storage coordinator binding the configured paths to a logger
pub struct Storage {
    paths: PetPaths,
    logger: Logger,
}

impl Storage {
    /// Create a new Storage instance, creating the data and log directories
    pub fn new(paths: PetPaths) -> Result<Self, PetError> {
        paths.ensure_directories()?;

        Ok(Self {
            logger: Logger::new(paths.log_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PetPaths {
        &self.paths
    }

    /// Get the logger used for storage diagnostics
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn load_expenses(&self) -> LoadedExpenses {
        load_expenses(&self.paths.expenses_file(), &self.logger)
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> PetResult<()> {
        save_expenses(expenses, &self.paths.expenses_file(), &self.logger)
    }

    pub fn load_budget(&self) -> f64 {
        load_budget(&self.paths.budget_file(), &self.logger)
    }

    pub fn save_budget(&self, budget: f64) -> PetResult<()> {
        save_budget(budget, &self.paths.budget_file(), &self.logger)
    }
}
