//! In-memory expense ledger
//!
//! Holds the records for the lifetime of a session together with their
//! running total and a dirty flag marking additions not yet written to disk.

use crate::error::PetResult;
use crate::models::Expense;
use crate::storage::{LoadedExpenses, Storage};

/// Ordered, append-only collection of expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    total: f64,
    dirty: bool,
}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a clean ledger from records read off disk
    pub fn from_loaded(loaded: LoadedExpenses) -> Self {
        Self {
            expenses: loaded.expenses,
            total: loaded.total,
            dirty: false,
        }
    }

    /// Append an expense and mark the ledger as having unsaved changes
    pub fn add(&mut self, expense: Expense) {
        self.total += expense.amount;
        self.expenses.push(expense);
        self.dirty = true;
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Whether there are additions not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write all records through storage; clears the dirty flag on success
    pub fn save(&mut self, storage: &Storage) -> PetResult<()> {
        storage.save_expenses(&self.expenses)?;
        self.dirty = false;
        Ok(())
    }

    /// Save only if there are unsaved additions
    ///
    /// Returns whether a save was performed.
    pub fn flush(&mut self, storage: &Storage) -> PetResult<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.save(storage)?;
        Ok(true)
    }
}
