//! Business logic layer
//!
//! Sits between the storage layer and the interactive menu.

pub mod budget;
pub mod ledger;

pub use budget::{compare_budget, BudgetStatus};
pub use ledger::ExpenseLedger;
