//! Core data models for PET
//!
//! The budget is a plain `f64` handled by `storage::budget`; expense
//! records carry their own validation.

pub mod expense;

pub use expense::{Expense, ExpenseValidationError};
