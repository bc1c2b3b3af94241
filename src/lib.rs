//! PET - Personal Expense Tracker
//!
//! This library provides the core functionality for the `pet` command-line
//! tool: recording dated expenses, persisting them to a flat text file, and
//! comparing total spending against a budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and display settings
//! - `error`: Custom error types
//! - `validate`: Date and amount validation
//! - `models`: The expense record
//! - `storage`: Plain-text persistence for expenses and the budget
//! - `logger`: Append-only diagnostic log
//! - `services`: In-memory ledger and budget comparison
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu session
//!
//! # Example
//!
//! ```rust,no_run
//! use pet_cli::config::PetPaths;
//! use pet_cli::storage::Storage;
//!
//! # fn main() -> Result<(), pet_cli::PetError> {
//! let paths = PetPaths::new()?;
//! let storage = Storage::new(paths)?;
//! let loaded = storage.load_expenses();
//! println!("{} expenses totalling {:.2}", loaded.expenses.len(), loaded.total);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod storage;
pub mod validate;

pub use error::{PetError, PetResult};
