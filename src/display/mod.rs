//! Display formatting for terminal output
//!
//! Pure string builders for the banner, borders, and expense listings. The
//! interactive layer decides where the strings are written.

pub mod banner;
pub mod expense;

pub use banner::{format_border, format_header, format_title};
pub use expense::{format_expense_row, format_expense_table};
