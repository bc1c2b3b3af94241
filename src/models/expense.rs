//! Expense model
//!
//! A single dated expense entry. Records are created from user input or from
//! lines of the expense file and are never modified afterwards.

use chrono::NaiveDate;
use std::fmt;

use crate::validate::DATE_FORMAT;

/// A recorded expense
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Date the money was spent
    pub date: NaiveDate,

    /// Short label such as "Food" or "Travel"
    pub category: String,

    /// Amount spent, always greater than zero
    pub amount: f64,

    /// Free-text note
    pub description: String,
}

impl Expense {
    /// Create a new expense, validating every field
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<Self, ExpenseValidationError> {
        let expense = Self {
            date,
            category: category.into().trim().to_string(),
            amount,
            description: description.into().trim().to_string(),
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.description.is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        // An embedded comma would split into extra fields on reload
        if self.category.contains(',') {
            return Err(ExpenseValidationError::ContainsDelimiter("category"));
        }
        if self.description.contains(',') {
            return Err(ExpenseValidationError::ContainsDelimiter("description"));
        }

        Ok(())
    }

    /// The date as stored on disk (YYYY-MM-DD)
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {:.2} | {}",
            self.date_string(),
            self.category,
            self.amount,
            self.description
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    NonPositiveAmount(f64),
    EmptyDescription,
    ContainsDelimiter(&'static str),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}", amount)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::ContainsDelimiter(field) => {
                write!(f, "The {} field cannot contain a comma", field)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
