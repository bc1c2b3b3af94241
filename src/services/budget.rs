//! Budget comparison
//!
//! Compares accumulated spending against the budget. Display-only: nothing
//! here changes stored state.

use std::fmt;

/// Where total spending stands relative to the budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    /// Budget not exceeded; holds the amount still available
    Remaining(f64),
    /// Budget exceeded; holds the amount over budget
    Overspent(f64),
}

impl BudgetStatus {
    /// The absolute difference between budget and spending
    pub fn amount(&self) -> f64 {
        match self {
            Self::Remaining(amount) | Self::Overspent(amount) => *amount,
        }
    }

    /// Short label used in the header banner
    pub fn label(&self) -> &'static str {
        match self {
            Self::Remaining(_) => "Remaining",
            Self::Overspent(_) => "Overspend",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining(amount) => write!(f, "You have {:.2} left in your budget", amount),
            Self::Overspent(amount) => write!(f, "You have exceeded your budget by {:.2}", amount),
        }
    }
}

/// Compare the budget with total spending
pub fn compare_budget(budget: f64, total: f64) -> BudgetStatus {
    let difference = budget - total;
    if difference < 0.0 {
        BudgetStatus::Overspent(-difference)
    } else {
        BudgetStatus::Remaining(difference)
    }
}
