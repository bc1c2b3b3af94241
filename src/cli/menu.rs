//! Main menu choices

use std::fmt;
use std::str::FromStr;

/// One of the five main menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    TrackBudget,
    SaveExpenses,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewExpenses,
        MenuChoice::TrackBudget,
        MenuChoice::SaveExpenses,
        MenuChoice::Exit,
    ];

    /// The key the user types to select this choice
    pub fn key(&self) -> &'static str {
        match self {
            Self::AddExpense => "1",
            Self::ViewExpenses => "2",
            Self::TrackBudget => "3",
            Self::SaveExpenses => "4",
            Self::Exit => "5",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddExpense => write!(f, "Add Expense"),
            Self::ViewExpenses => write!(f, "View Expenses"),
            Self::TrackBudget => write!(f, "Track Budget"),
            Self::SaveExpenses => write!(f, "Save Expenses"),
            Self::Exit => write!(f, "Exit"),
        }
    }
}

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == s)
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

/// Input that does not match any menu key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

impl fmt::Display for UnknownChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown menu choice: {}", self.0)
    }
}

impl std::error::Error for UnknownChoice {}

/// Render the numbered menu
pub fn format_menu() -> String {
    MenuChoice::ALL
        .iter()
        .map(|choice| format!("\t {} - {}\n\n", choice.key(), choice))
        .collect()
}
