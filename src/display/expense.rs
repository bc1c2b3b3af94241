//! Expense listing formatting
//!
//! Renders the fixed-width, comma-separated listing shown by the view menu
//! option.

use crate::config::Settings;
use crate::models::Expense;

use super::banner::format_border;

/// Format a single expense as a padded listing row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:dw$},{:cw$},{:aw$},{}",
        expense.date_string(),
        expense.category,
        format!("{:.2}", expense.amount),
        expense.description,
        dw = settings.date_width,
        cw = settings.category_width,
        aw = settings.amount_width,
    )
}

/// Format all expenses as a bordered table with an item count footer
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    let border = format_border(settings.screen_width);
    let mut output = String::new();

    output.push_str(&border);
    output.push('\n');
    output.push_str(&format!(
        "{:dw$},{:cw$},{:aw$},{}\n",
        "DATE",
        "CATEGORY",
        "AMOUNT",
        "DESCRIPTION",
        dw = settings.date_width,
        cw = settings.category_width,
        aw = settings.amount_width,
    ));
    output.push_str(&border);
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output.push_str(&border);
    output.push('\n');
    output.push_str(&format!("Total Expenses: {} items\n", expenses.len()));
    output.push_str(&border);
    output.push('\n');

    output
}
