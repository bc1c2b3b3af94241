//! Borders and the summary header

use crate::services::compare_budget;

/// Application title shown in the header
pub const APP_TITLE: &str = "PET - Personal Expense Tracker";

/// A full-width border line
pub fn format_border(width: usize) -> String {
    "=".repeat(width)
}

/// A title centered between two borders
pub fn format_title(title: &str, width: usize) -> String {
    let border = format_border(width);
    format!("{}\n{:^width$}\n{}\n", border, title, border, width = width)
}

/// The summary banner printed above the menu
pub fn format_header(total_expenses: f64, budget: f64, width: usize) -> String {
    let status = compare_budget(budget, total_expenses);
    let summary = format!(
        "Budget: {:.2} | Total Expenses: {:.2} | {}: {:.2}",
        budget,
        total_expenses,
        status.label(),
        status.amount()
    );
    let border = format_border(width);

    format!(
        "{}\n{:^width$}\n\n{:^width$}\n{}\n",
        border,
        APP_TITLE,
        summary,
        border,
        width = width
    )
}
