//! Balance overview panel

use super::format::{format_currency, format_signed};
use crate::config::Settings;
use crate::reports::Summary;

const BAR_WIDTH: usize = 40;

/// Render the income/expense proportion as a fixed-width bar
pub fn format_share_bar(summary: &Summary) -> String {
    let income_cells = ((summary.income_share / 100.0) * BAR_WIDTH as f64).round() as usize;
    let income_cells = income_cells.min(BAR_WIDTH);
    format!(
        "[{}{}]",
        "+".repeat(income_cells),
        "-".repeat(BAR_WIDTH - income_cells)
    )
}

/// Format the balance overview for terminal display
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("Balance Overview\n");
    output.push_str(&"=".repeat(BAR_WIDTH + 2));
    output.push('\n');
    output.push_str(&format!(
        "Net Balance:    {:>20}\n",
        format_signed(summary.net, symbol)
    ));
    output.push_str(&format!(
        "Total Income:   {:>20}\n",
        format!("+ {}", format_currency(summary.total_income, symbol))
    ));
    output.push_str(&format!(
        "Total Expenses: {:>20}\n",
        format!("- {}", format_currency(summary.total_expense, symbol))
    ));
    output.push_str(&format_share_bar(summary));
    output.push('\n');
    if summary.is_deficit() {
        output.push_str("Spending exceeds income\n");
    }
    output.push_str(&format!(
        "Income {:.2}%  |  Expenses {:.2}%  |  {} entries\n",
        summary.income_share,
        summary.expense_share,
        summary.entry_count()
    ));

    output
}
