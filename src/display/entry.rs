//! Entry display formatting
//!
//! Tables and detail views for ledger entries.

use tabled::{settings::Style, Table, Tabled};

use super::format::{format_currency, format_timestamp, truncate};
use crate::config::Settings;
use crate::models::{Entry, EntryFilter};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Added")]
    added: String,
}

impl EntryRow {
    fn new(entry: &Entry, settings: &Settings) -> Self {
        Self {
            id: entry.id.to_string(),
            kind: entry.kind.to_string(),
            description: truncate(&entry.description, 32),
            amount: format_entry_amount(entry, settings),
            added: format_timestamp(&entry.created_at, &settings.date_format),
        }
    }
}

/// Amount with a `+`/`-` marker from the entry kind
pub fn format_entry_amount(entry: &Entry, settings: &Settings) -> String {
    let marker = if entry.is_expense() { '-' } else { '+' };
    format!(
        "{} {}",
        marker,
        format_currency(entry.amount.value(), &settings.currency_symbol)
    )
}

/// Format a list of entries as a table
pub fn format_entry_table(entries: &[Entry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<EntryRow> = entries.iter().map(|e| EntryRow::new(e, settings)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a filtered listing with its count badge
pub fn format_entry_list(entries: &[Entry], filter: EntryFilter, settings: &Settings) -> String {
    let mut output = format_entry_table(entries, settings);
    output.push_str(&format!(
        "Showing {} {} ({})\n",
        entries.len(),
        if entries.len() == 1 { "entry" } else { "entries" },
        filter
    ));
    output
}

/// Format entry details for display
pub fn format_entry_details(entry: &Entry, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:       {}\n", entry.id));
    output.push_str(&format!("Kind:        {}\n", entry.kind));
    output.push_str(&format!("Description: {}\n", entry.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_entry_amount(entry, settings)
    ));
    output.push_str(&format!(
        "Created:     {}\n",
        format_timestamp(&entry.created_at, &settings.date_format)
    ));
    if let Some(updated_at) = &entry.updated_at {
        output.push_str(&format!(
            "Updated:     {}\n",
            format_timestamp(updated_at, &settings.date_format)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, EntryKind};

    fn entry(kind: EntryKind, description: &str, amount: f64) -> Entry {
        Entry::new(kind, description, Amount::new(amount).unwrap())
    }

    #[test]
    fn test_entry_amount_marker() {
        let settings = Settings::default();
        let income = entry(EntryKind::Income, "Salary", 50000.0);
        let expense = entry(EntryKind::Expense, "Rent", 20000.0);

        assert_eq!(format_entry_amount(&income, &settings), "+ ₹50,000.00");
        assert_eq!(format_entry_amount(&expense, &settings), "- ₹20,000.00");
    }

    #[test]
    fn test_empty_table() {
        let settings = Settings::default();
        assert_eq!(
            format_entry_table(&[], &settings),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_table_contains_rows() {
        let settings = Settings::default();
        let entries = vec![
            entry(EntryKind::Expense, "Rent", 20000.0),
            entry(EntryKind::Income, "Salary", 50000.0),
        ];

        let output = format_entry_list(&entries, EntryFilter::All, &settings);
        assert!(output.contains("Description"));
        assert!(output.contains("Rent"));
        assert!(output.contains("+ ₹50,000.00"));
        assert!(output.contains(&entries[0].id.to_string()));
        assert!(output.contains("Showing 2 entries (all)"));
    }

    #[test]
    fn test_details_show_updated_only_after_edit() {
        let settings = Settings::default();
        let mut e = entry(EntryKind::Income, "Salary", 100.0);
        assert!(!format_entry_details(&e, &settings).contains("Updated:"));

        e.replace(EntryKind::Income, "Salary", Amount::new(200.0).unwrap());
        let details = format_entry_details(&e, &settings);
        assert!(details.contains("Updated:"));
        assert!(details.contains("+ ₹200.00"));
    }
}
