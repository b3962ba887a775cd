//! Balance summary
//!
//! Aggregates an entry collection into income and expense totals, the net
//! balance, and each side's share of the combined volume.

use crate::models::{Entry, EntryKind};

/// Share reported for both sides when there is nothing to split
pub const EVEN_SHARE: f64 = 50.0;

/// Aggregate snapshot of a ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Sum of income amounts
    pub total_income: f64,
    /// Sum of expense amounts
    pub total_expense: f64,
    /// Income minus expense
    pub net: f64,
    /// Income as a percentage of income + expense
    pub income_share: f64,
    /// Expense as a percentage of income + expense
    pub expense_share: f64,
    /// Number of income entries
    pub income_count: usize,
    /// Number of expense entries
    pub expense_count: usize,
}

impl Summary {
    /// Compute the snapshot for a collection of entries
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        let mut income_count = 0;
        let mut expense_count = 0;

        for entry in entries {
            match entry.kind {
                EntryKind::Income => {
                    total_income += entry.amount.value();
                    income_count += 1;
                }
                EntryKind::Expense => {
                    total_expense += entry.amount.value();
                    expense_count += 1;
                }
            }
        }

        let volume = total_income + total_expense;
        let (income_share, expense_share) = if volume > 0.0 {
            (
                total_income / volume * 100.0,
                total_expense / volume * 100.0,
            )
        } else {
            (EVEN_SHARE, EVEN_SHARE)
        };

        Self {
            total_income,
            total_expense,
            net: total_income - total_expense,
            income_share,
            expense_share,
            income_count,
            expense_count,
        }
    }

    /// Total number of entries aggregated
    pub fn entry_count(&self) -> usize {
        self.income_count + self.expense_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Whether the net balance is below zero
    pub fn is_deficit(&self) -> bool {
        self.net < 0.0
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::from_entries(std::iter::empty())
    }
}
