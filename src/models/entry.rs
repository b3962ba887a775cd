//! Ledger entry model
//!
//! An entry is a single income or expense record. Only kind, description and
//! amount are mutable; the id and creation time are fixed at creation.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::Amount;
use super::ids::EntryId;

/// Classification of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "i" => Ok(Self::Income),
            "expense" | "out" | "e" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid entry kind: '{}'. Use income or expense",
                other
            )),
        }
    }
}

/// Restriction applied when listing entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl EntryFilter {
    /// Check whether an entry passes this filter
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Self::All => true,
            Self::Income => entry.kind == EntryKind::Income,
            Self::Expense => entry.kind == EntryKind::Expense,
        }
    }
}

impl From<EntryKind> for EntryFilter {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Income => Self::Income,
            EntryKind::Expense => Self::Expense,
        }
    }
}

impl fmt::Display for EntryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for EntryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<EntryKind>()
            .map(Self::from)
            .map_err(|_| format!("Invalid filter: '{}'. Use all, income or expense", s.trim()))
    }
}

/// Current time at the millisecond resolution the store keeps
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// Income or expense
    #[serde(alias = "type")]
    pub kind: EntryKind,

    /// What the money was for
    pub description: String,

    /// Positive amount; the kind supplies the sign
    pub amount: Amount,

    /// When the entry was created
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    /// When the entry was last edited, absent until the first edit
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Create a new entry with a fresh id
    ///
    /// The description is expected to be validated already.
    pub fn new(kind: EntryKind, description: impl Into<String>, amount: Amount) -> Self {
        Self {
            id: EntryId::new(),
            kind,
            description: description.into(),
            amount,
            created_at: now(),
            updated_at: None,
        }
    }

    /// Replace every mutable field and stamp the edit time
    pub fn replace(&mut self, kind: EntryKind, description: impl Into<String>, amount: Amount) {
        self.kind = kind;
        self.description = description.into();
        self.amount = amount;
        self.updated_at = Some(now());
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_income() { '+' } else { '-' };
        write!(f, "{} {} {}{}", self.id, self.description, sign, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(v: f64) -> Amount {
        Amount::new(v).unwrap()
    }

    #[test]
    fn test_new_entry() {
        let entry = Entry::new(EntryKind::Income, "Salary", amount(50000.0));
        assert!(entry.is_income());
        assert_eq!(entry.description, "Salary");
        assert!(entry.updated_at.is_none());
        assert_eq!(entry.to_string(), format!("{} Salary +50000.00", entry.id));
    }

    #[test]
    fn test_replace_stamps_updated_at() {
        let mut entry = Entry::new(EntryKind::Income, "Salary", amount(100.0));
        let id = entry.id;
        let created = entry.created_at;

        entry.replace(EntryKind::Expense, "Rent", amount(40.0));

        assert_eq!(entry.id, id);
        assert_eq!(entry.created_at, created);
        assert!(entry.is_expense());
        assert_eq!(entry.description, "Rent");
        assert!(!entry.is_income());
        assert!(entry.updated_at.is_some());
    }

    #[test]
    fn test_serialized_layout() {
        let entry = Entry::new(EntryKind::Expense, "Rent", amount(20000.0));
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["kind"], "expense");
        assert_eq!(value["description"], "Rent");
        assert_eq!(value["amount"], 20000.0);
        assert_eq!(value["createdAt"], entry.created_at.timestamp_millis());
        assert!(value.get("updatedAt").is_none());
    }

    #[test]
    fn test_serde_round_trip_after_edit() {
        let mut entry = Entry::new(EntryKind::Income, "Bonus", amount(12.75));
        entry.replace(EntryKind::Income, "Annual bonus", amount(13.0));

        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_accepts_legacy_type_field() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "type": "income",
            "description": "Salary",
            "amount": 50000,
            "createdAt": 1700000000000
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, EntryKind::Income);
        assert_eq!(entry.created_at.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_kind_and_filter_parsing() {
        assert_eq!("Income".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!("expense".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert!("salary".parse::<EntryKind>().is_err());

        assert_eq!("ALL".parse::<EntryFilter>().unwrap(), EntryFilter::All);
        assert_eq!("expense".parse::<EntryFilter>().unwrap(), EntryFilter::Expense);
        assert!("both".parse::<EntryFilter>().is_err());
    }

    #[test]
    fn test_filter_matches() {
        let income = Entry::new(EntryKind::Income, "Salary", amount(1.0));
        let expense = Entry::new(EntryKind::Expense, "Rent", amount(1.0));

        assert!(EntryFilter::All.matches(&income));
        assert!(EntryFilter::Income.matches(&income));
        assert!(!EntryFilter::Income.matches(&expense));
        assert!(EntryFilter::Expense.matches(&expense));
    }
}
