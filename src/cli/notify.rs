//! User-facing notices
//!
//! Short one-line messages reporting the outcome of a command. Every ledger
//! error kind maps to its own message.

use std::fmt;

use crate::error::{AmountRejection, FintrackError};
use crate::models::EntryKind;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Get the icon/prefix for this level
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// A one-line message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn added(kind: EntryKind) -> Self {
        Self::success(format!("{} added!", kind))
    }

    pub fn updated() -> Self {
        Self::success("Transaction updated!")
    }

    pub fn deleted() -> Self {
        Self::success("Transaction deleted!")
    }

    pub fn cleared(count: usize) -> Self {
        Self::success(format!("All transactions cleared! ({} removed)", count))
    }

    /// Translate a ledger error into the message shown to the user
    pub fn from_error(err: &FintrackError) -> Self {
        match err {
            FintrackError::EmptyDescription => Self::warning("Please enter a description"),
            FintrackError::InvalidDescription(_) => {
                Self::warning("Description must contain letters, not just numbers!")
            }
            FintrackError::InvalidAmount { reason, .. } => match reason {
                AmountRejection::Missing => Self::warning("Please enter an amount"),
                AmountRejection::NotNumeric
                | AmountRejection::NotPositive
                | AmountRejection::TooLarge => {
                    Self::warning(format!("Please enter a valid amount ({})", reason))
                }
            },
            FintrackError::NotFound(id) => {
                Self::new(NoticeLevel::Error, format!("Transaction not found: {}", id))
            }
            FintrackError::EmptyCollection => Self::info("No transactions to clear!"),
            other => Self::new(NoticeLevel::Error, other.to_string()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.icon(), self.message)
    }
}
