//! Custom error types for FinTrack
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Every domain rejection is recoverable; the presentation layer decides how
//! each kind is shown to the user.

use std::fmt;

use thiserror::Error;

/// Why an amount was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountRejection {
    /// Nothing was entered
    Missing,
    /// The text is not a finite decimal number
    NotNumeric,
    /// The number is zero or negative
    NotPositive,
    /// The number exceeds the largest accepted amount
    TooLarge,
}

impl fmt::Display for AmountRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no amount given"),
            Self::NotNumeric => write!(f, "not a number"),
            Self::NotPositive => write!(f, "must be greater than zero"),
            Self::TooLarge => write!(f, "too large"),
        }
    }
}

/// The main error type for FinTrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Description field is blank
    #[error("Description is empty")]
    EmptyDescription,

    /// Description has no letters or is only digits and punctuation
    #[error("Description must contain letters, not just numbers: '{0}'")]
    InvalidDescription(String),

    /// Amount missing, non-numeric, not positive, or too large
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount {
        input: String,
        reason: AmountRejection,
    },

    /// Update/remove target does not exist
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Clear requested on an already-empty ledger
    #[error("No entries to clear")]
    EmptyCollection,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FintrackError {
    /// Create a "not found" error for an entry identifier
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound(identifier.into())
    }

    /// Create an amount rejection
    pub fn invalid_amount(input: impl Into<String>, reason: AmountRejection) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyDescription | Self::InvalidDescription(_) | Self::InvalidAmount { .. }
        )
    }

    /// Informational outcomes are reported to the user but are not failures
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::EmptyCollection)
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FinTrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;
