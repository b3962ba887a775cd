//! Amount type for entry values
//!
//! An `Amount` is always a finite, strictly positive decimal no larger than
//! `MAX_AMOUNT`. The sign of an entry comes from its kind, never from the
//! amount itself.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AmountRejection;

/// Largest accepted amount; keeps totals finite and paise-exact
pub const MAX_AMOUNT: f64 = 1e12;

/// A positive monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting zero, negative, oversized and non-finite values
    pub fn new(value: f64) -> Result<Self, AmountRejection> {
        if !value.is_finite() {
            return Err(AmountRejection::NotNumeric);
        }
        if value <= 0.0 {
            return Err(AmountRejection::NotPositive);
        }
        if value > MAX_AMOUNT {
            return Err(AmountRejection::TooLarge);
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountRejection;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount() {
        let amount = Amount::new(12.5).unwrap();
        assert_eq!(amount.value(), 12.5);
        assert_eq!(format!("{}", amount), "12.50");
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert_eq!(Amount::new(0.0), Err(AmountRejection::NotPositive));
        assert_eq!(Amount::new(-5.0), Err(AmountRejection::NotPositive));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(Amount::new(f64::NAN), Err(AmountRejection::NotNumeric));
        assert_eq!(Amount::new(f64::INFINITY), Err(AmountRejection::NotNumeric));
    }

    #[test]
    fn test_rejects_oversized() {
        assert!(Amount::new(MAX_AMOUNT).is_ok());
        assert_eq!(Amount::new(1e25), Err(AmountRejection::TooLarge));
        assert_eq!(Amount::new(f64::MAX), Err(AmountRejection::TooLarge));
    }

    #[test]
    fn test_deserialize_enforces_positive() {
        let ok: Amount = serde_json::from_str("50000").unwrap();
        assert_eq!(ok.value(), 50000.0);
        assert!(serde_json::from_str::<Amount>("0").is_err());
        assert!(serde_json::from_str::<Amount>("-1.5").is_err());
    }
}
