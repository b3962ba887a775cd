//! Acceptance rules for entry input
//!
//! Validation runs before any ledger mutation. A rejected input never
//! touches the ledger.

use crate::error::{AmountRejection, FintrackError, FintrackResult};
use crate::models::{Amount, EntryKind};

/// Input that has passed every acceptance rule
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntryInput {
    pub kind: EntryKind,
    pub description: String,
    pub amount: Amount,
}

/// Check a description, returning the trimmed text on success
///
/// Rejects blank text, text without letters, and text made only of digits,
/// whitespace, `.`, `,` and `-`.
pub fn validate_description(text: &str) -> FintrackResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FintrackError::EmptyDescription);
    }

    let has_letters = trimmed.chars().any(char::is_alphabetic);
    if !has_letters || is_numeric_only(trimmed) {
        return Err(FintrackError::InvalidDescription(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}

fn is_numeric_only(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | ',' | '-'))
}

/// Parse amount text as a positive decimal within `MAX_AMOUNT`
pub fn parse_amount(text: &str) -> FintrackResult<Amount> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FintrackError::invalid_amount(text, AmountRejection::Missing));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| FintrackError::invalid_amount(trimmed, AmountRejection::NotNumeric))?;

    Amount::new(value).map_err(|reason| FintrackError::invalid_amount(trimmed, reason))
}

/// Run the description and amount rules in form order
pub fn validate_entry(
    kind: EntryKind,
    description: &str,
    amount_text: &str,
) -> FintrackResult<ValidEntryInput> {
    let description = validate_description(description)?;
    let amount = parse_amount(amount_text)?;
    Ok(ValidEntryInput {
        kind,
        description,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_descriptions() {
        assert_eq!(validate_description("Salary").unwrap(), "Salary");
        assert_eq!(validate_description("  Rent  ").unwrap(), "Rent");
        assert_eq!(validate_description("Rent - March 2025").unwrap(), "Rent - March 2025");
        assert_eq!(validate_description("Café").unwrap(), "Café");
    }

    #[test]
    fn test_blank_description() {
        assert!(matches!(
            validate_description(""),
            Err(FintrackError::EmptyDescription)
        ));
        assert!(matches!(
            validate_description("   \t"),
            Err(FintrackError::EmptyDescription)
        ));
    }

    #[test]
    fn test_numeric_description_rejected() {
        for text in ["12345", "1,000.50", "12 - 34", "#42", "..."] {
            assert!(
                matches!(
                    validate_description(text),
                    Err(FintrackError::InvalidDescription(_))
                ),
                "expected rejection for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50000").unwrap().value(), 50000.0);
        assert_eq!(parse_amount(" 12.5 ").unwrap().value(), 12.5);
    }

    #[test]
    fn test_amount_rejections() {
        let reason = |text: &str| match parse_amount(text) {
            Err(FintrackError::InvalidAmount { reason, .. }) => reason,
            other => panic!("expected InvalidAmount for {:?}, got {:?}", text, other),
        };

        assert_eq!(reason(""), AmountRejection::Missing);
        assert_eq!(reason("abc"), AmountRejection::NotNumeric);
        assert_eq!(reason("NaN"), AmountRejection::NotNumeric);
        assert_eq!(reason("inf"), AmountRejection::NotNumeric);
        assert_eq!(reason("0"), AmountRejection::NotPositive);
        assert_eq!(reason("-5"), AmountRejection::NotPositive);
        assert_eq!(reason("1e25"), AmountRejection::TooLarge);
    }

    #[test]
    fn test_validate_entry_checks_description_first() {
        let err = validate_entry(EntryKind::Income, "12345", "-1").unwrap_err();
        assert!(matches!(err, FintrackError::InvalidDescription(_)));

        let ok = validate_entry(EntryKind::Expense, " Rent ", "20000").unwrap();
        assert_eq!(ok.description, "Rent");
        assert_eq!(ok.amount.value(), 20000.0);
    }
}
