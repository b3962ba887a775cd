//! Currency and timestamp formatting
//!
//! Amounts are grouped the Indian way: the last three integer digits, then
//! groups of two (`1,23,45,678.90`).

use chrono::{DateTime, Local, Utc};

/// Format an amount's magnitude with a currency symbol and two decimals
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}{}.{}", symbol, group_indian(whole), fraction)
}

/// Format a signed amount, prefixing `- ` when negative
pub fn format_signed(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("- {}", format_currency(amount, symbol))
    } else {
        format_currency(amount, symbol)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Render a UTC timestamp in local time using a strftime pattern
pub fn format_timestamp(timestamp: &DateTime<Utc>, pattern: &str) -> String {
    timestamp.with_timezone(&Local).format(pattern).to_string()
}

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
