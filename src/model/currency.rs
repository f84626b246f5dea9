//! Money formatting helpers for displaying prices.

use crate::validation::parse_leading_f64;

/// Formats an amount as US dollars, e.g. `$1,234.50` or `-$3.00`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// Parses user-entered money text, ignoring currency symbols and separators.
///
/// Returns `0.0` when no number can be read.
pub fn parse_currency(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    parse_leading_f64(&cleaned)
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
