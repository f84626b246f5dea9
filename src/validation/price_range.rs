use super::number::parse_leading_f64;
use thiserror::Error;

/// Reasons a price range filter is rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PriceRangeError {
    #[error("Minimum price must be a positive number")]
    InvalidMinimum,
    #[error("Maximum price must be a positive number")]
    InvalidMaximum,
    #[error("Minimum price cannot be greater than maximum price")]
    MinimumExceedsMaximum,
}

/// Checks a pair of price bounds as typed into the filter inputs.
///
/// An empty bound is unbounded and never an error. The minimum is checked before the maximum.
pub fn validate_price_range(min: &str, max: &str) -> Result<(), PriceRangeError> {
    let lower = parse_bound(min, PriceRangeError::InvalidMinimum)?.unwrap_or(f64::NEG_INFINITY);
    let upper = parse_bound(max, PriceRangeError::InvalidMaximum)?.unwrap_or(f64::INFINITY);

    if lower > upper {
        return Err(PriceRangeError::MinimumExceedsMaximum);
    }
    Ok(())
}

fn parse_bound(text: &str, invalid: PriceRangeError) -> Result<Option<f64>, PriceRangeError> {
    if text.is_empty() {
        return Ok(None);
    }
    match parse_leading_f64(text) {
        Some(value) if value >= 0.0 => Ok(Some(value)),
        _ => Err(invalid),
    }
}
