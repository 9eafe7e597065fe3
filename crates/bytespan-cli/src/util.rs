//! Integer and interval argument parsing.

use bytespan_core::{Interval, IntervalError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty number")]
    Empty,

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error(transparent)]
    Interval(#[from] IntervalError),
}

/// Parse a decimal or `0x` hex integer. `_` separators are ignored.
pub fn parse_u64(text: &str) -> Result<u64, ParseError> {
    let cleaned: String = text.trim().chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }

    let parsed = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => cleaned.parse(),
    };
    parsed.map_err(|_| ParseError::InvalidNumber(text.to_string()))
}

/// Parse `LOW-HIGH`, `LOW..=HIGH` or a single value.
pub fn parse_interval(text: &str) -> Result<Interval, ParseError> {
    let (low, high) = match text.split_once("..=").or_else(|| text.split_once('-')) {
        Some((low, high)) => (parse_u64(low)?, parse_u64(high)?),
        None => {
            let value = parse_u64(text)?;
            (value, value)
        }
    };
    Ok(Interval::new(low, high)?)
}
