//! Parsing of the comma-separated size list.

use crate::error::{Error, Result, SizeError};

/// Sizes generated when none are requested (the Electron icon set).
pub const DEFAULT_SIZES: &str = "16,24,32,48,64,128,256,512";

/// Parses one size entry.
///
/// Surrounding whitespace is ignored, an optional sign and the leading run of
/// decimal digits are read, and anything after the digits is ignored, so
/// `"48px"` parses as 48. Zero and negative values are rejected.
pub fn parse_size(entry: &str) -> Result<u32> {
    let invalid = |source| Error::InvalidSize {
        entry: entry.to_string(),
        source,
    };

    let trimmed = entry.trim();
    if trimmed.is_empty() {
        return Err(invalid(SizeError::Empty));
    }

    let (negative, rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return Err(invalid(SizeError::NotANumber));
    }

    let magnitude: i64 = digits
        .parse()
        .map_err(|_| invalid(SizeError::OutOfRange))?;
    let value = if negative { -magnitude } else { magnitude };
    if value <= 0 {
        return Err(invalid(SizeError::NonPositive(value)));
    }

    u32::try_from(value).map_err(|_| invalid(SizeError::OutOfRange))
}

/// Splits a comma-separated list and parses every entry independently.
///
/// Results keep the order of the input; a failed entry does not affect the
/// others.
pub fn parse_size_list(list: &str) -> Vec<Result<u32>> {
    list.split(',').map(parse_size).collect()
}
