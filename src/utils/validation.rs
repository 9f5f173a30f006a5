//! Count-input parsing and validation helpers

use crate::traits::CountValidator;
use crate::types::*;

/// Coerce a raw count field to a non-negative integer.
///
/// Reproduces the lenient entry-form parse: leading whitespace is skipped, an
/// optional sign and leading digit run are read, and everything after the
/// digits is ignored (`"12abc"` parses as 12, `"3.9"` as 3). Input with no
/// leading digits, or a negative value, coerces to 0.
pub fn coerce_count(raw: &str) -> u64 {
    let trimmed = raw.trim_start();

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digit_run: &str = match digits.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &digits[..end],
        None => digits,
    };

    if negative || digit_run.is_empty() {
        return 0;
    }

    digit_run
        .chars()
        .fold(0u64, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(c.to_digit(10).unwrap_or(0)))
        })
}

/// Parse a raw count field, rejecting anything that is not a plain
/// non-negative integer.
pub fn parse_count_strict(raw: &str) -> BilletageResult<u64> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(BilletageError::Validation(
            "Count cannot be empty".to_string(),
        ));
    }

    if let Some(value) = trimmed.strip_prefix('-') {
        return Err(BilletageError::Validation(format!(
            "Count cannot be negative: -{}",
            value
        )));
    }

    trimmed.parse::<u64>().map_err(|_| {
        BilletageError::Validation(format!("Count is not a whole number: '{}'", trimmed))
    })
}

/// Validate that a denomination face value is usable on a slip
pub fn validate_face_value(face_value: u64) -> BilletageResult<()> {
    if face_value == 0 {
        return Err(BilletageError::InvalidDenomination(
            "Face value must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Strict count policy: reject invalid input instead of zeroing it
///
/// Deviates from the historical silently-coercing behavior; with this policy
/// a negative or garbled count blocks entry with a [`BilletageError::Validation`]
/// instead of being corrected to 0.
pub struct StrictCountValidator;

impl CountValidator for StrictCountValidator {
    fn parse_count(&self, raw: &str) -> BilletageResult<u64> {
        parse_count_strict(raw)
    }
}
