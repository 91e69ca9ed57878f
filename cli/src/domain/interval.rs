//! Interval parsing.
//!
//! Accepts the compact duration notation used on the command line:
//! `1h`, `90m`, `1h30m`, `1.5h`, `300ms`. Each component is a decimal
//! number followed by one of `ns`, `us`, `µs`, `μs`, `ms`, `s`, `m`, `h`.

use std::time::Duration;

use thiserror::Error;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Longest accepted interval: `i64::MAX` nanoseconds (`2562047h47m16.854775807s`).
const MAX_NANOS: u128 = i64::MAX as u128;

/// Reasons an interval string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("empty duration")]
    Empty,

    #[error("negative durations are not allowed")]
    Negative,

    #[error("missing unit in duration")]
    MissingUnit,

    #[error("unknown unit '{0}' in duration")]
    UnknownUnit(String),

    #[error("invalid duration")]
    Invalid,

    #[error("duration out of range")]
    Overflow,
}

/// Parse an interval string into a [`Duration`].
///
/// # Errors
///
/// Returns an [`IntervalError`] when the text is not a recognised duration.
pub fn parse_interval(text: &str) -> Result<Duration, IntervalError> {
    let mut rest = match text.strip_prefix('+') {
        Some(stripped) => stripped,
        None if text.starts_with('-') => return Err(IntervalError::Negative),
        None => text,
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(IntervalError::Empty);
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after) = split_digits(rest);
        let (frac, after) = match after.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(IntervalError::Invalid);
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let unit = &after[..unit_len];
        if unit.is_empty() {
            return Err(IntervalError::MissingUnit);
        }
        let scale = unit_scale(unit).ok_or_else(|| IntervalError::UnknownUnit(unit.to_string()))?;

        total = total
            .checked_add(component_nanos(whole, frac, scale)?)
            .filter(|t| *t <= MAX_NANOS)
            .ok_or(IntervalError::Overflow)?;
        rest = &after[unit_len..];
    }

    let nanos = u64::try_from(total).map_err(|_| IntervalError::Overflow)?;
    Ok(Duration::from_nanos(nanos))
}

/// Whole seconds in `interval`, truncating any sub-second remainder.
#[must_use]
pub fn interval_seconds(interval: Duration) -> u64 {
    interval.as_secs()
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn unit_scale(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn component_nanos(whole: &str, frac: &str, scale: u128) -> Result<u128, IntervalError> {
    let whole_value: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| IntervalError::Overflow)?
    };
    let mut nanos = whole_value
        .checked_mul(scale)
        .ok_or(IntervalError::Overflow)?;

    // Fractional digits finer than one nanosecond are dropped.
    let mut place = scale;
    for digit in frac.bytes() {
        place /= 10;
        if place == 0 {
            break;
        }
        nanos = nanos
            .checked_add(u128::from(digit - b'0') * place)
            .ok_or(IntervalError::Overflow)?;
    }
    Ok(nanos)
}
