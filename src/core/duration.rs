//! # Durations
//!
//! Every duration in Tempo is a whole number of seconds (`u64`).
//! This module converts between that count and its two text forms:
//!
//! - The `HH:MM:SS` display (`format_hms` / `parse_hms`)
//! - A single free-text input field, as typed by the user (`parse_field`)
//!
//! Hours are never wrapped to 24. Past 99 hours the hours field simply widens
//! (`100:00:00`), so `parse_hms(format_hms(n)) == n` for every `n`.

use log::warn;
use std::fmt;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Format a second count as `HH:MM:SS`, each field zero-padded to width 2.
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / SECONDS_PER_HOUR;
    let minutes = (total_secs / SECONDS_PER_MINUTE) % 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Error returned by `parse_hms` for text that isn't a valid `HH:MM:SS` display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseHmsError {
    /// Not exactly three `:`-separated fields.
    WrongShape(String),
    /// A field is not an unsigned integer.
    BadField(String),
    /// Minutes or seconds are 60 or more.
    OutOfRange(String),
}

impl fmt::Display for ParseHmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseHmsError::WrongShape(s) => write!(f, "expected HH:MM:SS, got {s:?}"),
            ParseHmsError::BadField(s) => write!(f, "not a number: {s:?}"),
            ParseHmsError::OutOfRange(s) => write!(f, "field out of range: {s:?}"),
        }
    }
}

impl std::error::Error for ParseHmsError {}

/// Parse an `HH:MM:SS` display back into a second count.
pub fn parse_hms(text: &str) -> Result<u64, ParseHmsError> {
    let fields: Vec<&str> = text.split(':').collect();
    let &[h, m, s] = fields.as_slice() else {
        return Err(ParseHmsError::WrongShape(text.to_string()));
    };

    let parse = |field: &str| {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseHmsError::BadField(field.to_string()));
        }
        field
            .parse::<u64>()
            .map_err(|_| ParseHmsError::OutOfRange(field.to_string()))
    };

    let (hours, minutes, seconds) = (parse(h)?, parse(m)?, parse(s)?);
    if minutes >= 60 || seconds >= 60 {
        return Err(ParseHmsError::OutOfRange(text.to_string()));
    }

    hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|h| h.checked_add(minutes * SECONDS_PER_MINUTE + seconds))
        .ok_or_else(|| ParseHmsError::OutOfRange(text.to_string()))
}

// ============================================================================
// Free-text input fields
// ============================================================================

/// A duration field the user typed that can't be read as a non-negative integer.
///
/// Never shown to the user: `parse_field_lossy` clamps these to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDurationInput {
    /// Nothing but whitespace.
    Empty,
    /// No leading digits (e.g. `"abc"`).
    NotANumber(String),
    /// A leading minus sign (e.g. `"-5"`).
    Negative(String),
    /// More digits than fit in a `u64`.
    TooLarge(String),
}

impl fmt::Display for InvalidDurationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidDurationInput::Empty => write!(f, "empty duration field"),
            InvalidDurationInput::NotANumber(s) => write!(f, "not a number: {s:?}"),
            InvalidDurationInput::Negative(s) => write!(f, "negative duration: {s:?}"),
            InvalidDurationInput::TooLarge(s) => write!(f, "duration too large: {s:?}"),
        }
    }
}

impl std::error::Error for InvalidDurationInput {}

/// Parse one free-text duration field.
///
/// Surrounding whitespace is ignored, as is anything after the leading run of
/// digits: `"5min"` reads as 5. An optional `+` sign is accepted.
pub fn parse_field(text: &str) -> Result<u64, InvalidDurationInput> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidDurationInput::Empty);
    }

    let unsigned = match trimmed.as_bytes()[0] {
        b'-' => return Err(InvalidDurationInput::Negative(trimmed.to_string())),
        b'+' => &trimmed[1..],
        _ => trimmed,
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return Err(InvalidDurationInput::NotANumber(trimmed.to_string()));
    }

    digits
        .parse::<u64>()
        .map_err(|_| InvalidDurationInput::TooLarge(trimmed.to_string()))
}

/// Parse one free-text field, clamping anything invalid to 0.
pub fn parse_field_lossy(text: &str) -> u64 {
    match parse_field(text) {
        Ok(value) => value,
        Err(InvalidDurationInput::Empty) => 0,
        Err(e) => {
            warn!("Invalid duration input, using 0: {}", e);
            0
        }
    }
}

/// Combine hours, minutes and seconds into a total, saturating at `u64::MAX`.
pub fn total_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours
        .saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_hms(0), "00:00:00");
    }

    #[test]
    fn test_format_minute_and_second() {
        assert_eq!(format_hms(61), "00:01:01");
    }

    #[test]
    fn test_format_hour_minute_second() {
        assert_eq!(format_hms(3661), "01:01:01");
    }

    #[test]
    fn test_format_does_not_wrap_at_24_hours() {
        assert_eq!(format_hms(25 * 3600 + 61), "25:01:01");
    }

    #[test]
    fn test_format_hours_widen_past_99() {
        assert_eq!(format_hms(100 * 3600), "100:00:00");
        assert_eq!(parse_hms("100:00:00"), Ok(360_000));
    }

    #[test]
    fn test_parse_hms_inverts_format_below_100_hours() {
        for n in [0, 1, 59, 60, 61, 3599, 3600, 3661, 86_399, 86_400, 359_999] {
            assert_eq!(parse_hms(&format_hms(n)), Ok(n), "n = {n}");
        }
    }

    #[test]
    fn test_parse_hms_rejects_bad_shapes() {
        assert!(matches!(parse_hms("01:02"), Err(ParseHmsError::WrongShape(_))));
        assert!(matches!(parse_hms("aa:00:00"), Err(ParseHmsError::BadField(_))));
        assert!(matches!(parse_hms("00:60:00"), Err(ParseHmsError::OutOfRange(_))));
        assert!(matches!(parse_hms("00:00:-1"), Err(ParseHmsError::BadField(_))));
    }

    #[test]
    fn test_parse_field_plain_numbers() {
        assert_eq!(parse_field("0"), Ok(0));
        assert_eq!(parse_field("42"), Ok(42));
        assert_eq!(parse_field("  7 "), Ok(7));
        assert_eq!(parse_field("+3"), Ok(3));
    }

    #[test]
    fn test_parse_field_ignores_trailing_garbage() {
        assert_eq!(parse_field("5min"), Ok(5));
        assert_eq!(parse_field("12.9"), Ok(12));
    }

    #[test]
    fn test_parse_field_errors() {
        assert_eq!(parse_field(""), Err(InvalidDurationInput::Empty));
        assert_eq!(parse_field("   "), Err(InvalidDurationInput::Empty));
        assert_eq!(
            parse_field("abc"),
            Err(InvalidDurationInput::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_field("-5"),
            Err(InvalidDurationInput::Negative("-5".to_string()))
        );
        assert!(matches!(
            parse_field("99999999999999999999999"),
            Err(InvalidDurationInput::TooLarge(_))
        ));
    }

    #[test]
    fn test_parse_field_lossy_clamps_to_zero() {
        assert_eq!(parse_field_lossy("abc"), 0);
        assert_eq!(parse_field_lossy("-5"), 0);
        assert_eq!(parse_field_lossy(""), 0);
        assert_eq!(parse_field_lossy("15"), 15);
    }

    #[test]
    fn test_total_seconds() {
        assert_eq!(total_seconds(1, 1, 1), 3661);
        assert_eq!(total_seconds(0, 90, 0), 5400);
        assert_eq!(total_seconds(u64::MAX, 1, 1), u64::MAX);
    }
}
