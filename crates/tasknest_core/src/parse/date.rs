//! Date-time grammar for dated tasks.
//!
//! # Responsibility
//! - Parse user-entered date text into a comparable timestamp.
//! - Normalize date text into the single canonical stored representation.
//!
//! # Invariants
//! - Input grammar is `day/month/year hhmm`, e.g. `2/12/2019 1800`.
//! - Canonical format is `2 Dec 2019, 6:00 PM`; stored canonical text must
//!   re-parse to the same timestamp as the original input.
//! - A single local clock; no timezone arithmetic.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// `d/m/yyyy hhmm` with 1-2 digit day/month and a fixed 4-digit time.
static INPUT_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})\s+(\d{2})(\d{2})$").expect("valid date grammar regex")
});

const CANONICAL_PARSE_FORMAT: &str = "%d %b %Y, %I:%M %p";
const CANONICAL_DISPLAY_FORMAT: &str = "%-d %b %Y, %-I:%M %p";

pub type DateResult<T> = Result<T, DateFormatError>;

/// Malformed date text on a dated-task operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormatError {
    /// Text matches neither the input grammar nor the canonical format.
    UnrecognizedPattern(String),
    /// Text matches the grammar but names an impossible calendar moment,
    /// e.g. `31/2/2019 0900` or `1/1/2019 2500`.
    InvalidDate(String),
}

impl Display for DateFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedPattern(text) => write!(
                f,
                "unrecognized date `{text}`; expected `day/month/year hhmm`, e.g. `2/12/2019 1800`"
            ),
            Self::InvalidDate(text) => write!(f, "`{text}` is not a real calendar date-time"),
        }
    }
}

impl Error for DateFormatError {}

/// Parses date text into a comparable timestamp.
///
/// Accepts both the input grammar and the canonical stored format, so
/// already-normalized dates re-parse during ordering.
///
/// # Errors
/// - `UnrecognizedPattern` when the text fits neither accepted shape.
/// - `InvalidDate` when the shape fits but the moment does not exist.
pub fn parse_date(text: &str) -> DateResult<NaiveDateTime> {
    let trimmed = text.trim();

    if let Some(captures) = INPUT_DATE_RE.captures(trimmed) {
        // The regex guarantees each capture is a short digit run.
        let day: u32 = captures[1].parse().map_err(|_| invalid(trimmed))?;
        let month: u32 = captures[2].parse().map_err(|_| invalid(trimmed))?;
        let year: i32 = captures[3].parse().map_err(|_| invalid(trimmed))?;
        let hour: u32 = captures[4].parse().map_err(|_| invalid(trimmed))?;
        let minute: u32 = captures[5].parse().map_err(|_| invalid(trimmed))?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid(trimmed))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid(trimmed))?;
        return Ok(date.and_time(time));
    }

    NaiveDateTime::parse_from_str(trimmed, CANONICAL_PARSE_FORMAT)
        .map_err(|_| DateFormatError::UnrecognizedPattern(trimmed.to_string()))
}

/// Normalizes user-entered date text into the canonical stored form.
///
/// # Errors
/// Same error kinds as [`parse_date`]; formatting never fails on a
/// successfully parsed timestamp.
pub fn format_date(text: &str) -> DateResult<String> {
    let timestamp = parse_date(text)?;
    Ok(timestamp.format(CANONICAL_DISPLAY_FORMAT).to_string())
}

fn invalid(text: &str) -> DateFormatError {
    DateFormatError::InvalidDate(text.to_string())
}
