//! Date normalization.
//!
//! Roster date headers carry only a day and a month (`"26th Jan"`). The year
//! is inferred against a reference date supplied by the caller.
//!
//! The inference assumes the roster is processed within roughly a month of
//! the dates it covers. A December date read in January to March belongs to
//! the previous year, a January date read in October to December belongs to
//! the next year, and everything else belongs to the reference year. Rosters
//! for older or far-future periods will get the wrong year.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Three-letter month abbreviations, in calendar order.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Maps a three-letter month abbreviation (e.g. `"Jan"`) to its month number.
///
/// Matching is exact, including case.
pub fn month_number(abbreviation: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|m| *m == abbreviation)
        .map(|i| i as u32 + 1)
}

/// Infers the year of a roster month relative to the reference date.
///
/// # Example
///
/// ```
/// use shift_calendar::extraction::infer_year;
/// use chrono::NaiveDate;
///
/// let march = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// assert_eq!(infer_year(12, march), 2025);
/// assert_eq!(infer_year(1, march), 2026);
///
/// let november = NaiveDate::from_ymd_opt(2026, 11, 10).unwrap();
/// assert_eq!(infer_year(1, november), 2027);
/// ```
pub fn infer_year(month: u32, reference: NaiveDate) -> i32 {
    let current_year = reference.year();
    match (reference.month(), month) {
        (1..=3, 12) => current_year - 1,
        (10..=12, 1) => current_year + 1,
        _ => current_year,
    }
}

/// Converts a `"<day><ordinal?> <Mon>"` string into a fully qualified date.
///
/// Every non-digit character is stripped from the day token, so `"26th"`,
/// `"26"` and `"26."` all give day 26.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateFormat`] naming the original string if
/// it does not have exactly two whitespace-separated tokens, the day has no
/// digits, the month abbreviation is unknown, or the resulting date does not
/// exist.
///
/// # Example
///
/// ```
/// use shift_calendar::extraction::normalize_date;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let date = normalize_date("26th Jan", reference).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 26).unwrap());
/// ```
pub fn normalize_date(input: &str, reference: NaiveDate) -> EngineResult<NaiveDate> {
    let invalid = || EngineError::InvalidDateFormat {
        input: input.to_string(),
    };

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [day_token, month_token] = tokens.as_slice() else {
        return Err(invalid());
    };

    let day_digits: String = day_token.chars().filter(char::is_ascii_digit).collect();
    let day: u32 = day_digits.parse().map_err(|_| invalid())?;
    let month = month_number(month_token).ok_or_else(invalid)?;
    let year = infer_year(month, reference);

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
