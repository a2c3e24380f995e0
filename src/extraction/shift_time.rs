//! Shift-time parsing.
//!
//! Shift-time labels look like `"9:00-17:30"`: one or two hour digits,
//! exactly two minute digits, and a single hyphen between start and end.

use std::sync::OnceLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::error::{EngineError, EngineResult};

/// A parsed shift-time label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftTime {
    /// When the shift starts.
    pub start: NaiveTime,
    /// `end - start` in hours.
    pub duration_hours: f64,
}

fn shift_time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{1,2}):(\d{2})-(\d{1,2}):(\d{2})").expect("shift time pattern is valid")
    })
}

/// Parses a `"H(H):MM-H(H):MM"` label into a start time and a duration.
///
/// The pattern is anchored at the start only; trailing text after the end
/// time (e.g. a note) is ignored. The duration is `end - start` and is not
/// rolled over midnight: `"23:00-01:00"` gives `-22.0` hours.
///
/// # Errors
///
/// Returns [`EngineError::InvalidShiftFormat`] if the label does not match
/// the pattern or names a time that does not exist (such as `25:00`).
///
/// # Example
///
/// ```
/// use shift_calendar::extraction::parse_shift_time;
/// use chrono::NaiveTime;
///
/// let parsed = parse_shift_time("09:00-17:30").unwrap();
/// assert_eq!(parsed.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
/// assert_eq!(parsed.duration_hours, 8.5);
/// ```
pub fn parse_shift_time(input: &str) -> EngineResult<ShiftTime> {
    let invalid = || EngineError::InvalidShiftFormat {
        input: input.to_string(),
    };

    let captures = shift_time_pattern().captures(input).ok_or_else(invalid)?;
    let number = |i: usize| -> EngineResult<u32> {
        captures
            .get(i)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(invalid)
    };

    let start = NaiveTime::from_hms_opt(number(1)?, number(2)?, 0).ok_or_else(invalid)?;
    let end = NaiveTime::from_hms_opt(number(3)?, number(4)?, 0).ok_or_else(invalid)?;

    // NaiveTime subtraction stays within one day, so no rollover happens here.
    let seconds = (end - start).num_seconds();
    Ok(ShiftTime {
        start,
        duration_hours: seconds as f64 / 3600.0,
    })
}
