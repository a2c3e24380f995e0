//! Shift record model.
//!
//! A [`ShiftRecord`] is the validated output unit of extraction and the
//! only input to the calendar emitter.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single shift recovered from a roster grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Canonical label of the tab the shift was found on.
    pub sheet: String,
    /// The fully qualified shift date.
    pub date: NaiveDate,
    /// The shift-time cell text exactly as it appeared in the roster.
    pub shift_time: String,
    /// The start time of the shift.
    pub start_time: NaiveTime,
    /// Duration in hours. Negative when the end time precedes the start time.
    pub duration_hours: f64,
}

impl ShiftRecord {
    /// Returns the date as `DD/MM/YYYY`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_calendar::models::ShiftRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let record = ShiftRecord {
    ///     sheet: "2/6-1/2".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 6, 3).unwrap(),
    ///     shift_time: "8:00-16:00".to_string(),
    ///     start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    ///     duration_hours: 8.0,
    /// };
    /// assert_eq!(record.formatted_date(), "03/06/2026");
    /// assert_eq!(record.formatted_start(), "08:00");
    /// ```
    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// Returns the start time as `HH:MM`.
    pub fn formatted_start(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    /// Returns the duration as a chrono [`Duration`], rounded to the second.
    pub fn duration(&self) -> Duration {
        Duration::seconds((self.duration_hours * 3600.0).round() as i64)
    }

    /// Returns the naive start date-time.
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// Returns true when the shift ends before it starts.
    pub fn has_negative_duration(&self) -> bool {
        self.duration_hours < 0.0
    }
}
