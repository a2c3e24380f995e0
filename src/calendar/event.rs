//! Calendar events built from shift records.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::{OffsetComponents, Tz};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::extraction::TargetName;
use crate::models::ShiftRecord;

/// One calendar event for one shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    /// Stable identifier derived from the shift date and the person's name.
    pub uid: String,
    /// Event title.
    pub title: String,
    /// Start, localized to the configured timezone.
    pub start: DateTime<Tz>,
    /// End: start plus the shift duration.
    pub end: DateTime<Tz>,
    /// Free-text description naming the shift label and source tab.
    pub description: String,
}

/// Derives the event identifier for a shift.
///
/// The identifier is the hex SHA-256 of `"<DD/MM/YYYY>|<lower-cased name>"`
/// followed by `@<domain>`, so re-processing the same roster for the same
/// person yields the same identifiers.
///
/// The start time is not part of the input: two shifts for one person on
/// the same date share an identifier, and calendar clients keep only one
/// of them.
///
/// # Example
///
/// ```
/// use shift_calendar::calendar::event_uid;
///
/// let a = event_uid("10/06/2026", "alex", "shift-calendar");
/// let b = event_uid("10/06/2026", "alex", "shift-calendar");
/// assert_eq!(a, b);
/// assert!(a.ends_with("@shift-calendar"));
/// ```
pub fn event_uid(formatted_date: &str, normalized_name: &str, domain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(formatted_date.as_bytes());
    hasher.update(b"|");
    hasher.update(normalized_name.as_bytes());
    format!("{}@{}", hex::encode(hasher.finalize()), domain)
}

/// Builds one event per shift record.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimezone`](crate::error::EngineError::InvalidTimezone) for an unknown configured zone.
/// Start times on a daylight-saving change never fail; see [`localize`].
pub fn build_events(
    records: &[ShiftRecord],
    name: &TargetName,
    config: &EngineConfig,
) -> EngineResult<Vec<CalendarEvent>> {
    let tz = config.tz()?;

    Ok(records
        .iter()
        .map(|record| {
            let start = localize(&tz, &record.start());
            CalendarEvent {
                uid: event_uid(&record.formatted_date(), name.normalized(), &config.uid_domain),
                title: config.event_title.clone(),
                start,
                end: start + record.duration(),
                description: format!("Shift {} (sheet {})", record.shift_time, record.sheet),
            }
        })
        .collect())
}

/// Places a wall-clock time in `tz`, reading it as standard time.
///
/// An ambiguous time (clocks going back) resolves to the standard-time
/// instant, the later of the two. A time inside a spring-forward gap is
/// read with the zone's standard offset, which lands just past the gap.
pub fn localize(tz: &Tz, local: &NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(local) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(_, later) => later,
        LocalResult::None => {
            let standard = tz.offset_from_utc_datetime(local).base_utc_offset();
            tz.from_utc_datetime(&(*local - standard))
        }
    }
}
