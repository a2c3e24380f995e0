//! iCalendar (RFC 5545) rendering.
//!
//! Event times are written in UTC, so the document needs no `VTIMEZONE`
//! component. `DTSTAMP` is supplied by the caller to keep output reproducible.
//! Line folding and CRLF framing are left to the `ical` generator.

use chrono::{DateTime, TimeZone, Utc};
use ical::generator::Emitter;
use ical::parser::ical::component::{IcalCalendar, IcalEvent};
use ical::property::Property;

use super::event::CalendarEvent;

/// Product identifier written to every calendar.
pub const PRODUCT_ID: &str = "-//shift-calendar//Roster Export//EN";

/// Renders events as an iCalendar document.
///
/// An empty event list yields a `VCALENDAR` with no components. Strict
/// RFC 5545 readers reject that; callers that must always produce an
/// importable file should refuse empty input first, as
/// [`ShiftExtractor::to_calendar`](crate::extraction::ShiftExtractor::to_calendar)
/// does when `require_shifts` is set.
///
/// # Example
///
/// ```
/// use shift_calendar::calendar::render_ics;
/// use chrono::{TimeZone, Utc};
///
/// let ics = render_ics(&[], Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap());
/// assert!(ics.starts_with("BEGIN:VCALENDAR"));
/// assert!(ics.trim_end().ends_with("END:VCALENDAR"));
/// ```
pub fn render_ics(events: &[CalendarEvent], generated_at: DateTime<Utc>) -> String {
    let mut calendar = IcalCalendar::new();
    calendar.properties = vec![
        property("VERSION", "2.0"),
        property("PRODID", PRODUCT_ID),
        property("CALSCALE", "GREGORIAN"),
        property("METHOD", "PUBLISH"),
    ];

    let stamp = utc_stamp(&generated_at);
    calendar.events = events
        .iter()
        .map(|event| {
            let mut vevent = IcalEvent::new();
            vevent.properties = vec![
                property("UID", event.uid.as_str()),
                property("DTSTAMP", stamp.as_str()),
                property("DTSTART", utc_stamp(&event.start)),
                property("DTEND", utc_stamp(&event.end)),
                property("SUMMARY", event.title.as_str()),
                property("DESCRIPTION", event.description.as_str()),
            ];
            vevent
        })
        .collect();

    calendar.generate()
}

fn property(name: &str, value: impl Into<String>) -> Property {
    Property {
        name: name.to_string(),
        params: None,
        value: Some(value.into()),
    }
}

fn utc_stamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc).format("%Y%m%dT%H%M%SZ").to_string()
}
