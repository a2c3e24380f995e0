//! Calendar emission.
//!
//! Maps shift records onto calendar events in the configured timezone and
//! renders them as an iCalendar document.

mod event;
mod ics;

pub use event::{CalendarEvent, build_events, event_uid, localize};
pub use ics::{PRODUCT_ID, render_ics};
