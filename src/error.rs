//! Error types for the shift calendar engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while turning a roster workbook
//! into calendar events.

use thiserror::Error;

/// The main error type for the shift calendar engine.
///
/// All fallible operations in the engine return this error type. Tabs whose
/// titles cannot be canonicalised and grids without an anchor are not errors;
/// they are reported as [`SkippedTab`](crate::extraction::SkippedTab) values
/// or simply contribute no shifts.
///
/// # Example
///
/// ```
/// use shift_calendar::error::EngineError;
///
/// let error = EngineError::InvalidDateFormat {
///     input: "26th Foo".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date format: '26th Foo'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The uploaded bytes could not be read as a workbook.
    #[error("Unreadable workbook: {message}")]
    WorkbookUnreadable {
        /// A description of the reader failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured timezone is not a known IANA zone.
    #[error("Unknown timezone: {name}")]
    InvalidTimezone {
        /// The timezone name as configured.
        name: String,
    },

    /// The name to search for was empty.
    #[error("Name to search for must not be empty")]
    InvalidName,

    /// A date cell did not look like `"<day> <Mon>"`.
    #[error("Invalid date format: '{input}'")]
    InvalidDateFormat {
        /// The original cell text.
        input: String,
    },

    /// A shift-time cell did not look like `"HH:MM-HH:MM"`.
    #[error("Invalid shift format: '{input}'")]
    InvalidShiftFormat {
        /// The original cell text.
        input: String,
    },

    /// A cell the grid layout requires lies outside the grid.
    #[error("Sheet '{sheet}' has no {what} cell at row {row}, column {col}")]
    MissingCell {
        /// The canonical label of the sheet being scanned.
        sheet: String,
        /// Which header cell was being read ("date" or "shift time").
        what: &'static str,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index, `-1` when left of the first column.
        col: isize,
    },

    /// A shift record could not be accepted or turned into an event.
    #[error("Invalid shift on {date}: {message}")]
    InvalidShift {
        /// The shift date as `DD/MM/YYYY`.
        date: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// An I/O operation around the engine failed.
    #[error("I/O error ({context}): {message}")]
    Io {
        /// What was being read or written.
        context: String,
        /// The underlying error.
        message: String,
    },

    /// No shifts were found for the requested name.
    #[error("No shifts detected for '{name}'")]
    NoShiftsFound {
        /// The name that was searched for.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<calamine::XlsxError> for EngineError {
    fn from(error: calamine::XlsxError) -> Self {
        EngineError::WorkbookUnreadable {
            message: error.to_string(),
        }
    }
}
