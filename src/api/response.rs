//! Response types for the shift calendar API.
//!
//! This module defines the error response structures, the JSON shift
//! listing, and the mapping from engine errors to HTTP responses.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::extraction::{Extraction, SkippedTab};
use crate::models::ShiftRecord;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a missing field error response.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_details(
            "MISSING_FIELD",
            format!("missing field: {}", field),
            format!("Required field '{}' was not provided in the request", field),
        )
    }

    /// Creates a file too large error response.
    pub fn file_too_large(limit_bytes: usize) -> Self {
        Self::new(
            "FILE_TOO_LARGE",
            format!(
                "File size exceeds the allowed limit of {}MB.",
                limit_bytes / (1024 * 1024)
            ),
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::WorkbookUnreadable { message: reason } => Self::bad_request(
                ApiError::with_details(
                    "UNREADABLE_WORKBOOK",
                    "The uploaded file could not be read as an .xlsx workbook",
                    reason,
                ),
            ),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidTimezone { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::Io { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("INTERNAL_ERROR", "Internal error", message),
            },
            EngineError::InvalidName => {
                Self::bad_request(ApiError::new("INVALID_NAME", message))
            }
            EngineError::InvalidDateFormat { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_DATE_FORMAT",
                message,
                "A date header next to one of your shifts is not of the form '26th Jan'",
            )),
            EngineError::InvalidShiftFormat { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_SHIFT_FORMAT",
                message,
                "A shift time label next to one of your shifts is not of the form 'HH:MM-HH:MM'",
            )),
            EngineError::MissingCell { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_LAYOUT",
                message,
                "The roster does not have dates below 'Sunday' and shift times to its left",
            )),
            EngineError::InvalidShift { .. } => {
                Self::bad_request(ApiError::new("INVALID_SHIFT", message))
            }
            EngineError::NoShiftsFound { .. } => {
                Self::bad_request(ApiError::new("NO_SHIFTS_FOUND", message))
            }
        }
    }
}

/// One shift in the JSON listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSummary {
    /// Canonical label of the source tab.
    pub sheet: String,
    /// Date as `DD/MM/YYYY`.
    pub date: String,
    /// Shift-time label as written in the roster.
    pub shift_time: String,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// Duration in hours.
    pub duration: f64,
}

impl From<&ShiftRecord> for ShiftSummary {
    fn from(record: &ShiftRecord) -> Self {
        Self {
            sheet: record.sheet.clone(),
            date: record.formatted_date(),
            shift_time: record.shift_time.clone(),
            start_time: record.formatted_start(),
            duration: record.duration_hours,
        }
    }
}

/// Body of the JSON shift listing.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftsResponse {
    /// The name that was searched for.
    pub name: String,
    /// Shifts in discovery order.
    pub shifts: Vec<ShiftSummary>,
    /// Tabs that were not loaded.
    pub skipped_tabs: Vec<SkippedTab>,
}

impl ShiftsResponse {
    /// Builds the listing from an extraction.
    pub fn new(name: impl Into<String>, extraction: &Extraction) -> Self {
        Self {
            name: name.into(),
            shifts: extraction.records.iter().map(ShiftSummary::from).collect(),
            skipped_tabs: extraction.skipped_tabs.clone(),
        }
    }
}
