//! HTTP API module for the shift calendar engine.
//!
//! This module provides the upload form, the calendar download endpoint and
//! a JSON shift listing.

mod handlers;
mod page;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ACCEPTED_EXTENSION, FILE_FIELD, NAME_FIELD, UploadForm};
pub use response::{ApiError, ApiErrorResponse, ShiftSummary, ShiftsResponse};
pub use state::{AppState, Clock};
