//! HTTP request handlers for the shift calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::extraction::ShiftExtractor;

use super::page::UPLOAD_PAGE;
use super::request::UploadForm;
use super::response::{ApiError, ApiErrorResponse, ShiftsResponse};
use super::state::AppState;

/// Extra room above the upload limit for multipart framing and the name field.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config().max_upload_bytes + FORM_OVERHEAD_BYTES;
    Router::new()
        .route("/", get(upload_page_handler).post(calendar_handler))
        .route("/shifts", post(shifts_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Handler for GET / : the upload form.
async fn upload_page_handler() -> Html<&'static str> {
    Html(UPLOAD_PAGE)
}

/// Handler for GET /health.
async fn health_handler() -> &'static str {
    "ok"
}

/// Handler for POST / : returns the shifts as an `.ics` attachment.
async fn calendar_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar request");

    let form = match read_form(&state, multipart).await {
        Ok(form) => form,
        Err(err) => return reject(correlation_id, err),
    };

    let start_time = Instant::now();
    let name = form.name.clone();
    let result = run_blocking(&state, move |extractor, today, now| {
        extractor.to_calendar(&form.bytes, &form.name, today, now)
    })
    .await;

    match result {
        Ok(ics) => {
            info!(
                correlation_id = %correlation_id,
                name = %name,
                bytes = ics.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Calendar generated"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/calendar; charset=utf-8"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=shifts.ics",
                    ),
                ],
                ics,
            )
                .into_response()
        }
        Err(err) => reject(correlation_id, err),
    }
}

/// Handler for POST /shifts : returns the extracted shifts as JSON.
async fn shifts_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift listing request");

    let form = match read_form(&state, multipart).await {
        Ok(form) => form,
        Err(err) => return reject(correlation_id, err),
    };

    let name = form.name.clone();
    let result = run_blocking(&state, move |extractor, today, _| {
        extractor.extract(&form.bytes, &form.name, today)
    })
    .await;

    match result {
        Ok(extraction) => {
            info!(
                correlation_id = %correlation_id,
                name = %name,
                shifts = extraction.records.len(),
                "Shift listing generated"
            );
            (StatusCode::OK, Json(ShiftsResponse::new(name, &extraction))).into_response()
        }
        Err(err) => reject(correlation_id, err),
    }
}

async fn read_form(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadForm, ApiErrorResponse> {
    let multipart = multipart.map_err(|rejection| {
        ApiErrorResponse::bad_request(ApiError::new("MALFORMED_FORM", rejection.body_text()))
    })?;
    UploadForm::from_multipart(multipart, state.config().max_upload_bytes).await
}

/// Runs an engine call on the blocking pool with today's date and the current instant.
async fn run_blocking<T, F>(state: &AppState, work: F) -> Result<T, ApiErrorResponse>
where
    T: Send + 'static,
    F: FnOnce(&ShiftExtractor, NaiveDate, DateTime<Utc>) -> Result<T, EngineError> + Send + 'static,
{
    let extractor = state.extractor_handle();
    let today = state.today()?;
    let now = state.now();

    tokio::task::spawn_blocking(move || work(&extractor, today, now))
        .await
        .map_err(|err| ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::with_details("INTERNAL_ERROR", "Extraction task failed", err.to_string()),
        })?
        .map_err(ApiErrorResponse::from)
}

fn reject(correlation_id: Uuid, err: ApiErrorResponse) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %err.error.code,
        error = %err.error.message,
        "Request rejected"
    );
    err.into_response()
}
