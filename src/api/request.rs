//! Request parsing for the upload endpoints.
//!
//! Both upload endpoints take a `multipart/form-data` body with an
//! `excel_file` file field and a `name_to_search` text field.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;

use super::response::{ApiError, ApiErrorResponse};

/// Name of the file field.
pub const FILE_FIELD: &str = "excel_file";

/// Name of the text field holding the person's name.
pub const NAME_FIELD: &str = "name_to_search";

/// Accepted upload extension.
pub const ACCEPTED_EXTENSION: &str = ".xlsx";

/// A validated upload.
#[derive(Debug, Clone)]
pub struct UploadForm {
    /// The name to search for.
    pub name: String,
    /// The client-supplied file name, if any.
    pub file_name: Option<String>,
    /// The workbook bytes.
    pub bytes: Vec<u8>,
}

impl UploadForm {
    /// Reads and validates the multipart body.
    ///
    /// Rejects the request before the engine runs when the file or name is
    /// missing, the file exceeds `max_bytes`, or the file name does not end
    /// in `.xlsx`.
    pub async fn from_multipart(
        mut multipart: Multipart,
        max_bytes: usize,
    ) -> Result<Self, ApiErrorResponse> {
        let mut name = None;
        let mut file = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?
        {
            match field.name() {
                Some(FILE_FIELD) => {
                    let file_name = field.file_name().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error(e, max_bytes))?;
                    file = Some((file_name, bytes.to_vec()));
                }
                Some(NAME_FIELD) => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| multipart_error(e, max_bytes))?;
                    name = Some(text);
                }
                _ => {}
            }
        }

        let (file_name, bytes) = file
            .filter(|(_, bytes)| !bytes.is_empty())
            .ok_or_else(|| ApiErrorResponse::bad_request(ApiError::missing_field(FILE_FIELD)))?;

        if bytes.len() > max_bytes {
            return Err(ApiErrorResponse::bad_request(ApiError::file_too_large(
                max_bytes,
            )));
        }

        if let Some(file_name) = &file_name {
            if !file_name.to_lowercase().ends_with(ACCEPTED_EXTENSION) {
                return Err(ApiErrorResponse::bad_request(ApiError::with_details(
                    "UNSUPPORTED_FILE_TYPE",
                    format!("Unsupported file '{}'", file_name),
                    "Only .xlsx workbooks are accepted",
                )));
            }
        }

        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiErrorResponse::bad_request(ApiError::missing_field(NAME_FIELD)))?;

        Ok(Self {
            name,
            file_name,
            bytes,
        })
    }
}

fn multipart_error(error: MultipartError, max_bytes: usize) -> ApiErrorResponse {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiErrorResponse::bad_request(ApiError::file_too_large(max_bytes))
    } else {
        ApiErrorResponse::bad_request(ApiError::new("MALFORMED_FORM", error.body_text()))
    }
}
