use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::sheets::SheetsError;
use crate::views::form::error_page;

pub const EXTERNAL_SERVICE_MESSAGE: &str =
    "Error submitting data to Google Sheets. Please try again later.";

#[derive(Debug)]
pub enum AppError {
    /// A required field was missing or empty.
    Validation(String),
    /// The request body could not be parsed.
    BadRequest(String),
    /// Authenticating to or appending through the spreadsheet service failed.
    ExternalService(SheetsError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::ExternalService(err) => write!(f, "External Service Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ExternalService(err) => {
                tracing::error!("Error submitting data to Google Sheets: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    EXTERNAL_SERVICE_MESSAGE.to_string(),
                )
            }
        };

        (status, error_page(&message)).into_response()
    }
}

impl From<SheetsError> for AppError {
    fn from(err: SheetsError) -> Self {
        AppError::ExternalService(err)
    }
}
