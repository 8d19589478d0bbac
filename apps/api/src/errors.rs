use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The wrong-phone case of invalid input: the trainee exists but the
    /// submitted last four digits do not match the roster.
    #[error("Phone number does not match the registered number")]
    PhoneMismatch,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Roster schema error: {0}")]
    SchemaError(String),

    #[error("Slot {0} has no remaining capacity")]
    CapacityExhausted(String),

    #[error("Trainee {0} already has an assignment")]
    AlreadyAssigned(String),

    #[error("Letter template not found: {0}")]
    TemplateMissing(String),

    #[error("Roster file not found: {0}")]
    StoreMissing(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_)
            | AppError::PhoneMismatch
            | AppError::CapacityExhausted(_)
            | AppError::AlreadyAssigned(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SchemaError(_)
            | AppError::TemplateMissing(_)
            | AppError::StoreMissing(_)
            | AppError::Storage(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::PhoneMismatch => "PHONE_MISMATCH",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::SchemaError(_) => "SCHEMA_ERROR",
            AppError::CapacityExhausted(_) => "CAPACITY_EXHAUSTED",
            AppError::AlreadyAssigned(_) => "ALREADY_ASSIGNED",
            AppError::TemplateMissing(_) => "TEMPLATE_MISSING",
            AppError::StoreMissing(_) => "STORE_MISSING",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The message shown to the caller. Storage and internal failures are
    /// logged in full and surfaced generically.
    pub fn public_message(&self) -> String {
        match self {
            AppError::PhoneMismatch => {
                "Phone number does not match. Enter the last 4 digits of your registered phone."
                    .to_string()
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                "A storage error occurred".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            AppError::SchemaError(_) | AppError::TemplateMissing(_) | AppError::StoreMissing(_) => {
                tracing::error!("{self}");
                self.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "ok": false,
            "error": self.public_message(),
            "code": self.code(),
        }));

        (self.status(), body).into_response()
    }
}

/// Renders an `AppError` as a bare `text/plain` message, for endpoints whose
/// success body is a file rather than JSON.
#[derive(Debug)]
pub struct PlainTextError(pub AppError);

impl From<AppError> for PlainTextError {
    fn from(err: AppError) -> Self {
        PlainTextError(err)
    }
}

impl IntoResponse for PlainTextError {
    fn into_response(self) -> Response {
        (
            self.0.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.public_message(),
        )
            .into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("JSON: {err}"))
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Storage(format!("CSV: {err}"))
    }
}

impl From<calamine::Error> for AppError {
    fn from(err: calamine::Error) -> Self {
        AppError::Storage(format!("spreadsheet: {err}"))
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::Storage(format!("DOCX archive: {err}"))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(err.into())
    }
}
