use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::parser::error::ParseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Resume(#[from] ParseError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Resume(e) => resume_error_response(e),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Every pipeline failure maps to an actionable message, never a raw trace.
/// Client-correctable problems are 400s; only a genuine model outage is 5xx.
fn resume_error_response(err: &ParseError) -> (StatusCode, &'static str, String) {
    match err {
        ParseError::DocumentParse(e) => {
            tracing::warn!("PDF parse failure: {e}");
            (
                StatusCode::BAD_REQUEST,
                "INVALID_PDF",
                "The uploaded file could not be read as a PDF".to_string(),
            )
        }
        ParseError::TextExtraction(e) => {
            tracing::warn!("text extraction failure: {e}");
            (
                StatusCode::BAD_REQUEST,
                "UNREADABLE_PDF",
                "Could not extract readable text from the PDF".to_string(),
            )
        }
        ParseError::EmptyText => (
            StatusCode::BAD_REQUEST,
            "UNREADABLE_PDF",
            "Could not extract readable text from the PDF".to_string(),
        ),
        ParseError::Structuring(e) => {
            tracing::warn!("resume structuring failure: {e}");
            (
                StatusCode::BAD_REQUEST,
                "PARSE_FAILED",
                "Failed to parse the resume, please check the file and retry".to_string(),
            )
        }
        ParseError::ModelUnavailable(e) => {
            tracing::error!("LLM unavailable: {e}");
            (
                StatusCode::BAD_GATEWAY,
                "MODEL_UNAVAILABLE",
                "Resume analysis is temporarily unavailable, please retry".to_string(),
            )
        }
        ParseError::MissingContact => (
            StatusCode::BAD_REQUEST,
            "MISSING_CONTACT",
            "Could not find contact information in the resume".to_string(),
        ),
    }
}
