//! HTTP handlers

pub mod contact;
pub mod dashboard;
pub mod health;
pub mod subscribers;

pub use health::health;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// User-facing error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.into(),
        }),
    )
}

/// Syntactic plausibility check for an email address.
pub(crate) fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
