//! Contact form handlers

use crate::server::AppState;
use axum::{extract::State, http::StatusCode, Json};
use cdao_core::{CdaoError, ContactMessageStore};
use cdao_types::{ContactMessage, NewContactMessage};
use serde::Serialize;
use tracing::{error, info};

use super::{error_response, is_plausible_email, ErrorResponse};

#[derive(Debug, Serialize)]
pub struct ContactMessageListResponse {
    messages: Vec<ContactMessage>,
}

pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<NewContactMessage>,
) -> Result<(StatusCode, Json<ContactMessage>), (StatusCode, Json<ErrorResponse>)> {
    if let Err(e) = validate(&req) {
        let reason = match e {
            CdaoError::Validation(reason) => reason,
            other => other.to_string(),
        };
        return Err(error_response(StatusCode::BAD_REQUEST, reason));
    }

    match state.storage.create_contact_message(req).await {
        Ok(message) => {
            info!("New contact message from: {}", message.email);
            Ok((StatusCode::CREATED, Json(message)))
        }
        Err(e) => {
            error!("Failed to store contact message: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong, please try again later",
            ))
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ContactMessageListResponse>, StatusCode> {
    match state.storage.list_contact_messages().await {
        Ok(messages) => Ok(Json(ContactMessageListResponse { messages })),
        Err(e) => {
            error!("Failed to list contact messages: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// Validation lives here, upstream of storage; the backends assume validated
// input.
fn validate(req: &NewContactMessage) -> cdao_core::Result<()> {
    let fail = |reason: &str| Err(CdaoError::Validation(reason.to_string()));

    if req.name.trim().is_empty() {
        return fail("Name is required");
    }
    if !is_plausible_email(req.email.trim()) {
        return fail("Please provide a valid email address");
    }
    if req.subject.trim().is_empty() {
        return fail("Subject is required");
    }
    if req.message.trim().is_empty() {
        return fail("Message is required");
    }
    if req.privacy_agreed != 1 {
        return fail("You must agree to the privacy policy");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> NewContactMessage {
        NewContactMessage {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            subject: "General".to_string(),
            message: "Hi".to_string(),
            organization: None,
            phone: None,
            privacy_agreed: 1,
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        assert!(validate(&valid_request()).is_ok());
    }

    #[test]
    fn rejects_missing_required_fields() {
        let mut req = valid_request();
        req.name = "  ".to_string();
        assert!(validate(&req).is_err());

        let mut req = valid_request();
        req.email = "nope".to_string();
        assert!(validate(&req).is_err());

        let mut req = valid_request();
        req.message = String::new();
        assert!(validate(&req).is_err());
    }

    #[test]
    fn rejects_without_privacy_agreement() {
        let mut req = valid_request();
        req.privacy_agreed = 0;
        assert!(validate(&req).is_err());
    }
}
