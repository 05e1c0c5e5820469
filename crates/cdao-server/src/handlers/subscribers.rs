//! Subscription handlers

use crate::server::AppState;
use axum::{extract::State, http::StatusCode, Json};
use cdao_core::{CdaoError, SubscriberStore};
use cdao_types::{SubscribeRequest, Subscriber};
use serde::Serialize;
use tracing::{error, info};

use super::{error_response, is_plausible_email, ErrorResponse};

#[derive(Debug, Serialize)]
pub struct SubscriberListResponse {
    subscribers: Vec<Subscriber>,
}

pub async fn subscribe(
    State(state): State<AppState>,
    Json(req): Json<SubscribeRequest>,
) -> Result<(StatusCode, Json<Subscriber>), (StatusCode, Json<ErrorResponse>)> {
    let email = req.email.trim().to_lowercase();

    if !is_plausible_email(&email) {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Please provide a valid email address",
        ));
    }

    match state.storage.create_subscriber(&email).await {
        Ok(subscriber) => {
            info!("New subscriber: {}", subscriber.email);
            Ok((StatusCode::CREATED, Json(subscriber)))
        }
        Err(CdaoError::DuplicateEmail(_)) => Err(error_response(
            StatusCode::CONFLICT,
            "This email is already subscribed",
        )),
        Err(e) => {
            error!("Failed to create subscriber: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong, please try again later",
            ))
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<SubscriberListResponse>, StatusCode> {
    match state.storage.list_subscribers().await {
        Ok(subscribers) => Ok(Json(SubscriberListResponse { subscribers })),
        Err(e) => {
            error!("Failed to list subscribers: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
