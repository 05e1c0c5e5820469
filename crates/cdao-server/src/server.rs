//! Router construction and shared state

use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use cdao_core::Storage;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // REST API routes
        .nest("/api", api_routes())
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(handlers::subscribers::subscribe))
        .route("/subscribers", get(handlers::subscribers::list))
        .route("/contact", post(handlers::contact::submit))
        .route("/contact-messages", get(handlers::contact::list))
        .route("/deals", get(handlers::dashboard::deals))
        .route("/metrics", get(handlers::dashboard::metrics))
        .route("/activities", get(handlers::dashboard::activities))
}
