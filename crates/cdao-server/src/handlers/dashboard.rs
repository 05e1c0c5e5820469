//! Demo sales dashboard handlers

use crate::server::AppState;
use axum::{extract::State, http::StatusCode, Json};
use cdao_core::DashboardStore;
use cdao_types::{Activity, Deal, Metric};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct DealListResponse {
    deals: Vec<Deal>,
}

#[derive(Debug, Serialize)]
pub struct MetricListResponse {
    metrics: Vec<Metric>,
}

#[derive(Debug, Serialize)]
pub struct ActivityListResponse {
    activities: Vec<Activity>,
}

pub async fn deals(State(state): State<AppState>) -> Result<Json<DealListResponse>, StatusCode> {
    match state.storage.list_deals().await {
        Ok(deals) => Ok(Json(DealListResponse { deals })),
        Err(e) => {
            error!("Failed to list deals: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn metrics(
    State(state): State<AppState>,
) -> Result<Json<MetricListResponse>, StatusCode> {
    match state.storage.list_metrics().await {
        Ok(metrics) => Ok(Json(MetricListResponse { metrics })),
        Err(e) => {
            error!("Failed to list metrics: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn activities(
    State(state): State<AppState>,
) -> Result<Json<ActivityListResponse>, StatusCode> {
    match state.storage.list_activities().await {
        Ok(activities) => Ok(Json(ActivityListResponse { activities })),
        Err(e) => {
            error!("Failed to list activities: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
