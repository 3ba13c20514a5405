//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::AdviceService;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub upstreams: UpstreamStatus,
}

#[derive(Serialize)]
pub struct UpstreamStatus {
    pub weather: String,
    pub advisor: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let weather = if state.config.weather.api_key.trim().is_empty() {
        "missing api key"
    } else {
        "configured"
    };

    // Check advice server reachability
    let advisor = if AdviceService::new(state.advisor_client).is_available().await {
        "available"
    } else {
        "offline"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstreams: UpstreamStatus {
            weather: weather.to_string(),
            advisor: advisor.to_string(),
        },
    })
}
