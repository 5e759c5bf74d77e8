// Service banner and health probe handlers

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::state::AppState;

/// Root banner payload.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health probe payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Advertises the service name and version
#[instrument(name = "root", skip(_state))]
pub async fn root_handler(State(_state): State<AppState>) -> Json<RootResponse> {
    info!("Root endpoint called");

    Json(RootResponse {
        message: format!(
            "VoiceGuard API v{} - Voice ownership infrastructure",
            env!("CARGO_PKG_VERSION")
        ),
    })
}

/// Liveness probe used by the web client's status panel
#[instrument(name = "health", skip(_state))]
pub async fn health_handler(State(_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "voiceguard-api",
    })
}
