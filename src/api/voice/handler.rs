// Voice registration and verification handlers.
// v0.1.0 scaffold: both endpoints acknowledge the call without touching the
// fingerprinting engine yet.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::state::AppState;

/// Placeholder acknowledgment payload shared by the voice endpoints.
#[derive(Debug, Serialize)]
pub struct VoiceEndpointResponse {
    pub message: &'static str,
}

/// Voice registration endpoint
#[instrument(name = "register_voice", skip(_state))]
pub async fn register_voice_handler(
    State(_state): State<AppState>,
) -> Json<VoiceEndpointResponse> {
    info!("Voice registration endpoint called");

    Json(VoiceEndpointResponse {
        message: "Voice registration endpoint - TODO: implement",
    })
}

/// Voice verification endpoint. Reads the uploaded body so the global size
/// limit applies to recordings, but performs no verification.
#[instrument(name = "verify_voice", skip(_state, body))]
pub async fn verify_voice_handler(
    State(_state): State<AppState>,
    body: Bytes,
) -> Json<VoiceEndpointResponse> {
    info!("Voice verification endpoint called ({} byte payload)", body.len());

    Json(VoiceEndpointResponse {
        message: "Voice verification endpoint - TODO: implement",
    })
}
