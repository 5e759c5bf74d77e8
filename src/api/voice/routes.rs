// Voice endpoint route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the voice registration and verification endpoints
pub fn voice_routes() -> Router<AppState> {
    Router::new()
        .route("/voice/register", get(handler::register_voice_handler))
        .route("/voice/verify", post(handler::verify_voice_handler))
}
