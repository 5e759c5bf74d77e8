// Service info route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the service banner and health endpoints
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::root_handler))
        .route("/health", get(handler::health_handler))
}
