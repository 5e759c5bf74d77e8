// Service entry point: logging, listener setup, graceful serve

use anyhow::Result;
use axum::{serve, Router};
use tokio::net::TcpListener;

use voiceguard_api::core::{logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();

    let app: Router = server::create_app();
    let listener: TcpListener = server::setup_listener().await?;

    tracing::info!("VoiceGuard API listening on {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}
