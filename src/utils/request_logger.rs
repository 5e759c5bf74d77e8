// Request latency logging middleware

use std::convert::Infallible;
use std::time::Instant;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Times each request and logs method, path and status once the inner
/// stack has produced a response.
pub async fn request_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response, Infallible> {
    let method: axum::http::Method = req.method().clone();
    let path: String = req.uri().path().to_owned();
    let start: Instant = Instant::now();

    let response: Response = next.run(req).await;

    info!(
        "{} {} -> {} in {:?}",
        method,
        path,
        response.status(),
        start.elapsed()
    );

    Ok(response)
}
