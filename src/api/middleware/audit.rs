//! Request audit logging.
//!
//! Logs method, path, status and latency for every request. Bodies are
//! never read here, so caregiver text stays out of the logs.

use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

pub async fn log_access(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if response.status().is_server_error() {
        tracing::warn!(%method, path = %path, status, elapsed_ms, "API request failed");
    } else {
        tracing::info!(%method, path = %path, status, elapsed_ms, "API request");
    }

    response
}
