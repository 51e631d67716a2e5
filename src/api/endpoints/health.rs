//! Health check and safety disclaimer.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub active_sessions: usize,
}

/// `GET /api/health`: liveness plus session count.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let active_sessions = ctx.core.session_count()?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
        active_sessions,
    }))
}

#[derive(Serialize)]
pub struct DisclaimerResponse {
    pub app_name: &'static str,
    pub disclaimer: &'static str,
    pub about: &'static str,
}

/// `GET /api/disclaimer`: safety note to show before any guidance.
pub async fn disclaimer() -> Json<DisclaimerResponse> {
    Json(DisclaimerResponse {
        app_name: config::APP_NAME,
        disclaimer: config::DISCLAIMER,
        about: config::ABOUT,
    })
}
