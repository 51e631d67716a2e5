//! Care log endpoints.
//!
//! One log per session, created explicitly and addressed by id:
//! - `POST /api/sessions`: new session
//! - `DELETE /api/sessions/:id`: end a session and drop its log
//! - `GET | POST | DELETE /api/sessions/:id/log`: list, append, clear
//! - `GET /api/sessions/:id/log/csv`: download as CSV

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use super::triage::attachment;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::care_log::{
    local_timestamp, CareLogEntry, CareLogInput, CARE_LOG_FILENAME, CARE_LOG_MIME,
};

#[derive(Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
}

#[derive(Serialize)]
pub struct LogResponse {
    pub session_id: Uuid,
    pub entries: Vec<CareLogEntry>,
}

fn parse_session_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest("Invalid session id".into()))
}

/// `POST /api/sessions`
pub async fn create_session(
    State(ctx): State<ApiContext>,
) -> Result<(StatusCode, Json<SessionCreated>), ApiError> {
    let session_id = ctx.core.create_session()?;
    Ok((StatusCode::CREATED, Json(SessionCreated { session_id })))
}

/// `DELETE /api/sessions/:id`
pub async fn end_session(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let session_id = parse_session_id(&id)?;
    ctx.core.end_session(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/sessions/:id/log`
pub async fn list(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<LogResponse>, ApiError> {
    let session_id = parse_session_id(&id)?;
    let entries = ctx.core.with_log(session_id, |log| log.entries().to_vec())?;
    Ok(Json(LogResponse { session_id, entries }))
}

/// `POST /api/sessions/:id/log`
pub async fn append(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    payload: Result<Json<CareLogInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CareLogEntry>), ApiError> {
    let session_id = parse_session_id(&id)?;
    let Json(input) = payload?;
    let timestamp = local_timestamp();
    let entry = ctx
        .core
        .with_log_mut(session_id, |log| log.append(&input, timestamp).clone())?;

    tracing::info!(session_id = %session_id, "Care log entry added");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// `DELETE /api/sessions/:id/log`
pub async fn clear(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let session_id = parse_session_id(&id)?;
    let removed = ctx.core.with_log_mut(session_id, |log| {
        let removed = log.len();
        log.clear();
        removed
    })?;

    tracing::info!(session_id = %session_id, removed, "Care log cleared");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/sessions/:id/log/csv`
pub async fn export_csv(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let session_id = parse_session_id(&id)?;
    let csv = ctx.core.with_log(session_id, |log| log.to_csv())?;
    Ok(attachment(CARE_LOG_MIME, CARE_LOG_FILENAME, csv))
}
