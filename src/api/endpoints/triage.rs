//! Classification endpoints.
//!
//! - `POST /api/classify`: urgency tier plus assembled guidance
//! - `POST /api/export`: the same result as a downloadable text report

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::care_log::local_timestamp;
use crate::triage::export::{EXPORT_FILENAME, EXPORT_MIME};
use crate::triage::{Responder, ResponseBundle};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub text: String,
}

/// `POST /api/classify`
pub async fn classify(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ResponseBundle>, ApiError> {
    let Json(req) = payload?;
    let bundle = ctx.core.responder().classify(&req.text)?;
    Ok(Json(bundle))
}

/// `POST /api/export`
pub async fn export(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let responder = ctx.core.responder();
    let bundle = responder.classify(&req.text)?;
    let report = responder.export_report(&req.text, &local_timestamp(), &bundle);

    Ok(attachment(EXPORT_MIME, EXPORT_FILENAME, report))
}

/// A UTF-8 body served as a file download.
pub(crate) fn attachment(mime: &str, filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, format!("{mime}; charset=utf-8")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
