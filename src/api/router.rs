//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`; every response is marked
//! `Cache-Control: no-store` because bodies may echo caregiver text.

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router over shared state.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/disclaimer", get(endpoints::health::disclaimer))
        .route("/classify", post(endpoints::triage::classify))
        .route("/export", post(endpoints::triage::export))
        .route("/sessions", post(endpoints::care_log::create_session))
        .route("/sessions/:id", delete(endpoints::care_log::end_session))
        .route(
            "/sessions/:id/log",
            get(endpoints::care_log::list)
                .post(endpoints::care_log::append)
                .delete(endpoints::care_log::clear),
        )
        .route("/sessions/:id/log/csv", get(endpoints::care_log::export_csv))
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
