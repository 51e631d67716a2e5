//! HTTP shell over the triage core.
//!
//! Exposes classification, report export and the session-scoped care
//! log as JSON/text endpoints under `/api/`. `api_router()` returns a
//! `Router` that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server, ApiServer, ServerError, ServerSession};
pub use types::ApiContext;
