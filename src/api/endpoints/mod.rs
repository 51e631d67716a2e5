//! API endpoint handlers.
//!
//! Handlers are thin: they parse the request, call into `triage` or the
//! session store, and map errors through `ApiError`.

pub mod care_log;
pub mod health;
pub mod triage;
