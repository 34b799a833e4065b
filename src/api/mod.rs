//! HTTP surface of pingd: a single method-agnostic `/ping` route.
//!
//! Anything else falls through to axum's default `404 Not Found`.

use axum::{routing::any, Router};

pub mod ping;

/// Build the application router.
pub fn router() -> Router {
    Router::new().route("/ping", any(ping::ping))
}
