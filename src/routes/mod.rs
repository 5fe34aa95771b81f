//! HTTP route handlers.
//!
//! A single route exists: the root liveness line. It is served with
//! `Cache-Control: no-store` so orchestrator probes always hit the process
//! rather than an upstream cache, and the whole router is wrapped in a trace
//! layer for per-request logs. Any other path falls through to the default
//! 404 response.

pub mod root;

use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::CACHE_CONTROL_ROOT;

/// Creates the Axum router.
pub fn create_router() -> Router {
    let root_routes = Router::new()
        .route("/", get(root::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_ROOT),
        ));

    Router::new()
        .merge(root_routes)
        .layer(TraceLayer::new_for_http())
}
