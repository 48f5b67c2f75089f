//! HTTP responder for deployment smoke tests.
//!
//! Serves a liveness probe at `/health` and a greeting that echoes the
//! deployed version and environment at `/`. Every other method or path
//! gets a JSON 404.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use common::Clock;
use tower_http::trace::TraceLayer;

use routes::fallback::not_found;
use state::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// Known paths carry a method fallback so a non-GET request is answered
/// with 404 rather than axum's default 405.
pub fn create_app<C: Clock>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/", get(routes::greeting::greet::<C>).fallback(not_found))
        .route("/health", get(routes::health::check::<C>).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
