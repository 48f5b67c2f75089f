//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::{Clock, HealthStatus};

use crate::state::AppState;

/// GET /health — liveness probe; always 200 while the process is serving.
pub async fn check<C: Clock>(State(state): State<Arc<AppState<C>>>) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(state.clock.now()))
}
