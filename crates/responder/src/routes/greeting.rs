//! Greeting endpoint echoing deployment metadata.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::{Clock, GreetingPayload};

use crate::state::AppState;

/// GET / — returns the fixed greeting with the configured version and environment.
pub async fn greet<C: Clock>(State(state): State<Arc<AppState<C>>>) -> Json<GreetingPayload> {
    let config = &state.config;
    Json(GreetingPayload::new(
        config.app_version.as_str(),
        config.environment.as_str(),
        state.clock.now(),
    ))
}
