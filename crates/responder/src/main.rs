//! Responder entry point.

use std::sync::Arc;

use common::SystemClock;
use responder::config::Config;
use responder::error::ServerError;
use responder::state::AppState;
use responder::{create_app, server, telemetry};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // 1. Resolve configuration once
    let config = Config::from_env();

    // 2. Initialize tracing
    telemetry::init(&config);

    // 3. Bind; failure here is fatal
    let listener = match server::bind(&config).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            return Err(err);
        }
    };

    // 4. Build the application
    let app = create_app(Arc::new(AppState::new(config, SystemClock)));

    // 5. Serve until SIGINT/SIGTERM
    if let Err(err) = server::serve(listener, app, server::shutdown_signal()).await {
        tracing::error!(error = %err, "server error");
        return Err(err);
    }

    tracing::info!("server shut down gracefully");
    Ok(())
}
