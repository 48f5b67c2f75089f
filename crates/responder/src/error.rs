//! Error types for the responder: HTTP-facing and startup.

use std::io;
use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request's method and path.
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

/// Fatal errors raised while bringing the server up or running it.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound (port in use, no permission, ...).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The accept loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
