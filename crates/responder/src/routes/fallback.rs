//! Catch-all for unmatched paths and unsupported methods.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Answers 404 with an Express-style `Cannot <METHOD> <path>` message.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Cannot {method} {}", uri.path()))
}
