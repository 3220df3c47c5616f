//! API error handling
//!
//! Every callback rejection is a 400 with the same body, so callers cannot
//! tell a bad signature from a malformed payload.

use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejecting request");
        (StatusCode::BAD_REQUEST, "Bad Request").into_response()
    }
}

/// A callback that cannot be verified or decoded is rejected, never deferred
impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}
