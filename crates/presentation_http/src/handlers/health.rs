//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Liveness check - always `OK` while the process serves requests
pub async fn health_check() -> &'static str {
    "OK"
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub version: String,
    /// Environment names of credentials that are not configured
    pub missing: Vec<String>,
}

/// Readiness check - are all credentials configured?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let missing: Vec<String> = state
        .config
        .missing_credentials()
        .into_iter()
        .map(str::to_string)
        .collect();

    let ready = missing.is_empty();
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            version: env!("CARGO_PKG_VERSION").to_string(),
            missing,
        }),
    )
}
