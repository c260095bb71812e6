//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (both fragments are on disk)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::server::error::ServerResult;
use crate::server::state::AppState;

/// Files every page fetches; without them pages render without chrome
pub const REQUIRED_FRAGMENTS: [&str; 2] = ["_sidebar.html", "_header.html"];

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub site_dir: String,
    pub missing_fragments: Vec<String>,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// 200 when the site directory holds both fragments, 503 otherwise.
pub async fn readiness(State(state): State<Arc<AppState>>) -> ServerResult<StatusCode> {
    if missing_fragments(&state).await?.is_empty() {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::SERVICE_UNAVAILABLE)
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> ServerResult<Json<HealthResponse>> {
    let missing = missing_fragments(&state).await?;
    let status = if missing.is_empty() { "healthy" } else { "degraded" };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        site_dir: state.config.site_dir.display().to_string(),
        missing_fragments: missing,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

async fn missing_fragments(state: &AppState) -> ServerResult<Vec<String>> {
    let mut missing = Vec::new();
    for name in REQUIRED_FRAGMENTS {
        let path = state.config.site_dir.join(name);
        if !tokio::fs::try_exists(&path).await? {
            missing.push(name.to_string());
        }
    }
    Ok(missing)
}
