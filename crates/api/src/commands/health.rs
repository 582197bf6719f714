//! Liveness endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;

/// Response for `GET /health`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    /// Unix milliseconds, 0 if the feed was never fetched.
    pub last_uploads_update: i64,
    pub last_measurements_update: i64,
}

pub async fn health_check(State(context): State<Arc<AppContext>>) -> Json<HealthResponse> {
    let state = context.store.snapshot();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: context.uptime_secs(),
        last_uploads_update: state.last_uploads_update,
        last_measurements_update: state.last_measurements_update,
    })
}

pub fn router() -> Router<Arc<AppContext>> {
    Router::new().route("/health", get(health_check))
}
