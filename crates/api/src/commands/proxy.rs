//! Credential-injecting passthrough to the vendor platform
//!
//! The dashboard never sees the bearer token; it calls these routes and gets
//! the platform's JSON back untouched.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use shiftboard_infra::{ApiError, PlatformResource};

use super::error::CommandError;
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// `GET /api/data-uploads`
pub async fn data_uploads(
    State(context): State<Arc<AppContext>>,
) -> Result<Json<Value>, CommandError> {
    relay(&context, PlatformResource::Uploads, "proxy::data_uploads").await
}

/// `GET /api/consolidated-measurements`
pub async fn consolidated_measurements(
    State(context): State<Arc<AppContext>>,
) -> Result<Json<Value>, CommandError> {
    relay(&context, PlatformResource::Measurements, "proxy::consolidated_measurements").await
}

async fn relay(
    context: &AppContext,
    resource: PlatformResource,
    command: &str,
) -> Result<Json<Value>, CommandError> {
    let start = Instant::now();
    let result = context.platform.fetch_raw(resource).await;
    log_command_execution(command, start.elapsed(), result.is_ok());

    match result {
        Ok(value) => Ok(Json(value)),
        Err(err @ ApiError::Status { .. }) => Err(CommandError::Upstream {
            status: err.status().unwrap_or(502),
            message: err.to_string(),
        }),
        Err(err) => Err(CommandError::internal(
            format!("Failed to fetch {}", resource.label()),
            err.into(),
        )),
    }
}

pub fn router() -> Router<Arc<AppContext>> {
    Router::new()
        .route("/api/data-uploads", get(data_uploads))
        .route("/api/consolidated-measurements", get(consolidated_measurements))
}
