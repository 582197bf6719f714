//! Data store routes: snapshot, refresh, combine, clear, sensor lookup

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use shiftboard_core::DataState;
use shiftboard_domain::{SensorReport, ShiftGroup};

use super::error::CommandError;
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Body of `POST /api/shifts/combine`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombineRequest {
    pub group_ids: Vec<String>,
    #[serde(default)]
    pub custom_name: String,
}

pub async fn get_state(State(context): State<Arc<AppContext>>) -> Json<DataState> {
    Json(context.store.snapshot())
}

/// Refetch uploads; the failure text is also recorded in the state's `error`.
pub async fn refresh_uploads(
    State(context): State<Arc<AppContext>>,
) -> Result<Json<DataState>, CommandError> {
    let start = Instant::now();
    let result = context.store.fetch_uploads().await;
    log_command_execution("store::refresh_uploads", start.elapsed(), result.is_ok());

    refresh_outcome(&context, result)
}

/// Refetch measurements and re-derive the shift groups.
pub async fn refresh_measurements(
    State(context): State<Arc<AppContext>>,
) -> Result<Json<DataState>, CommandError> {
    let start = Instant::now();
    let result = context.store.fetch_measurements().await;
    log_command_execution("store::refresh_measurements", start.elapsed(), result.is_ok());

    refresh_outcome(&context, result)
}

fn refresh_outcome(
    context: &AppContext,
    result: shiftboard_domain::Result<()>,
) -> Result<Json<DataState>, CommandError> {
    let snapshot = context.store.snapshot();
    match result {
        Ok(()) => Ok(Json(snapshot)),
        Err(_) => Err(CommandError::Upstream {
            status: StatusCode::BAD_GATEWAY.as_u16(),
            message: snapshot.error.unwrap_or_else(|| "Failed to refresh data".to_string()),
        }),
    }
}

pub async fn combine_shifts(
    State(context): State<Arc<AppContext>>,
    Json(request): Json<CombineRequest>,
) -> Json<Vec<ShiftGroup>> {
    let start = Instant::now();
    let groups = context.store.combine_shifts(&request.group_ids, &request.custom_name).await;
    log_command_execution("store::combine_shifts", start.elapsed(), true);

    Json(groups)
}

pub async fn clear_state(State(context): State<Arc<AppContext>>) -> StatusCode {
    context.store.clear_data().await;
    StatusCode::NO_CONTENT
}

pub async fn sensor_report(
    State(context): State<Arc<AppContext>>,
    Path(uuid): Path<String>,
) -> Result<Json<SensorReport>, CommandError> {
    context
        .store
        .sensor_report(&uuid)
        .map(Json)
        .ok_or_else(|| CommandError::NotFound(format!("Unknown measurement: {uuid}")))
}

pub fn router() -> Router<Arc<AppContext>> {
    Router::new()
        .route("/api/state", get(get_state).delete(clear_state))
        .route("/api/uploads/refresh", post(refresh_uploads))
        .route("/api/measurements/refresh", post(refresh_measurements))
        .route("/api/shifts/combine", post(combine_shifts))
        .route("/api/measurements/{uuid}/sensors", get(sensor_report))
}
