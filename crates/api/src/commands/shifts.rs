//! Display-ready shift list

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shiftboard_core::utils::format::{format_duration, format_group_time_range, group_title};
use shiftboard_domain::{ShiftGroup, ShiftType};

use crate::context::AppContext;

/// One row of the shift list as the dashboard renders it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSummary {
    pub id: String,
    pub title: String,
    pub shift_type: ShiftType,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// "8:00 AM - 4:00 PM", empty when no measurement has usable times.
    pub time_range: String,
    pub measurement_count: usize,
    pub total_duration: String,
}

impl From<&ShiftGroup> for ShiftSummary {
    fn from(group: &ShiftGroup) -> Self {
        let seconds: f64 = group.measurements.iter().map(|measurement| measurement.duration_sec).sum();
        Self {
            id: group.id.clone(),
            title: group_title(group),
            shift_type: group.shift_type,
            date: group.date,
            end_date: group.end_date,
            time_range: format_group_time_range(group),
            measurement_count: group.measurements.len(),
            total_duration: format_duration(seconds),
        }
    }
}

pub async fn list_shifts(State(context): State<Arc<AppContext>>) -> Json<Vec<ShiftSummary>> {
    Json(context.store.shift_groups().iter().map(ShiftSummary::from).collect())
}

pub fn router() -> Router<Arc<AppContext>> {
    Router::new().route("/api/shifts", get(list_shifts))
}
