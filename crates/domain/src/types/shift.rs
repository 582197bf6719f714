//! Shift groups

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::measurement::Measurement;
use crate::impl_label_conversions;

/// How a group was formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    #[serde(rename = "Day Shift")]
    Day,
    #[serde(rename = "Night Shift")]
    Night,
    #[serde(rename = "Multi-day")]
    MultiDay,
    #[serde(rename = "Custom")]
    Custom,
}

impl_label_conversions!(ShiftType {
    Day => "Day Shift",
    Night => "Night Shift",
    MultiDay => "Multi-day",
    Custom => "Custom",
});

/// A bucket of measurements belonging to one work period.
///
/// Inferred groups (day, night, multi-day) are rebuilt on every fetch and
/// keyed by their date range. Custom groups are created by combining
/// groups, carry a generated id and survive refetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftGroup {
    pub id: String,
    /// Calendar day (UTC) the group starts on; also its sort date.
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub shift_type: ShiftType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl ShiftGroup {
    pub fn is_custom(&self) -> bool {
        self.shift_type == ShiftType::Custom
    }

    /// Whether a measurement with this uuid is part of the group.
    pub fn contains_uuid(&self, uuid: &str) -> bool {
        self.measurements.iter().any(|measurement| measurement.uuid() == Some(uuid))
    }

    /// Earliest start and latest end across the group's measurements.
    pub fn time_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.measurements.iter().filter_map(Measurement::start).min()?;
        let end = self.measurements.iter().filter_map(Measurement::end).max()?;
        Some((start, end))
    }
}
