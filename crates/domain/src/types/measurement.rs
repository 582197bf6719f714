//! Consolidated measurement records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_label_conversions;
use crate::utils::nullable::null_as_default;
use crate::utils::timestamp::parse_timestamp;

/// A consolidated measurement as delivered by the platform.
///
/// Records are treated as immutable snapshots; a refetch replaces them
/// wholesale. Timestamps are kept in their wire form so that identity
/// comparisons (composite keys) match the platform byte for byte.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_end: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_sec: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imu_set: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub processing_finished: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_uuid: Option<String>,
    /// Comma-separated sensor numbers the platform knows to be absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_fragment_ids: Option<String>,
}

/// Processing outcome shown next to each measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementStatus {
    Ok,
    Error,
    Failed,
}

impl_label_conversions!(MeasurementStatus {
    Ok => "Ok",
    Error => "Error",
    Failed => "Failed",
});

impl Measurement {
    /// Parsed start instant, `None` when absent or unparsable.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.measurement_start.as_deref().and_then(parse_timestamp)
    }

    /// Parsed end instant, `None` when absent or unparsable.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.measurement_end.as_deref().and_then(parse_timestamp)
    }

    /// `"{imu_set}:{measurement_start}:{measurement_end}"`, absent parts empty.
    pub fn composite_key(&self) -> String {
        format!(
            "{}:{}:{}",
            self.imu_set.as_deref().unwrap_or_default(),
            self.measurement_start.as_deref().unwrap_or_default(),
            self.measurement_end.as_deref().unwrap_or_default()
        )
    }

    /// Whether two records describe the same recording window of the same set.
    pub fn same_window(&self, other: &Self) -> bool {
        self.imu_set == other.imu_set
            && self.measurement_start == other.measurement_start
            && self.measurement_end == other.measurement_end
    }

    /// Uuid when the platform supplied a non-empty one.
    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref().filter(|uuid| !uuid.is_empty())
    }

    pub fn status(&self) -> MeasurementStatus {
        if self.has_error {
            MeasurementStatus::Error
        } else if !self.processing_finished {
            MeasurementStatus::Failed
        } else {
            MeasurementStatus::Ok
        }
    }
}
