//! Data source uploads

use serde::{Deserialize, Serialize};

use crate::utils::nullable::null_as_default;

/// A raw sensor file uploaded to the platform.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Upload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Free-text file name; by convention embeds `Sensor_<number>` and
    /// sometimes `Set_<set>`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub upload_file_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upload_size_mb: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_created: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub processing_finished: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_error: bool,
    /// Measurement uuids or set names this upload contributed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contained_measurement_fragments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_uuid: Option<String>,
}

impl Upload {
    /// Whether the upload lists `fragment` among its contained fragments.
    pub fn contains_fragment(&self, fragment: &str) -> bool {
        self.contained_measurement_fragments
            .as_ref()
            .is_some_and(|fragments| fragments.iter().any(|entry| entry == fragment))
    }
}
