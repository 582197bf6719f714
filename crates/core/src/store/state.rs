//! In-memory store state

use serde::{Deserialize, Serialize};
use shiftboard_domain::{FeedPage, Measurement, PersistedState, ShiftGroup, Upload};

/// Everything the dashboard reads from the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataState {
    pub uploads_data: Option<FeedPage<Upload>>,
    pub measurements_data: Option<FeedPage<Measurement>>,
    pub shift_groups: Vec<ShiftGroup>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_uploads_update: i64,
    pub last_measurements_update: i64,
}

impl DataState {
    pub fn uploads(&self) -> &[Upload] {
        self.uploads_data.as_ref().map(|page| page.items.as_slice()).unwrap_or_default()
    }

    pub fn measurements(&self) -> &[Measurement] {
        self.measurements_data.as_ref().map(|page| page.items.as_slice()).unwrap_or_default()
    }

    /// Copy of the durable fields; `loading` and `error` are dropped.
    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            uploads_data: self.uploads_data.clone(),
            measurements_data: self.measurements_data.clone(),
            shift_groups: self.shift_groups.clone(),
            last_uploads_update: self.last_uploads_update,
            last_measurements_update: self.last_measurements_update,
        }
    }
}

impl From<PersistedState> for DataState {
    fn from(persisted: PersistedState) -> Self {
        Self {
            uploads_data: persisted.uploads_data,
            measurements_data: persisted.measurements_data,
            shift_groups: persisted.shift_groups,
            loading: false,
            error: None,
            last_uploads_update: persisted.last_uploads_update,
            last_measurements_update: persisted.last_measurements_update,
        }
    }
}
