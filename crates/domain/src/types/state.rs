//! Persisted dashboard state

use serde::{Deserialize, Serialize};

use super::feed::FeedPage;
use super::measurement::Measurement;
use super::shift::ShiftGroup;
use super::upload::Upload;

/// The subset of dashboard state that survives a restart.
///
/// Request status (`loading`, `error`) is not part of it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub uploads_data: Option<FeedPage<Upload>>,
    #[serde(default)]
    pub measurements_data: Option<FeedPage<Measurement>>,
    #[serde(default)]
    pub shift_groups: Vec<ShiftGroup>,
    /// Unix milliseconds of the last successful uploads fetch, 0 if never.
    #[serde(default)]
    pub last_uploads_update: i64,
    /// Unix milliseconds of the last successful measurements fetch, 0 if never.
    #[serde(default)]
    pub last_measurements_update: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_a_fresh_state() {
        let state: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, PersistedState::default());
    }

    #[test]
    fn uses_camel_case_keys() {
        let state = PersistedState { last_uploads_update: 42, ..PersistedState::default() };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["lastUploadsUpdate"], 42);
        assert!(json.get("loading").is_none());
        assert!(json["uploadsData"].is_null());
    }
}
