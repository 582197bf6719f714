//! Data store controller

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use shiftboard_domain::{Measurement, Result, SensorReport, ShiftGroup};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, error, info, warn};

use super::ports::{FeedProvider, StateRepository};
use super::state::DataState;
use crate::sensors::resolve_sensors;
use crate::shifts::{try_combine, Reconciler};

/// Single owner of the dashboard state.
///
/// Every mutation happens under a short write lock that is released before
/// any await. Fetches are the only operations that suspend; overlapping
/// fetches of the same kind are not deduplicated and the last one to finish
/// wins.
///
/// Saves are serialised: each one copies the state only after the previous
/// save finished, so the repository never ends up older than memory.
pub struct DataStore {
    feed: Arc<dyn FeedProvider>,
    repository: Arc<dyn StateRepository>,
    reconciler: Reconciler,
    state: RwLock<DataState>,
    save_lock: AsyncMutex<()>,
}

impl DataStore {
    /// Create a store from previously saved state.
    ///
    /// A load failure is logged and the store starts empty.
    pub async fn open(feed: Arc<dyn FeedProvider>, repository: Arc<dyn StateRepository>) -> Self {
        let state = match repository.load().await {
            Ok(Some(persisted)) => {
                debug!(groups = persisted.shift_groups.len(), "Restored persisted dashboard state");
                DataState::from(persisted)
            }
            Ok(None) => DataState::default(),
            Err(err) => {
                warn!(error = %err, "Failed to load persisted state, starting empty");
                DataState::default()
            }
        };

        Self::with_state(feed, repository, state)
    }

    /// Create a store around an explicit state without touching the repository
    pub fn with_state(
        feed: Arc<dyn FeedProvider>,
        repository: Arc<dyn StateRepository>,
        state: DataState,
    ) -> Self {
        Self {
            feed,
            repository,
            reconciler: Reconciler::default(),
            state: RwLock::new(state),
            save_lock: AsyncMutex::new(()),
        }
    }

    /// Replace the matcher chain used when reconciling custom groups
    pub fn with_reconciler(mut self, reconciler: Reconciler) -> Self {
        self.reconciler = reconciler;
        self
    }

    /// Read-only copy of the current state
    pub fn snapshot(&self) -> DataState {
        self.state.read().clone()
    }

    pub fn shift_groups(&self) -> Vec<ShiftGroup> {
        self.state.read().shift_groups.clone()
    }

    /// Refresh the uploads feed.
    ///
    /// On failure the previous uploads are kept and the error is both stored
    /// for display and returned.
    pub async fn fetch_uploads(&self) -> Result<()> {
        self.begin_fetch();

        match self.feed.fetch_uploads().await {
            Ok(page) => {
                let count = page.items.len();
                {
                    let mut state = self.state.write();
                    state.uploads_data = Some(page);
                    state.last_uploads_update = Utc::now().timestamp_millis();
                    state.loading = false;
                }
                info!(uploads = count, "Fetched data uploads");
                self.persist().await;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Failed to fetch data uploads");
                self.fail_fetch(format!("Failed to fetch data uploads: {err}"));
                Err(err)
            }
        }
    }

    /// Refresh the measurements feed and rebuild the shift groups.
    pub async fn fetch_measurements(&self) -> Result<()> {
        self.begin_fetch();

        match self.feed.fetch_measurements().await {
            Ok(page) => {
                let count = page.items.len();
                let groups = {
                    let mut state = self.state.write();
                    state.shift_groups = self.reconciler.reconcile(&page.items, &state.shift_groups);
                    state.measurements_data = Some(page);
                    state.last_measurements_update = Utc::now().timestamp_millis();
                    state.loading = false;
                    state.shift_groups.len()
                };
                info!(measurements = count, groups, "Fetched consolidated measurements");
                self.persist().await;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Failed to fetch consolidated measurements");
                self.fail_fetch(format!("Failed to fetch consolidated measurements: {err}"));
                Err(err)
            }
        }
    }

    /// Merge the named groups into one custom group.
    ///
    /// Returns the resulting group list. Fewer than two ids leaves the
    /// groups untouched.
    pub async fn combine_shifts<S: AsRef<str> + Sync>(
        &self,
        group_ids: &[S],
        custom_name: &str,
    ) -> Vec<ShiftGroup> {
        let outcome = {
            let mut state = self.state.write();
            match try_combine(&state.shift_groups, group_ids, custom_name) {
                Some(groups) => {
                    state.shift_groups = groups;
                    Ok(state.shift_groups.clone())
                }
                None => Err(state.shift_groups.clone()),
            }
        };

        match outcome {
            Ok(groups) => {
                info!(merged = group_ids.len(), groups = groups.len(), "Combined shift groups");
                self.persist().await;
                groups
            }
            Err(groups) => {
                warn!(selected = group_ids.len(), "Combine request ignored");
                groups
            }
        }
    }

    /// Drop all fetched data and groups.
    pub async fn clear_data(&self) {
        *self.state.write() = DataState::default();
        info!("Cleared dashboard data");
        self.persist().await;
    }

    /// Sensor report for a known measurement, `None` if the uuid is unknown.
    ///
    /// Measurements retained only inside custom groups are found too.
    pub fn sensor_report(&self, measurement_uuid: &str) -> Option<SensorReport> {
        let state = self.state.read();
        let measurement = state
            .measurements()
            .iter()
            .chain(state.shift_groups.iter().flat_map(|group| group.measurements.iter()))
            .find(|measurement| measurement.uuid() == Some(measurement_uuid))?;
        Some(resolve_sensors(measurement, state.uploads()))
    }

    /// Sensor report for an arbitrary measurement against the current uploads
    pub fn sensor_report_for(&self, measurement: &Measurement) -> SensorReport {
        resolve_sensors(measurement, self.state.read().uploads())
    }

    fn begin_fetch(&self) {
        let mut state = self.state.write();
        state.loading = true;
        state.error = None;
    }

    fn fail_fetch(&self, message: String) {
        let mut state = self.state.write();
        state.loading = false;
        state.error = Some(message);
    }

    /// Save the state as it is once the previous save has finished.
    async fn persist(&self) {
        let _ordered = self.save_lock.lock().await;
        let persisted = self.state.read().to_persisted();
        if let Err(err) = self.repository.save(&persisted).await {
            warn!(error = %err, "Failed to persist dashboard state");
        }
    }
}
