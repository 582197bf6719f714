//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Instant;

use shiftboard_core::{DataStore, StateRepository};
use shiftboard_domain::{Config, Result};
use shiftboard_infra::{JsonFileStateRepository, PlatformClient};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub platform: Arc<PlatformClient>,
    pub store: Arc<DataStore>,
    started_at: Instant,
}

impl AppContext {
    /// Build the production wiring: platform client plus on-disk state.
    ///
    /// # Errors
    ///
    /// Returns `ShiftboardError::Config` if the platform settings are invalid.
    pub async fn new(config: Config) -> Result<Self> {
        let platform = Arc::new(PlatformClient::new(config.api.clone())?);
        let repository = Arc::new(JsonFileStateRepository::from_config(&config.storage));
        info!(path = %repository.path().display(), "Using persisted state file");

        Ok(Self::with_components(config, platform, repository).await)
    }

    /// Build a context around explicit components
    pub async fn with_components(
        config: Config,
        platform: Arc<PlatformClient>,
        repository: Arc<dyn StateRepository>,
    ) -> Self {
        let store = Arc::new(DataStore::open(platform.clone(), repository).await);
        Self { config, platform, store, started_at: Instant::now() }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
