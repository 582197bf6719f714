//! Port interfaces for the data store
//!
//! These traits define the boundaries between the store and the
//! infrastructure that fetches and persists its data.

use async_trait::async_trait;
use shiftboard_domain::{FeedPage, Measurement, PersistedState, Result, Upload};

/// Source of the vendor feeds
#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// Fetch the latest page of data source uploads
    async fn fetch_uploads(&self) -> Result<FeedPage<Upload>>;

    /// Fetch the latest page of consolidated measurements
    async fn fetch_measurements(&self) -> Result<FeedPage<Measurement>>;
}

/// Durable storage for the persisted subset of the store
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Load the saved state, `None` if nothing was saved yet
    async fn load(&self) -> Result<Option<PersistedState>>;

    /// Replace the saved state
    async fn save(&self, state: &PersistedState) -> Result<()>;
}
