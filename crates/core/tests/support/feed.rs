use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shiftboard_core::FeedProvider;
use shiftboard_domain::{
    FeedPage, Measurement, Result as DomainResult, ShiftboardError, Upload,
};
use tokio::sync::Notify;

/// Scripted `FeedProvider`.
///
/// Each fetch pops the next queued response; an empty queue answers with a
/// network error so unexpected calls fail loudly. A gated provider holds
/// every measurements fetch until the gate is notified.
#[derive(Default)]
pub struct MockFeedProvider {
    uploads: Mutex<VecDeque<DomainResult<FeedPage<Upload>>>>,
    measurements: Mutex<VecDeque<DomainResult<FeedPage<Measurement>>>>,
    gate: Option<Arc<Notify>>,
}

impl MockFeedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uploads(self, uploads: Vec<Upload>) -> Self {
        self.uploads.lock().unwrap().push_back(Ok(FeedPage::from_items(uploads)));
        self
    }

    pub fn with_measurements(self, measurements: Vec<Measurement>) -> Self {
        self.measurements.lock().unwrap().push_back(Ok(FeedPage::from_items(measurements)));
        self
    }

    pub fn with_uploads_error(self, error: ShiftboardError) -> Self {
        self.uploads.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn with_measurements_error(self, error: ShiftboardError) -> Self {
        self.measurements.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[async_trait]
impl FeedProvider for MockFeedProvider {
    async fn fetch_uploads(&self) -> DomainResult<FeedPage<Upload>> {
        self.uploads
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ShiftboardError::Network("no uploads response queued".into())))
    }

    async fn fetch_measurements(&self) -> DomainResult<FeedPage<Measurement>> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.measurements
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ShiftboardError::Network("no measurements response queued".into())))
    }
}
