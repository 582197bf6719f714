//! Mock repository implementations for testing

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use shiftboard_core::StateRepository;
use shiftboard_domain::{PersistedState, Result as DomainResult, ShiftboardError};

/// In-memory `StateRepository` that records every save.
#[derive(Default)]
pub struct MockStateRepository {
    saved: Mutex<Option<PersistedState>>,
    saves: AtomicUsize,
    fail_load: bool,
    fail_save: bool,
    first_save_delay: Option<Duration>,
}

impl MockStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with previously saved state.
    pub fn seeded(state: PersistedState) -> Self {
        Self { saved: Mutex::new(Some(state)), ..Self::default() }
    }

    pub fn failing_load() -> Self {
        Self { fail_load: true, ..Self::default() }
    }

    pub fn failing_save() -> Self {
        Self { fail_save: true, ..Self::default() }
    }

    /// The first save sleeps for `delay` before it is recorded.
    pub fn slow_first_save(delay: Duration) -> Self {
        Self { first_save_delay: Some(delay), ..Self::default() }
    }

    pub fn saved(&self) -> Option<PersistedState> {
        self.saved.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StateRepository for MockStateRepository {
    async fn load(&self) -> DomainResult<Option<PersistedState>> {
        if self.fail_load {
            return Err(ShiftboardError::Storage("corrupt state file".into()));
        }
        Ok(self.saved.lock().unwrap().clone())
    }

    async fn save(&self, state: &PersistedState) -> DomainResult<()> {
        let previous = self.saves.fetch_add(1, Ordering::SeqCst);
        if let (0, Some(delay)) = (previous, self.first_save_delay) {
            tokio::time::sleep(delay).await;
        }
        if self.fail_save {
            return Err(ShiftboardError::Storage("disk full".into()));
        }
        *self.saved.lock().unwrap() = Some(state.clone());
        Ok(())
    }
}
