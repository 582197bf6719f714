//! Process-local state storage for tests and ephemeral runs

use async_trait::async_trait;
use parking_lot::Mutex;
use shiftboard_core::StateRepository;
use shiftboard_domain::{PersistedState, Result};

/// [`StateRepository`] that keeps the last saved state in memory
#[derive(Debug, Default)]
pub struct InMemoryStateRepository {
    state: Mutex<Option<PersistedState>>,
}

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: PersistedState) -> Self {
        Self { state: Mutex::new(Some(state)) }
    }

    /// Last saved state, if any
    pub fn current(&self) -> Option<PersistedState> {
        self.state.lock().clone()
    }
}

#[async_trait]
impl StateRepository for InMemoryStateRepository {
    async fn load(&self) -> Result<Option<PersistedState>> {
        Ok(self.state.lock().clone())
    }

    async fn save(&self, state: &PersistedState) -> Result<()> {
        *self.state.lock() = Some(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_last_saved_state() {
        let repository = InMemoryStateRepository::new();
        assert_eq!(repository.load().await.unwrap(), None);

        let state = PersistedState { last_measurements_update: 5, ..PersistedState::default() };
        repository.save(&state).await.unwrap();
        assert_eq!(repository.current(), Some(state));
    }
}
