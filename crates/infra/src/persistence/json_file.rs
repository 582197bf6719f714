//! Dashboard state stored as a JSON document on disk
//!
//! Layout: `<directory>/<namespace>.json` containing
//! `{"state": {...}, "version": 0}`. Writes go to a sibling temp file which
//! is then renamed over the target, so a crash never leaves a torn file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shiftboard_core::StateRepository;
use shiftboard_domain::constants::STORAGE_VERSION;
use shiftboard_domain::{PersistedState, Result, ShiftboardError, StorageConfig};
use tracing::{debug, warn};

use crate::errors::InfraError;

#[derive(Serialize, Deserialize)]
struct Envelope<S> {
    state: S,
    version: u32,
}

/// File-backed [`StateRepository`]
#[derive(Debug, Clone)]
pub struct JsonFileStateRepository {
    path: PathBuf,
}

impl JsonFileStateRepository {
    pub fn new(directory: impl AsRef<Path>, namespace: &str) -> Self {
        Self { path: directory.as_ref().join(format!("{namespace}.json")) }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.directory, &config.namespace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl StateRepository for JsonFileStateRepository {
    async fn load(&self) -> Result<Option<PersistedState>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No persisted state yet");
                return Ok(None);
            }
            Err(err) => return Err(InfraError::from(err).into()),
        };

        let envelope: Envelope<PersistedState> =
            serde_json::from_str(&contents).map_err(InfraError::from)?;

        if envelope.version != STORAGE_VERSION {
            warn!(
                path = %self.path.display(),
                found = envelope.version,
                expected = STORAGE_VERSION,
                "Discarding persisted state with unknown version"
            );
            return Ok(None);
        }

        Ok(Some(envelope.state))
    }

    async fn save(&self, state: &PersistedState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(InfraError::from)?;
        }

        let json = serde_json::to_vec(&Envelope { state, version: STORAGE_VERSION })
            .map_err(InfraError::from)?;

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, json).await.map_err(InfraError::from)?;
        tokio::fs::rename(&temp_path, &self.path).await.map_err(|err| {
            ShiftboardError::Storage(format!(
                "failed to replace {}: {err}",
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), groups = state.shift_groups.len(), "Persisted state");
        Ok(())
    }
}
