//! JSON file snapshot store.
//!
//! Writes go to a sibling `.tmp` file which is then renamed over the target,
//! so a crash mid-write leaves either the old snapshot or the new one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rmap_core::state::SelectionState;

use crate::error::StoreError;
use crate::snapshot::Snapshot;
use crate::SnapshotStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Read the full envelope.
    ///
    /// Missing, unreadable, and malformed files all read as `None`; the
    /// latter two are logged.
    #[must_use]
    pub fn load_snapshot(&self) -> Option<Snapshot> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot");
                return None;
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "unreadable snapshot ignored");
                return None;
            }
        };

        match serde_json::from_str::<Snapshot>(&text) {
            Ok(snapshot) => {
                tracing::debug!(path = %self.path.display(), v = snapshot.v, "snapshot loaded");
                Some(snapshot)
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "malformed snapshot ignored");
                None
            }
        }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Option<SelectionState> {
        self.load_snapshot().map(|snapshot| snapshot.state)
    }

    fn save(&self, state: &SelectionState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&Snapshot::now(state.clone()))?;
        let temp = self.temp_path();
        std::fs::write(&temp, json).map_err(|e| StoreError::io(&temp, e))?;
        std::fs::rename(&temp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "snapshot cleared");
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StoreError::io(&self.path, error)),
        }
    }
}
