//! Session persistence configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Snapshot file. Empty means the per-user data directory.
    #[serde(default)]
    pub state_path: String,
}

impl SessionConfig {
    /// Snapshot file to use: the configured path, else
    /// `<data_dir>/rmap/state.json`, else `.rmap/state.json` when the
    /// platform has no data directory.
    #[must_use]
    pub fn resolved_state_path(&self) -> PathBuf {
        if !self.state_path.is_empty() {
            return PathBuf::from(&self.state_path);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".rmap").join("state.json"),
            |dir| dir.join("rmap").join("state.json"),
        )
    }
}
