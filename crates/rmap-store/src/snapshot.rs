use chrono::{DateTime, Utc};
use rmap_core::state::SelectionState;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

const fn default_snapshot_version() -> u32 {
    SNAPSHOT_VERSION
}

/// Persisted selection state.
///
/// A missing `v` field reads as version 1.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Snapshot {
    #[serde(default = "default_snapshot_version")]
    pub v: u32,
    pub saved_at: DateTime<Utc>,
    pub state: SelectionState,
}

impl Snapshot {
    /// Wrap `state`, stamped with the current time.
    #[must_use]
    pub fn now(state: SelectionState) -> Self {
        Self {
            v: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            state,
        }
    }
}
