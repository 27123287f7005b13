//! # rmap-store
//!
//! Opaque persistence for [`SelectionState`]. The engine never calls a store
//! itself; the front end loads once at session start and saves after each
//! answer.
//!
//! Loading never fails. A missing, unreadable, or corrupted snapshot reads as
//! absent and the session starts over from the initial state.

mod error;
mod file;
mod memory;
mod snapshot;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use snapshot::{SNAPSHOT_VERSION, Snapshot};

use rmap_core::state::SelectionState;

pub trait SnapshotStore {
    /// Last saved state, if one exists and can be read.
    fn load(&self) -> Option<SelectionState>;

    /// Replace the stored state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the state cannot be encoded or written.
    fn save(&self, state: &SelectionState) -> Result<(), StoreError>;

    /// Remove the stored state. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if an existing snapshot cannot be removed.
    fn clear(&self) -> Result<(), StoreError>;
}
