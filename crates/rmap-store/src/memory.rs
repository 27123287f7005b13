use std::cell::RefCell;

use rmap_core::state::SelectionState;

use crate::SnapshotStore;
use crate::error::StoreError;

/// Keeps the last saved state in memory. Never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Option<SelectionState>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `state`.
    #[must_use]
    pub fn with_state(state: SelectionState) -> Self {
        Self {
            state: RefCell::new(Some(state)),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<SelectionState> {
        self.state.borrow().clone()
    }

    fn save(&self, state: &SelectionState) -> Result<(), StoreError> {
        *self.state.borrow_mut() = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.state.borrow_mut().take();
        Ok(())
    }
}
