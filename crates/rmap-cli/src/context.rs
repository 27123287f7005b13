use std::path::PathBuf;

use anyhow::Context;
use rmap_config::RmapConfig;
use rmap_core::entities::Catalog;
use rmap_core::state::SelectionState;
use rmap_engine::RoadmapEngine;
use rmap_store::{JsonFileStore, SnapshotStore};

use crate::cli::GlobalFlags;

/// Everything a command needs: the catalog, the snapshot store, and the
/// restored selection state.
pub struct AppContext {
    pub catalog: Catalog,
    pub store: JsonFileStore,
    pub state: SelectionState,
}

impl AppContext {
    pub fn init(config: &RmapConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let catalog_path = config.catalog.path();
        let catalog = rmap_catalog::load(catalog_path.as_deref()).with_context(|| {
            catalog_path.as_ref().map_or_else(
                || String::from("failed to load built-in catalog"),
                |path| format!("failed to load catalog {}", path.display()),
            )
        })?;

        let state_path: PathBuf = flags
            .state
            .clone()
            .unwrap_or_else(|| config.session.resolved_state_path());
        let store = JsonFileStore::new(state_path);

        let engine = RoadmapEngine::new(&catalog);
        let state = match store.load() {
            Some(loaded) => {
                let restored = engine.restore(loaded.clone());
                if restored != loaded {
                    save_or_warn(&store, &restored);
                }
                restored
            }
            None => engine.initial_state(),
        };

        Ok(Self {
            catalog,
            store,
            state,
        })
    }

    pub const fn engine(&self) -> RoadmapEngine<'_> {
        RoadmapEngine::new(&self.catalog)
    }

    /// Replace the session state and persist it.
    ///
    /// A failed save is logged; the new state is still used for this command.
    pub fn commit(&mut self, state: SelectionState) {
        save_or_warn(&self.store, &state);
        self.state = state;
    }

    /// Forget the session state and remove the snapshot.
    pub fn clear(&mut self) {
        if let Err(error) = self.store.clear() {
            tracing::warn!(%error, path = %self.store.path().display(), "failed to clear snapshot");
        }
        self.state = self.engine().reset();
    }
}

fn save_or_warn(store: &JsonFileStore, state: &SelectionState) {
    if let Err(error) = store.save(state) {
        tracing::warn!(%error, path = %store.path().display(), "failed to save snapshot");
    }
}
