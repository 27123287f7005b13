use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Alternate catalog TOML. Empty means the built-in catalog.
    #[serde(default)]
    pub path: String,
}

impl CatalogConfig {
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        (!self.path.is_empty()).then(|| PathBuf::from(&self.path))
    }
}
