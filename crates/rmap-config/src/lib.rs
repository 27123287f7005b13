//! # rmap-config
//!
//! Layered configuration loading for rmap using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RMAP_*` prefix, `__` as separator)
//! 2. Project-level `.rmap/config.toml`
//! 3. User-level `~/.config/rmap/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RMAP_SESSION__STATE_PATH` -> `session.state_path`,
//! `RMAP_GENERAL__DEFAULT_FORMAT` -> `general.default_format`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use rmap_config::RmapConfig;
//!
//! let config = RmapConfig::load_with_dotenv().expect("config");
//! println!("state file: {}", config.session.resolved_state_path().display());
//! ```

mod catalog;
mod error;
mod general;
mod session;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RmapConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RmapConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from any figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".rmap/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("RMAP_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rmap").join("config.toml"))
    }
}
