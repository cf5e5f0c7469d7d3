//! # dss-config
//!
//! Layered configuration loading for the data safety catalog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DSS_*` prefix, `__` as separator)
//! 2. Project-level `.dss/config.toml`
//! 3. User-level `~/.config/dss/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DSS_SOURCES__BASE` -> `sources.base`,
//! `DSS_GENERAL__PAGE_SIZE` -> `general.page_size`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use dss_config::DssConfig;
//!
//! let config = DssConfig::load_with_dotenv(Path::new(".")).expect("config");
//! println!("{} apps per page", config.general.page_size);
//! ```

mod error;
mod general;
mod http;
mod sources;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use http::HttpConfig;
pub use sources::SourcesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use dss_core::enums::SourceKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DssConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl DssConfig {
    /// Load configuration for the project rooted at `project_root`.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a provider fails to parse or a value is
    /// out of range.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `project_root/.env` (or the nearest `.env` from the current
    /// directory) and then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        } else {
            let _ = dotenvy::dotenv();
        }
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = project_root.join(".dss").join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("DSS_").split("__"))
    }

    /// Reject values that would make later stages misbehave.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroValue`] for a zero page size or timeout and
    /// [`ConfigError::BlankSource`] for a source configured as blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.page_size == 0 {
            return Err(ConfigError::ZeroValue {
                field: "general.page_size",
            });
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::ZeroValue {
                field: "http.timeout_secs",
            });
        }
        if let Some(kind) = SourceKind::ALL
            .into_iter()
            .find(|kind| self.sources.raw(*kind).trim().is_empty())
        {
            return Err(ConfigError::BlankSource { kind });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dss").join("config.toml"))
    }
}
