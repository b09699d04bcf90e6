//! # hyg-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HYGIENE_*` prefix, `__` as separator)
//! 2. Project-level `.hygiene/config.toml`
//! 3. User-level `~/.config/hygiene/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HYGIENE_CACHE__TTL_SECS` -> `cache.ttl_secs`,
//! `HYGIENE_STORE__PATH` -> `store.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hyg_config::HygConfig;
//!
//! let config = HygConfig::load_with_dotenv().expect("config");
//! println!("cache ttl: {:?}", config.cache.ttl());
//! ```

mod access;
mod auth;
mod cache;
mod error;
mod general;
mod store;

pub use access::AccessConfig;
pub use auth::{AuthConfig, UserRecord};
pub use cache::CacheConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the per-project state directory.
pub const PROJECT_DIR: &str = ".hygiene";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HygConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub access: AccessConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HygConfig {
    /// Load configuration from all sources, relative to the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration with `.hygiene/config.toml` resolved under `project_root`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain for the current directory.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain for a given project root.
    #[must_use]
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HYGIENE_").split("__"))
    }

    /// Reject values that would make the core misbehave.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero TTL, a zero default limit,
    /// or a non-positive edit window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.ttl_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.cache.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.access.edit_window_hours <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "access.edit_window_hours".into(),
                reason: "must be a positive number of hours".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hygiene").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HygConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.auth.is_configured());
        assert_eq!(config.cache.ttl_secs, 30);
        assert_eq!(config.access.edit_window_hours, 24);
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let mut config = HygConfig::default();
        config.cache.ttl_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "cache.ttl_secs"
        ));
    }

    #[test]
    fn negative_edit_window_is_rejected() {
        let mut config = HygConfig::default();
        config.access.edit_window_hours = -1;
        assert!(config.validate().is_err());
    }
}
