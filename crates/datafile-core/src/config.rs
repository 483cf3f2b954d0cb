//! TOML configuration for datafile tools.
//!
//! ```toml
//! [store]
//! path = "datafile-store.json"
//! pretty = true
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration. `DATAFILE_STORE` overrides `store.path`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::paths::expand_tilde;
use crate::util::resolver::ConfigResolver;

/// Project name used for env var prefixes and the config directory.
pub const PROJECT_NAME: &str = "datafile";

/// Store file used when nothing else is configured.
pub const DEFAULT_STORE_PATH: &str = "datafile-store.json";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatafileConfig {
    /// Store file settings.
    pub store: StoreSettings,

    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Where the store lives and how it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Path of the store file (supports `~`).
    #[serde(default = "default_store_path")]
    pub path: String,

    /// Write indented JSON.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            pretty: true,
        }
    }
}

impl StoreSettings {
    /// The store path with `~` expanded.
    pub fn resolved_path(&self) -> PathBuf {
        expand_tilde(&self.path)
    }
}

/// Log filter applied when `RUST_LOG` is not set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `info` or `datafile_storage=debug`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl DatafileConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(format!("Invalid config TOML: {e}")))
    }

    /// Render configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Load configuration using the process environment.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let resolver = ConfigResolver::new(PROJECT_NAME);
        Self::load_with(&resolver, explicit, |key| std::env::var(key).ok())
    }

    /// Load configuration with a caller-supplied resolver and env lookup.
    ///
    /// An explicit or env-named file that does not exist is an error; a
    /// missing default file falls back to [`DatafileConfig::default`].
    pub fn load_with<F>(resolver: &ConfigResolver, explicit: Option<&str>, env_lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match resolver.resolve_with(explicit, &env_lookup) {
            Some(source) => {
                let path = source.path();
                if !path.exists() {
                    if source.is_required() {
                        return Err(Error::config(format!(
                            "Config file does not exist: {}",
                            path.display()
                        )));
                    }
                    Self::default()
                } else {
                    log::debug!("Loading config from {}", path.display());
                    let content =
                        std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
                    Self::from_toml_str(&content)?
                }
            }
            None => Self::default(),
        };

        if let Some(store) = env_lookup(&resolver.env_var("STORE")).filter(|s| !s.is_empty()) {
            log::debug!("Store path overridden by environment: {store}");
            config.store.path = store;
        }

        Ok(config)
    }
}
