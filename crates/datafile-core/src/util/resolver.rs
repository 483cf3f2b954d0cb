//! Config file resolution.
//!
//! `ConfigResolver` locates the configuration file for a project using an
//! explicit path, an environment variable, and the platform config directory,
//! in that order.
//!
//! # Example
//!
//! ```no_run
//! use datafile_core::util::resolver::ConfigResolver;
//!
//! let resolver = ConfigResolver::new("datafile");
//!
//! // Checks DATAFILE_CONFIG, then ~/.config/datafile/config.toml
//! if let Some(path) = resolver.config_file(None) {
//!     println!("Config: {}", path.display());
//! }
//! ```

use std::env;
use std::path::PathBuf;

use crate::util::paths::expand_tilde;

/// File name looked up inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Where a resolved config file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed explicitly (e.g. `--config`). Must exist.
    Explicit(PathBuf),
    /// Named by the `{PREFIX}_CONFIG` environment variable. Must exist.
    Env(PathBuf),
    /// Found in the platform config directory.
    Default(PathBuf),
}

impl ConfigSource {
    /// The resolved path regardless of origin.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Explicit(p) | Self::Env(p) | Self::Default(p) => p,
        }
    }

    /// Whether a missing file at this location is an error.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Default(_))
    }
}

/// Config file resolver for a specific project.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Project name (e.g., "datafile")
    project_name: String,
    /// Environment variable prefix (e.g., "DATAFILE")
    env_prefix: String,
    /// Override for `<platform config dir>/<project>`
    config_dir: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a new resolver for the given project name.
    ///
    /// The project name is converted to an environment variable prefix:
    /// - "datafile" → "DATAFILE"
    /// - "data-file" → "DATA_FILE"
    pub fn new(project_name: &str) -> Self {
        let env_prefix = project_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            project_name: project_name.to_string(),
            env_prefix,
            config_dir: None,
        }
    }

    /// Look for `config.toml` directly in `dir` instead of the platform default.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use datafile_core::util::resolver::ConfigResolver;
    ///
    /// let resolver = ConfigResolver::new("datafile");
    /// assert_eq!(resolver.env_var("STORE"), "DATAFILE_STORE");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// Default location of the config file, whether or not it exists.
    pub fn default_config_path(&self) -> Option<PathBuf> {
        self.config_dir
            .clone()
            .or_else(|| dirs::config_dir().map(|d| d.join(&self.project_name)))
            .map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Path of the config file to read, if any.
    pub fn config_file(&self, explicit: Option<&str>) -> Option<PathBuf> {
        self.resolve(explicit).map(|source| source.path().clone())
    }

    /// Resolve the config file using the process environment.
    ///
    /// See [`resolve_with`](Self::resolve_with) for the lookup order.
    pub fn resolve(&self, explicit: Option<&str>) -> Option<ConfigSource> {
        self.resolve_with(explicit, |key| env::var(key).ok())
    }

    /// Resolve the config file with a caller-supplied environment lookup.
    ///
    /// Checks in order:
    /// 1. `explicit` path
    /// 2. `{PREFIX}_CONFIG` environment variable
    /// 3. `<config_dir>/<project>/config.toml`, only if it exists
    pub fn resolve_with<F>(&self, explicit: Option<&str>, env_lookup: F) -> Option<ConfigSource>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            return Some(ConfigSource::Explicit(expand_tilde(path)));
        }

        if let Some(path) = env_lookup(&self.env_var("CONFIG")).filter(|p| !p.is_empty()) {
            return Some(ConfigSource::Env(expand_tilde(&path)));
        }

        self.default_config_path()
            .filter(|p| p.exists())
            .map(ConfigSource::Default)
    }

    /// Get the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}
