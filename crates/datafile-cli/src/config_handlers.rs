//! Handler functions for config CLI commands.
//!
//! Implements the `config` subcommands (`path`, `show`, `get`, `init`) plus
//! TOML dotted-key helpers.

use std::io::Write;
use std::path::PathBuf;

use datafile_core::config::PROJECT_NAME;
use datafile_core::{ConfigResolver, DatafileConfig};

use crate::cli::ConfigAction;
use crate::error::{Error, Result};

/// Handle a config subcommand.
///
/// `config` is the already-resolved configuration; `config_path` is the
/// `--config` flag as given.
pub fn handle_config_command(
    resolver: &ConfigResolver,
    config: &DatafileConfig,
    config_path: Option<&str>,
    action: ConfigAction,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(resolver, config_path, out),
        ConfigAction::Show => cmd_config_show(config, out),
        ConfigAction::Get { key } => cmd_config_get(config, &key, out),
        ConfigAction::Init { file, force } => {
            cmd_config_init(resolver, file.as_deref(), force, out)
        }
    }
}

/// Show the config file in use, or where a default one would go.
pub fn cmd_config_path(
    resolver: &ConfigResolver,
    config_path: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(path) = resolver.config_file(config_path) {
        writeln!(out, "{}", path.display())?;
        return Ok(());
    }

    match resolver.default_config_path() {
        Some(path) => {
            writeln!(out, "{}", path.display())?;
            log::info!(
                "{} does not exist; run `{PROJECT_NAME} config init` to create it",
                path.display()
            );
            Ok(())
        }
        None => Err(datafile_core::Error::config(
            "Could not determine config directory for this platform",
        )
        .into()),
    }
}

/// Print the resolved configuration as TOML.
pub fn cmd_config_show(config: &DatafileConfig, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Print a configuration value by dotted key.
pub fn cmd_config_get(config: &DatafileConfig, key: &str, out: &mut impl Write) -> Result<()> {
    let value = toml::Value::try_from(config)
        .map_err(|e| datafile_core::Error::config(e.to_string()))?;
    match get_nested_value(&value, key) {
        Some(val) => {
            writeln!(out, "{}", format_toml_value(val))?;
            Ok(())
        }
        None => Err(datafile_core::Error::config(format!(
            "Key '{key}' not found in configuration"
        ))
        .into()),
    }
}

/// Create a default configuration file.
pub fn cmd_config_init(
    resolver: &ConfigResolver,
    file: Option<&str>,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => resolver
            .default_config_path()
            .ok_or_else(|| datafile_core::Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::AlreadyExists { path });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| datafile_core::Error::io_with_path(e, parent))?;
    }

    let toml_str = DatafileConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| datafile_core::Error::io_with_path(e, &path))?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
