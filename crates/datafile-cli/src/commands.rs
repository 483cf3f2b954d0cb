//! Handlers for descriptor commands.
//!
//! Every mutating command is one load → change → save cycle against the
//! store file. Handlers write user-facing output to `out` so they can be
//! driven from tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use datafile_acl::{AccessDescriptor, Visibility};
use datafile_core::{DatafileConfig, key_from_path};
use datafile_storage::DescriptorStore;

use crate::cli::Command;
use crate::error::{Error, Result};

/// Where and how the store is read and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreContext {
    /// Store file path.
    pub path: PathBuf,
    /// Write indented JSON.
    pub pretty: bool,
}

impl StoreContext {
    /// Build a context from configuration, with an optional `--store` override.
    pub fn from_config(config: &DatafileConfig, store_override: Option<&str>) -> Self {
        let path = match store_override {
            Some(p) => PathBuf::from(p),
            None => config.store.resolved_path(),
        };
        Self {
            path,
            pretty: config.store.pretty,
        }
    }

    fn open(&self) -> Result<DescriptorStore> {
        Ok(DescriptorStore::open(&self.path)?.with_pretty(self.pretty))
    }

    fn save(&self, store: &DescriptorStore) -> Result<()> {
        store.save(&self.path)?;
        Ok(())
    }

    /// Load the store, apply `change` to the descriptor under `key`, save.
    fn update<F>(&self, key: &str, change: F) -> Result<()>
    where
        F: FnOnce(&mut AccessDescriptor),
    {
        let mut store = self.open()?;
        change(store.get_mut(key)?);
        self.save(&store)
    }
}

/// Dispatch a descriptor command. `Command::Config` is handled elsewhere.
pub fn run(ctx: &StoreContext, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Init { force } => cmd_init(ctx, force, out),
        Command::Register { path, key } => cmd_register(ctx, &path, key.as_deref(), out),
        Command::GrantUser { key, user } => cmd_grant_user(ctx, &key, &user, out),
        Command::GrantGroup { key, group } => cmd_grant_group(ctx, &key, &group, out),
        Command::SetVisibility { key, visibility } => {
            cmd_set_visibility(ctx, &key, visibility, out)
        }
        Command::Show { key } => cmd_show(ctx, &key, out),
        Command::List => cmd_list(ctx, out),
        Command::Config { .. } => Err(Error::invalid_argument(
            "config commands are not store commands",
        )),
    }
}

/// Create an empty store file.
pub fn cmd_init(ctx: &StoreContext, force: bool, out: &mut impl Write) -> Result<()> {
    if ctx.path.exists() && !force {
        return Err(Error::AlreadyExists {
            path: ctx.path.clone(),
        });
    }

    ctx.save(&DescriptorStore::new().with_pretty(ctx.pretty))?;
    writeln!(out, "Created empty store at {}", ctx.path.display())?;
    Ok(())
}

/// Register a new private descriptor for `path`.
pub fn cmd_register(
    ctx: &StoreContext,
    path: &str,
    key: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let key = match key {
        Some(k) => k.to_string(),
        None => key_from_path(Path::new(path)).ok_or_else(|| {
            Error::invalid_argument(format!("cannot derive a key from '{path}'; pass --key"))
        })?,
    };

    let mut store = ctx.open()?;
    if store.contains_key(key.as_str()) {
        log::warn!("Replacing existing descriptor '{key}'");
    }
    store.add(key.clone(), AccessDescriptor::new(path));
    ctx.save(&store)?;

    writeln!(out, "Registered {key} -> {path}")?;
    Ok(())
}

/// Allow `user` on the descriptor under `key`.
pub fn cmd_grant_user(
    ctx: &StoreContext,
    key: &str,
    user: &str,
    out: &mut impl Write,
) -> Result<()> {
    ctx.update(key, |d| d.add_user(user))?;
    writeln!(out, "Granted user {user} on {key}")?;
    Ok(())
}

/// Allow `group` on the descriptor under `key`.
pub fn cmd_grant_group(
    ctx: &StoreContext,
    key: &str,
    group: &str,
    out: &mut impl Write,
) -> Result<()> {
    ctx.update(key, |d| d.add_group(group))?;
    writeln!(out, "Granted group {group} on {key}")?;
    Ok(())
}

/// Replace the visibility of the descriptor under `key`.
pub fn cmd_set_visibility(
    ctx: &StoreContext,
    key: &str,
    visibility: Visibility,
    out: &mut impl Write,
) -> Result<()> {
    ctx.update(key, |d| d.set_visibility(visibility))?;
    writeln!(out, "Set {key} visibility to {visibility}")?;
    Ok(())
}

/// Print one descriptor as pretty JSON.
pub fn cmd_show(ctx: &StoreContext, key: &str, out: &mut impl Write) -> Result<()> {
    let store = ctx.open()?;
    let descriptor = store.get(key)?;
    writeln!(out, "{}", serde_json::to_string_pretty(descriptor)?)?;
    Ok(())
}

/// Print `key<TAB>visibility<TAB>path`, one line per descriptor, sorted by key.
pub fn cmd_list(ctx: &StoreContext, out: &mut impl Write) -> Result<()> {
    let store = ctx.open()?;
    let mut rows: Vec<(&String, &AccessDescriptor)> = store.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    for (key, d) in rows {
        writeln!(out, "{key}\t{}\t{}", d.visibility(), d.path())?;
    }
    Ok(())
}
