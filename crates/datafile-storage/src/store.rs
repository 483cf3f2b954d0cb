//! Typed key-value store with whole-file persistence.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt::Debug;
use std::hash::Hash;
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::document;
use crate::error::{Error, Result};

/// A mapping from `K` to `V` that can be saved to and loaded from a file.
///
/// Each key holds at most one value and the latest [`add`](Self::add) wins.
/// [`load`](Self::load) replaces the whole mapping; it never merges.
///
/// # Concurrency
///
/// The store has no internal locking. Mutation takes `&mut self`, so sharing
/// across threads needs an outer lock chosen by the caller. Two processes (or
/// two stores) saving and loading the same file at once are not coordinated;
/// saves are atomic renames, so a reader sees either the old or the new
/// document, but concurrent writers race and the last rename wins.
#[derive(Debug, Clone)]
pub struct KeyedStore<K, V> {
    entries: HashMap<K, V>,
    pretty: bool,
}

impl<K, V> Default for KeyedStore<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            pretty: true,
        }
    }
}

impl<K, V> KeyedStore<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether [`save`](Self::save) writes indented JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Inserts `value` under `key`, replacing any previous value.
    pub fn add(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Returns the value bound to `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if `key` is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.entries
            .get(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Returns a mutable reference to the value bound to `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.entries
            .get_mut(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Removes and returns the value bound to `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.entries
            .remove(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Whether `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys in arbitrary order.
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Iterates over entries in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K, V> KeyedStore<K, V>
where
    K: Eq + Hash + Serialize + DeserializeOwned,
    V: Serialize + DeserializeOwned,
{
    /// Creates a store populated from the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut store = Self::new();
        store.load(path)?;
        Ok(store)
    }

    /// Writes the whole mapping to `path`, replacing any existing file.
    ///
    /// The document is encoded in memory first, then written to a temporary
    /// file beside `path`, synced, and renamed over `path`. A failure at any
    /// step leaves an existing file at `path` untouched. The replacement
    /// takes the permissions of the file it replaces. Parent directories
    /// are not created.
    ///
    /// # Errors
    ///
    /// - [`Error::Serialization`] if a key or value cannot be encoded
    /// - [`Error::Io`] if the target directory is missing or not writable
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = document::encode(&self.entries, self.pretty, path)?;

        let mut temp =
            NamedTempFile::new_in(target_dir(path)).map_err(|e| Error::io_with_path(e, path))?;
        temp.write_all(&bytes)
            .map_err(|e| Error::io_with_path(e, path))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| Error::io_with_path(e, path))?;
        keep_permissions(temp.as_file(), path)?;
        temp.persist(path)
            .map_err(|e| Error::io_with_path(e.error, path))?;

        log::info!(
            "Saved store: {} entries to {}",
            self.entries.len(),
            path.display()
        );

        Ok(())
    }

    /// Replaces the whole mapping with the contents of `path`.
    ///
    /// The file is decoded into a fresh mapping before anything is swapped
    /// in, so on error the store keeps its previous contents.
    ///
    /// # Errors
    ///
    /// - [`Error::FileNotFound`] if `path` does not exist
    /// - [`Error::Io`] on other read failures
    /// - [`Error::Deserialization`] if the content is not a valid store document
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::io_with_path(e, path))?;
        let entries: HashMap<K, V> = document::decode(&bytes, path)?.into_iter().collect();

        let previous = std::mem::replace(&mut self.entries, entries);

        log::info!(
            "Loaded store: {} entries from {} (replaced {})",
            self.entries.len(),
            path.display(),
            previous.len()
        );

        Ok(())
    }
}

/// Directory that holds `path`; the temporary file must live on the same
/// filesystem for the rename to be atomic.
fn target_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Copy the permissions of an existing file at `path` onto `temp`, which
/// `tempfile` creates owner-only.
fn keep_permissions(temp: &File, path: &Path) -> Result<()> {
    let permissions = match std::fs::metadata(path) {
        Ok(meta) => meta.permissions(),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::io_with_path(e, path)),
    };
    temp.set_permissions(permissions)
        .map_err(|e| Error::io_with_path(e, path))
}

impl<K, V> FromIterator<(K, V)> for KeyedStore<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl<K, V> Extend<(K, V)> for KeyedStore<K, V>
where
    K: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, K, V> IntoIterator for &'a KeyedStore<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Two stores are equal when they hold the same entries. Output style is
/// not compared.
impl<K, V> PartialEq for KeyedStore<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> Eq for KeyedStore<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}
