//! On-disk store document.
//!
//! A store file is a single JSON object:
//!
//! ```json
//! {
//!   "format": "datafile-store",
//!   "version": 1,
//!   "saved_at": "2026-10-17T12:00:00+00:00",
//!   "entries": [
//!     { "key": "a.csv", "value": { "path": "/data/a.csv", ... } }
//!   ]
//! }
//! ```
//!
//! Entries are a list of pairs rather than a JSON object so keys are not
//! limited to strings. `saved_at` is informational and is not restored.

use std::path::Path;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value of the `format` field.
pub const FORMAT_NAME: &str = "datafile-store";

/// Newest document version this crate reads and the one it writes.
pub const FORMAT_VERSION: u32 = 1;

/// Borrowed view of the store, used for encoding without cloning.
#[derive(Serialize)]
struct DocumentRef<'a, K, V> {
    format: &'static str,
    version: u32,
    saved_at: String,
    entries: Vec<EntryRef<'a, K, V>>,
}

#[derive(Serialize)]
struct EntryRef<'a, K, V> {
    key: &'a K,
    value: &'a V,
}

/// Header fields, checked before the entries are decoded.
#[derive(Deserialize)]
struct DocumentHeader {
    format: String,
    version: u32,
}

#[derive(Deserialize)]
struct Document<K, V> {
    entries: Vec<Entry<K, V>>,
}

#[derive(Deserialize)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Encode `entries` as a complete store document.
///
/// Entries are written sorted by the JSON encoding of their key, so equal
/// mappings produce the same `entries` list. `path` is only used to label
/// errors.
pub fn encode<'a, K, V, I>(entries: I, pretty: bool, path: &Path) -> Result<Vec<u8>>
where
    K: Serialize + 'a,
    V: Serialize + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let serialization = |source: serde_json::Error| Error::Serialization {
        path: path.to_path_buf(),
        source,
    };

    let mut keyed = entries
        .into_iter()
        .map(|(key, value)| Ok((serde_json::to_vec(key)?, EntryRef { key, value })))
        .collect::<std::result::Result<Vec<_>, serde_json::Error>>()
        .map_err(serialization)?;
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let doc = DocumentRef {
        format: FORMAT_NAME,
        version: FORMAT_VERSION,
        saved_at: Utc::now().to_rfc3339(),
        entries: keyed.into_iter().map(|(_, entry)| entry).collect(),
    };

    let encoded = if pretty {
        serde_json::to_vec_pretty(&doc).map(|mut bytes| {
            bytes.push(b'\n');
            bytes
        })
    } else {
        serde_json::to_vec(&doc)
    };

    encoded.map_err(serialization)
}

/// Decode a store document into its key/value pairs.
///
/// Rejects documents whose `format` is not [`FORMAT_NAME`] or whose
/// `version` is newer than [`FORMAT_VERSION`].
pub fn decode<K, V>(bytes: &[u8], path: &Path) -> Result<Vec<(K, V)>>
where
    K: DeserializeOwned,
    V: DeserializeOwned,
{
    let header: DocumentHeader = serde_json::from_slice(bytes)
        .map_err(|e| Error::deserialization(path, format!("Invalid store header: {e}")))?;

    if header.format != FORMAT_NAME {
        return Err(Error::deserialization(
            path,
            format!(
                "Unrecognized format '{}' (expected '{FORMAT_NAME}')",
                header.format
            ),
        ));
    }

    if header.version > FORMAT_VERSION {
        return Err(Error::deserialization(
            path,
            format!(
                "Unsupported version {} (newest supported is {FORMAT_VERSION})",
                header.version
            ),
        ));
    }

    let doc: Document<K, V> = serde_json::from_slice(bytes)
        .map_err(|e| Error::deserialization(path, format!("Invalid store entries: {e}")))?;

    Ok(doc
        .entries
        .into_iter()
        .map(|entry| (entry.key, entry.value))
        .collect())
}
