//! Error types for datafile-storage

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for datafile-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in datafile-storage
///
/// Nothing is retried or recovered internally; every variant reaches the
/// caller unchanged.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Lookup of a key that is not in the store
    #[error("Key not found: {key}")]
    KeyNotFound {
        /// Debug rendering of the missing key
        key: String,
    },

    /// Store file to load does not exist
    #[error("Store file not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Any other I/O failure while reading or writing a store file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A stored key or value could not be encoded
    #[error("Failed to serialize store for {}: {source}", path.display())]
    Serialization {
        /// Target file of the save
        path: PathBuf,
        /// Encoder error
        #[source]
        source: serde_json::Error,
    },

    /// The store file is corrupt, truncated, or not a store document
    #[error("Failed to deserialize store from {}: {message}", path.display())]
    Deserialization {
        /// Source file of the load
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

impl Error {
    /// Creates a key-not-found error from any debuggable key.
    pub fn key_not_found<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        Error::KeyNotFound {
            key: format!("{key:?}"),
        }
    }

    /// Creates an I/O error, mapping `NotFound` to [`Error::FileNotFound`].
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound { path }
        } else {
            Error::Io { path, source }
        }
    }

    /// Creates a deserialization error.
    pub fn deserialization<S: Into<String>>(path: impl AsRef<Path>, message: S) -> Self {
        Error::Deserialization {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Returns whether this error came from the filesystem rather than the data.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::FileNotFound { .. })
    }
}
