//! Error types for datafile-cli

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for datafile-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in datafile-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from datafile-core
    #[error("Core error: {0}")]
    Core(#[from] datafile_core::Error),

    /// Error from datafile-storage
    #[error("Storage error: {0}")]
    Storage(#[from] datafile_storage::Error),

    /// Refusing to replace an existing file
    #[error("{} already exists. Use --force to overwrite.", path.display())]
    AlreadyExists {
        /// The existing file
        path: PathBuf,
    },

    /// A command argument that cannot be used
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure writing command output
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Failure rendering a descriptor as JSON
    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Error::InvalidArgument(message.into())
    }
}
