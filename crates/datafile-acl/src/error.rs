//! Error types for datafile-acl

use thiserror::Error;

/// Result type alias for datafile-acl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in datafile-acl
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Text that does not name a visibility
    #[error("Unknown visibility '{value}' (expected private, public, or free)")]
    UnknownVisibility {
        /// The rejected input
        value: String,
    },
}
