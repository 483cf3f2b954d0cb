//! Error types for datafile-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for datafile-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in datafile-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Content could not be parsed
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse
        message: String,
    },
}

impl Error {
    /// Creates an I/O error that records the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_io_with_path_display() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io_with_path(source, "/tmp/store.json");
        assert_eq!(err.to_string(), "I/O error at /tmp/store.json: denied");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("missing [store] table");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing [store] table"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = Error::parse("expected `=`");
        let Error::Parse { message } = err else {
            unreachable!("Expected Parse error variant");
        };
        assert_eq!(message, "expected `=`");
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
