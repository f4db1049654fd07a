//! Error types shared across the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Error represents a failure that aborts a single comparison.
///
/// Resolution misses and malformed configuration lines are not errors; they
/// surface as diff entries or are skipped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to fetch {target}: {message}")]
    Fetch { target: String, message: String },

    #[error("failed to read {}: {cause}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("configuration is not valid UTF-8 text: {0}")]
    Parse(#[from] std::str::Utf8Error),

    #[error("failed to decode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid mapping: {0}")]
    InvalidMapping(String),

    #[error("unknown service: {0}")]
    UnknownService(String),
}

impl Error {
    /// Creates a fetch error.
    pub fn fetch(target: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Fetch {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Creates an I/O error bound to the path being read.
    pub fn io(path: impl Into<PathBuf>, cause: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            cause,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
