//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

use scout_model::ScoutId;

#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file could not be moved over the target.
    #[error("failed to replace {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key contains characters that cannot be used as a file name.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Stored value exists but cannot be decoded.
    #[error("stored value for '{key}' is unreadable: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize roster: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("a scout with id {0} already exists")]
    DuplicateId(ScoutId),
}

impl StoreError {
    /// Suggestion for how to resolve this error, if there is one.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Io { operation, .. } if *operation == "read" => {
                Some("Check that the data directory exists and is readable.")
            }
            Self::Io { .. } | Self::AtomicWriteFailed { .. } => {
                Some("Check disk space and write permissions on the data directory.")
            }
            Self::Corrupt { .. } => {
                Some("Restore the file from a backup or re-import an exported spreadsheet.")
            }
            Self::InvalidKey(_) | Self::Serialization(_) | Self::DuplicateId(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
