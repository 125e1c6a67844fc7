//! Error types for store operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`KeyStore`](crate::KeyStore) operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A save targeted an existing key without `overwrite`
    #[error("key already exists: {key}")]
    DuplicateKey { key: String },

    /// The key is not present in the store
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// Reading or writing a persistence file failed
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A persistence file is not a valid store document
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Rendering the store (or a settings document) as JSON failed
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn duplicate(key: &str) -> Self {
        StoreError::DuplicateKey { key: key.to_string() }
    }

    pub(crate) fn not_found(key: &str) -> Self {
        StoreError::KeyNotFound { key: key.to_string() }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, StoreError>;
