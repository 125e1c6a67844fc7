//! Document reader
//!
//! Reads a store document from disk and parses it.

use super::Document;
use crate::error::{Result, StoreError};
use std::path::Path;
use tracing::debug;

/// Read and parse the document at `path`
///
/// Fails with `Io` if the file cannot be read and `Parse` if the content is
/// not a JSON object of records.
pub async fn read_document(path: &Path) -> Result<Document> {
    let data = tokio::fs::read(path).await.map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = data.len(), "read store document");
    parse_document(path, &data)
}

/// Parse raw document bytes, `path` is only used for error reporting
pub fn parse_document(path: &Path, data: &[u8]) -> Result<Document> {
    serde_json::from_slice(data).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
