//! Document writer
//!
//! Renders a store document as tab-indented JSON and writes it out whole.

use super::Document;
use crate::error::{Result, StoreError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use tracing::debug;

/// Render `doc` as tab-indented JSON
pub fn render_document(doc: &Document) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    Ok(buf)
}

/// Write rendered bytes to `path`, replacing any existing file
pub async fn write_document(path: &Path, data: &[u8]) -> Result<()> {
    tokio::fs::write(path, data).await.map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = data.len(), "wrote store document");
    Ok(())
}
