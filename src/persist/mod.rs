//! JSON file persistence
//!
//! A store document is a JSON object keyed by store key. Each value is a
//! record carrying `value` (string or nested JSON) and `hashed`. There is no
//! version field and no checksum; loading trusts the `hashed` flag as written.

mod reader;
mod writer;

pub use reader::{parse_document, read_document};
pub use writer::{render_document, write_document};

use crate::store::{Entry, NewEntry, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A whole store document, keys sorted
pub type Document = BTreeMap<String, StoredRecord>;

/// One entry as it appears on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed: Option<bool>,
}

impl StoredRecord {
    /// Rebuild the stored entry for `key`
    ///
    /// A record flagged `hashed: true` already holds a digest and is kept
    /// verbatim. A record flagged `false` is kept as plain. A record without
    /// the flag goes through the store's default hashing policy.
    pub fn restore(self, key: String, hash_by_default: bool) -> Entry {
        match self.hashed {
            Some(hashed) => Entry {
                key,
                value: self.value,
                hashed,
            },
            None => NewEntry::new(key, self.value).into_entry(hash_by_default),
        }
    }
}

impl From<&Entry> for StoredRecord {
    fn from(entry: &Entry) -> Self {
        StoredRecord {
            value: entry.value.clone(),
            hashed: Some(entry.hashed),
        }
    }
}

/// Build a document from a set of entries
pub fn document_from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Document {
    entries
        .into_iter()
        .map(|entry| (entry.key.clone(), StoredRecord::from(entry)))
        .collect()
}
