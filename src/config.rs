//! Store configuration
//!
//! Settings are plain serde structs with defaults, so they can be built in
//! code or read from a JSON document.

use crate::error::Result;
use crate::store::NewEntry;
use serde::{Deserialize, Serialize};

/// Store-wide settings fixed at construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreSettings {
    /// Hash every write unless the write opts out with `hashed: false`
    pub hash_by_default: bool,
}

impl StoreSettings {
    /// Settings with default hashing switched on
    pub fn hashed() -> Self {
        StoreSettings { hash_by_default: true }
    }

    /// Parse settings from a JSON document, missing fields take their default
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Per-call options for write operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveOptions {
    /// Allow replacing an entry that already exists at the key
    pub overwrite: bool,
}

impl SaveOptions {
    /// Options that permit replacing existing entries
    pub fn overwrite() -> Self {
        SaveOptions { overwrite: true }
    }
}

/// Everything needed to construct a store: settings plus optional seed data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreInit {
    pub settings: StoreSettings,
    pub data: Vec<NewEntry>,
}

impl StoreInit {
    pub fn new(settings: StoreSettings) -> Self {
        StoreInit { settings, data: Vec::new() }
    }

    /// Append seed entries, applied in order at construction
    pub fn with_data(mut self, data: impl IntoIterator<Item = NewEntry>) -> Self {
        self.data.extend(data);
        self
    }
}
