//! In-memory storage implementation

use super::entry::{Entry, NewEntry};
use super::value::Value;
use crate::config::{SaveOptions, StoreInit, StoreSettings};
use crate::error::{Result, StoreError};
use crate::persist;
use siphasher::sip::SipHasher13;
use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::hash::BuildHasherDefault;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Type alias for our hash map with SipHasher
type StoreMap = HashMap<String, Entry, BuildHasherDefault<SipHasher13>>;

/// In-memory key-value store with optional one-way hashing
///
/// The store owns its map exclusively. Every mutation takes `&mut self` and
/// runs to completion; only the file operations are asynchronous.
///
/// Bulk writes are fail-fast and not atomic: the first failing item stops the
/// batch and is returned, and items applied before it stay applied.
#[derive(Debug, Clone)]
pub struct KeyStore {
    /// The main storage map
    store: StoreMap,

    /// Settings fixed at construction
    settings: StoreSettings,
}

impl KeyStore {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self::with_settings(StoreSettings::default())
    }

    /// Create an empty store with the given settings
    pub fn with_settings(settings: StoreSettings) -> Self {
        KeyStore {
            store: HashMap::with_hasher(BuildHasherDefault::<SipHasher13>::default()),
            settings,
        }
    }

    /// Create a store and seed it
    ///
    /// Seed entries are applied in order with overwrite allowed, so a later
    /// duplicate replaces an earlier one instead of failing.
    pub fn from_init(init: StoreInit) -> Self {
        let mut store = Self::with_settings(init.settings);
        for entry in init.data {
            let entry = entry.into_entry(store.settings.hash_by_default);
            store.put(entry);
        }
        store
    }

    /// Settings the store was built with
    pub fn settings(&self) -> StoreSettings {
        self.settings
    }

    /// Read an entry, `None` if the key is unknown
    pub fn read(&self, key: &str) -> Option<&Entry> {
        self.store.get(key)
    }

    /// Owned snapshot of every entry, keyed and sorted by key
    pub fn read_all(&self) -> BTreeMap<String, Entry> {
        self.store
            .iter()
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect()
    }

    /// Iterate over entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.store.values()
    }

    /// Save one entry
    ///
    /// Fails with `DuplicateKey` if the key exists and `options.overwrite` is
    /// not set; nothing is changed in that case. Otherwise the entry fully
    /// replaces whatever was stored at the key.
    pub fn save(&mut self, entry: NewEntry, options: SaveOptions) -> Result<()> {
        self.check_overwrite(&entry.key, options)?;
        let entry = entry.into_entry(self.settings.hash_by_default);
        self.put(entry);
        Ok(())
    }

    /// Save entries in order, returns how many were written
    pub fn save_bulk<I>(&mut self, entries: I, options: SaveOptions) -> Result<usize>
    where
        I: IntoIterator<Item = NewEntry>,
    {
        let mut applied = 0;
        for entry in entries {
            if let Err(e) = self.save(entry, options) {
                warn!(applied, "bulk save aborted: {}", e);
                return Err(e);
            }
            applied += 1;
        }
        Ok(applied)
    }

    /// Load entries from a store document on disk, returns how many were written
    ///
    /// Fails with `Io` if the file cannot be read and `Parse` if it is not a
    /// valid document. Records are applied in key order under the same
    /// overwrite rule as [`save`](Self::save). Records already flagged as
    /// hashed are restored as they are, never hashed a second time.
    pub async fn save_bulk_from_file(
        &mut self,
        path: impl AsRef<Path>,
        options: SaveOptions,
    ) -> Result<usize> {
        let path = path.as_ref();
        let document = persist::read_document(path).await?;

        let mut applied = 0;
        for (key, record) in document {
            if let Err(e) = self.check_overwrite(&key, options) {
                warn!(path = %path.display(), applied, "file load aborted: {}", e);
                return Err(e);
            }
            let entry = record.restore(key, self.settings.hash_by_default);
            self.put(entry);
            applied += 1;
        }

        info!(path = %path.display(), applied, "loaded entries from file");
        Ok(applied)
    }

    /// Replace an existing entry, fails with `KeyNotFound` if absent
    pub fn update(&mut self, entry: NewEntry) -> Result<()> {
        if !self.store.contains_key(&entry.key) {
            return Err(StoreError::not_found(&entry.key));
        }
        self.save(entry, SaveOptions::overwrite())
    }

    /// Delete a key, returns the removed entry if there was one
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let removed = self.store.remove(key);
        if removed.is_some() {
            debug!(key, "removed entry");
        }
        removed
    }

    /// Delete several keys, returns how many were actually present
    pub fn remove_bulk<I, K>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut removed = 0;
        for key in keys {
            if self.remove(key.as_ref()).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Remove all keys
    pub fn clear(&mut self) {
        debug!(entries = self.store.len(), "cleared store");
        self.store.clear();
    }

    /// Write the whole store to `path` as tab-indented JSON
    ///
    /// The snapshot is taken when `dump` is called, not when the returned
    /// future runs. The future owns its data, so the store stays usable
    /// (and mutable) while the write is pending.
    pub fn dump(&self, path: impl AsRef<Path>) -> impl Future<Output = Result<()>> + Send + 'static {
        self.dump_to(path.as_ref().to_path_buf())
    }

    fn dump_to(&self, path: PathBuf) -> impl Future<Output = Result<()>> + Send + 'static {
        let entries = self.store.len();
        let rendered = persist::render_document(&persist::document_from_entries(self.store.values()));

        async move {
            let data = rendered?;
            persist::write_document(&path, &data).await?;
            info!(path = %path.display(), entries, "dumped store to file");
            Ok::<_, StoreError>(())
        }
    }

    /// Get the number of entries
    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Same as [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.store.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Check a candidate against the stored value
    ///
    /// Hashed entries compare the candidate's digest, plain entries compare
    /// structurally. Fails with `KeyNotFound` if the key is absent.
    pub fn is_equal(&self, key: &str, candidate: impl Into<Value>) -> Result<bool> {
        let entry = self.store.get(key).ok_or_else(|| StoreError::not_found(key))?;
        Ok(entry.matches(&candidate.into()))
    }

    /// Whether the entry at `key` holds a digest, fails with `KeyNotFound` if absent
    pub fn is_hashed(&self, key: &str) -> Result<bool> {
        self.store
            .get(key)
            .map(|entry| entry.hashed)
            .ok_or_else(|| StoreError::not_found(key))
    }

    /// Check if a key exists
    pub fn exists(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    /// Get statistics about the store
    pub fn stats(&self) -> StoreStats {
        let hashed = self.store.values().filter(|entry| entry.hashed).count();

        StoreStats {
            entries: self.store.len(),
            hashed,
            plain: self.store.len() - hashed,
        }
    }

    fn check_overwrite(&self, key: &str, options: SaveOptions) -> Result<()> {
        if !options.overwrite && self.store.contains_key(key) {
            return Err(StoreError::duplicate(key));
        }
        Ok(())
    }

    fn put(&mut self, entry: Entry) {
        debug!(key = %entry.key, hashed = entry.hashed, "saved entry");
        self.store.insert(entry.key.clone(), entry);
    }
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub entries: usize,
    pub hashed: usize,
    pub plain: usize,
}
