//! Keyholder - a small in-memory key-value store with one-way hashing
//!
//! Values are strings or structured JSON. Any write can be stored as a
//! SHA-256 digest instead of the original, after which the store can only
//! confirm whether a candidate matches it. The whole store can be dumped to
//! and loaded from a JSON file.
//!
//! - [`store`] holds the entry map and the save/overwrite/hashing rules
//! - [`persist`] is the file format and async file plumbing
//! - [`digest`] is the one-way hash
//! - [`config`] and [`error`] are the settings and error types

pub mod config;
pub mod digest;
pub mod error;
pub mod persist;
pub mod store;

/// Re-export commonly used types
pub use config::{SaveOptions, StoreInit, StoreSettings};
pub use error::{Result, StoreError};
pub use store::{Entry, KeyStore, NewEntry, StoreStats, Value};
