//! In-memory storage module
//!
//! Provides the core data structures for storing key-value pairs in memory.
//! File persistence lives in [`crate::persist`]; this module only calls into it.

mod entry;
mod value;
mod memory;

pub use entry::{Entry, NewEntry};
pub use value::Value;
pub use memory::{KeyStore, StoreStats};
