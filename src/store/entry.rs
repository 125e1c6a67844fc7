//! Entry structures for key-value pairs

use super::value::Value;
use crate::digest;
use serde::{Deserialize, Serialize};

/// Represents a single entry in the store
///
/// When `hashed` is true, `value` holds the hex digest of the original input
/// and the input itself is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The key
    pub key: String,

    /// The value, or its digest when hashed
    pub value: Value,

    /// Whether `value` is a one-way digest
    pub hashed: bool,
}

impl Entry {
    /// Create an unhashed entry holding `value` as given
    pub fn plain(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
            hashed: false,
        }
    }

    /// Create a hashed entry from the original input
    pub fn hashed(key: impl Into<String>, value: &Value) -> Self {
        Entry {
            key: key.into(),
            value: Value::String(digest::digest_hex(&value.digest_input())),
            hashed: true,
        }
    }

    /// Check a candidate against this entry
    ///
    /// Hashed entries compare digests, plain entries compare structurally.
    pub fn matches(&self, candidate: &Value) -> bool {
        if self.hashed {
            match self.value.as_str() {
                Some(stored) => digest::verify(&candidate.digest_input(), stored),
                None => false,
            }
        } else {
            self.value == *candidate
        }
    }
}

/// A write request: key, value and an optional hashing override
///
/// `hashed: None` defers to the store's default hashing policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub key: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed: Option<bool>,
}

impl NewEntry {
    /// Create a write request that follows the store default
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        NewEntry {
            key: key.into(),
            value: value.into(),
            hashed: None,
        }
    }

    /// Explicitly request (or refuse) hashing for this write
    pub fn hashed(mut self, hashed: bool) -> Self {
        self.hashed = Some(hashed);
        self
    }

    /// Resolve the hashing decision against the store default
    ///
    /// Hashed when the default is on and not explicitly refused, or when
    /// explicitly requested.
    pub fn should_hash(&self, hash_by_default: bool) -> bool {
        match self.hashed {
            Some(explicit) => explicit,
            None => hash_by_default,
        }
    }

    /// Turn the request into the entry that gets stored
    pub fn into_entry(self, hash_by_default: bool) -> Entry {
        if self.should_hash(hash_by_default) {
            Entry::hashed(self.key, &self.value)
        } else {
            Entry {
                key: self.key,
                value: self.value,
                hashed: false,
            }
        }
    }
}
