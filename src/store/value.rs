//! Value types for the key-value store

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::borrow::Cow;

/// A stored value: either a raw string or a structured JSON value
///
/// Strings always use the `String` variant, so `Structured` never wraps a
/// bare JSON string. Equality is structural on the JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Raw string value
    String(String),

    /// Any other JSON value (object, array, number, bool, null)
    Structured(Json),
}

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a value from arbitrary JSON
    pub fn structured(json: Json) -> Self {
        match json {
            Json::String(s) => Value::String(s),
            other => Value::Structured(other),
        }
    }

    /// Try to get as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Structured(Json::String(s)) => Some(s),
            Value::Structured(_) => None,
        }
    }

    /// The JSON form of this value
    pub fn to_json(&self) -> Json {
        match self {
            Value::String(s) => Json::String(s.clone()),
            Value::Structured(json) => json.clone(),
        }
    }

    /// Compact JSON with object keys sorted at every depth
    ///
    /// Two logically equal values always render to the same text, whatever
    /// order their fields were inserted in.
    pub fn canonical_json(&self) -> String {
        let mut out = String::new();
        match self {
            Value::String(s) => write_canonical(&Json::String(s.clone()), &mut out),
            Value::Structured(json) => write_canonical(json, &mut out),
        }
        out
    }

    /// Bytes fed to the digest: raw UTF-8 for strings, canonical JSON otherwise
    pub fn digest_input(&self) -> Cow<'_, [u8]> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_bytes()),
            Value::Structured(Json::String(s)) => Cow::Borrowed(s.as_bytes()),
            Value::Structured(_) => Cow::Owned(self.canonical_json().into_bytes()),
        }
    }
}

fn write_canonical(json: &Json, out: &mut String) {
    match json {
        Json::Object(map) => {
            let mut fields: Vec<(&String, &Json)> = map.iter().collect();
            fields.sort_by(|(a, _), (b, _)| a.cmp(b));

            out.push('{');
            for (i, (key, value)) in fields.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Json::String(key.clone()).to_string());
                out.push(':');
                write_canonical(value, out);
            }
            out.push('}');
        }
        Json::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            _ => self.to_json() == other.to_json(),
        }
    }
}

impl Eq for Value {}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::structured(json)
    }
}
