//! Path-tracking access into raw CLI payloads

use serde_json::Value;

use crate::errors::WatchError;

/// A JSON value together with the dotted path it was reached by.
///
/// Absent keys and explicit `null`s are treated the same way: both make a
/// required lookup fail with [`WatchError::MissingField`].
#[derive(Debug, Clone)]
pub struct JsonNode<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> JsonNode<'a> {
    /// Wrap a payload root
    pub fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: String::new(),
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Dotted path of a child key
    pub fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Child node, `None` when missing or null
    pub fn get(&self, key: &str) -> Option<JsonNode<'a>> {
        self.value
            .get(key)
            .filter(|child| !child.is_null())
            .map(|child| JsonNode {
                value: child,
                path: self.child_path(key),
            })
    }

    /// Child node that must be present
    pub fn required(&self, key: &str) -> Result<JsonNode<'a>, WatchError> {
        self.get(key)
            .ok_or_else(|| WatchError::MissingField(self.child_path(key)))
    }

    pub fn as_str(&self) -> Result<&'a str, WatchError> {
        self.value
            .as_str()
            .ok_or_else(|| WatchError::invalid_field(&self.path, "expected a string"))
    }

    pub fn required_str(&self, key: &str) -> Result<&'a str, WatchError> {
        self.required(key)?.as_str()
    }

    /// String child that may be missing, but must be a string when present
    pub fn optional_str(&self, key: &str) -> Result<Option<&'a str>, WatchError> {
        self.get(key).map(|child| child.as_str()).transpose()
    }

    pub fn as_object(&self) -> Result<&'a serde_json::Map<String, Value>, WatchError> {
        self.value
            .as_object()
            .ok_or_else(|| WatchError::invalid_field(&self.path, "expected an object"))
    }
}
