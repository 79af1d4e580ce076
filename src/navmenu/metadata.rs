//! Free-form item metadata.
//!
//! Keys are case-insensitive: they are lower-cased on every read and write.
//! Values are arbitrary JSON values. Enumeration follows insertion order.

use crate::error::{MenuError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataStore {
    entries: Vec<(String, Value)>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let key = key.to_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let key = key.to_lowercase();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let key = key.to_lowercase();
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Snapshot of every entry as a JSON object.
    pub fn all(&self) -> Map<String, Value> {
        self.entries.iter().cloned().collect()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges a JSON object into the store.
    ///
    /// Anything other than an object is rejected with
    /// [`MenuError::InvalidArgument`] and leaves the store untouched.
    pub fn push(&mut self, data: Value) -> Result<()> {
        for (key, value) in expect_object(data)? {
            self.set(&key, value);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MetadataStore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Unwraps a JSON object, rejecting every other kind of value.
pub(crate) fn expect_object(data: Value) -> Result<Map<String, Value>> {
    match data {
        Value::Object(map) => Ok(map),
        other => Err(MenuError::InvalidArgument(format!(
            "metadata must be a key/value object, got `{}`",
            other
        ))),
    }
}
