//! HTML tag attributes.
//!
//! [`AttributeBag`] is an insertion-ordered map of attribute names to optional
//! values. An entry without a value is a *flag* (`disabled`, `hidden`) and is
//! serialized bare; an entry with a value is serialized as `name="value"`.
//! Insertion order is the serialization order, and replacing the value of an
//! existing name keeps its original position.

use navmenu_markup::{add_html_class, attrs_to_html};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeBag {
    entries: Vec<(String, Option<String>)>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a valued attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.upsert(name.into(), Some(value.into()));
    }

    /// Sets a valueless flag attribute, replacing any previous value.
    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.upsert(name.into(), None);
    }

    /// Sets an attribute that may or may not carry a value.
    pub fn set_optional(&mut self, name: impl Into<String>, value: Option<String>) {
        self.upsert(name.into(), value);
    }

    /// Merges several attributes at once. `None` values become flags.
    pub fn push<I, K, V>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attributes {
            self.upsert(name.into(), value.map(Into::into));
        }
    }

    /// Returns the value of an attribute.
    ///
    /// Flags and missing attributes both yield `None`; use [`has`](Self::has)
    /// to tell them apart.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Removes an attribute. Returns true if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(key, _)| key != name);
        self.entries.len() != before
    }

    /// Adds a class token to the `class` attribute (see [`add_html_class`]).
    pub fn add_class(&mut self, class: &str) {
        let merged = add_html_class(self.get("class"), class);
        self.set("class", merged);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Snapshot of all attributes keyed by name.
    pub fn to_map(&self) -> BTreeMap<String, Option<String>> {
        self.entries.iter().cloned().collect()
    }

    /// Serializes to ` key="value" flag ...`, or an empty string when empty.
    pub fn to_html(&self) -> String {
        attrs_to_html(self.iter())
    }

    fn upsert(&mut self, name: String, value: Option<String>) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for AttributeBag
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, Option<V>)>>(iter: T) -> Self {
        let mut bag = AttributeBag::new();
        bag.push(iter);
        bag
    }
}
