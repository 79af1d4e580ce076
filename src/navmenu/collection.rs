//! # Item Collections
//!
//! [`ItemCollection`] is the single owner of a menu's items. It keeps them in
//! insertion order, which is also the render order, and refuses duplicate
//! names.
//!
//! Filtering never copies items: [`Items`] is a borrowed, ordered selection of
//! a collection's members that can be narrowed further. Derived views
//! (`roots`, `actives`, `having_children`, ...) are available on both types.
//! Bulk mutators work on the whole collection, or on a selection obtained
//! through [`ItemCollection::filter_mut`].

use crate::error::{MenuError, Result};
use crate::item::Item;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct ItemCollection {
    items: Vec<Item>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item, rejecting names already present.
    pub(crate) fn add_item(&mut self, item: Item) -> Result<&mut Item> {
        if self.has(item.name()) {
            return Err(MenuError::DuplicateItemName {
                item: item.name().to_string(),
                menu: item.menu_name().to_string(),
            });
        }

        self.items.push(item);
        let last = self.items.len() - 1;
        Ok(&mut self.items[last])
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.name() == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Removes an item by name (or by passing the item itself).
    ///
    /// Items referring to it as parent are left in place.
    pub fn remove(&mut self, item: impl AsRef<str>) -> bool {
        match self.position(item.as_ref()) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Every item, as a selection.
    pub fn view(&self) -> Items<'_> {
        Items {
            source: self,
            members: self.items.iter().collect(),
        }
    }

    pub fn filter<F>(&self, predicate: F) -> Items<'_>
    where
        F: Fn(&Item) -> bool,
    {
        self.view().filter(predicate)
    }

    pub fn roots(&self) -> Items<'_> {
        self.view().roots()
    }

    pub fn actives(&self) -> Items<'_> {
        self.view().actives()
    }

    pub fn having_children(&self) -> Items<'_> {
        self.view().having_children()
    }

    pub fn having_parent(&self) -> Items<'_> {
        self.view().having_parent()
    }

    pub fn filter_by_metadata(&self, key: &str, value: impl Into<Value>) -> Items<'_> {
        self.view().filter_by_metadata(key, value)
    }

    pub fn filter_by_attribute(&self, name: &str, value: &str) -> Items<'_> {
        self.view().filter_by_attribute(name, value)
    }

    /// Items whose parent is `name`, in collection order.
    pub fn children_of(&self, name: &str) -> Items<'_> {
        self.filter(|item| item.parent_name() == Some(name))
    }

    /// Mutable selection of the items accepted by `predicate`.
    pub fn filter_mut<F>(&mut self, predicate: F) -> ItemsMut<'_>
    where
        F: Fn(&Item) -> bool,
    {
        ItemsMut {
            members: self.items.iter_mut().filter(|item| predicate(item)).collect(),
        }
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.filter_mut(|_| true).set_attribute(name, value);
        self
    }

    pub fn set_data(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.filter_mut(|_| true).set_data(key, value);
        self
    }

    pub fn append_html(&mut self, html: &str) -> &mut Self {
        self.filter_mut(|_| true).append_html(html);
        self
    }

    pub fn prepend_html(&mut self, html: &str) -> &mut Self {
        self.filter_mut(|_| true).prepend_html(html);
        self
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    pub(crate) fn at(&self, index: usize) -> &Item {
        &self.items[index]
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut Item {
        &mut self.items[index]
    }

    fn has_children(&self, item: &Item) -> bool {
        self.items
            .iter()
            .any(|other| other.parent_name() == Some(item.name()))
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// An ordered selection of items borrowed from an [`ItemCollection`].
#[derive(Debug, Clone)]
pub struct Items<'a> {
    source: &'a ItemCollection,
    members: Vec<&'a Item>,
}

impl<'a> Items<'a> {
    pub fn filter<F>(self, predicate: F) -> Items<'a>
    where
        F: Fn(&Item) -> bool,
    {
        Items {
            source: self.source,
            members: self.members.into_iter().filter(|item| predicate(item)).collect(),
        }
    }

    /// Items without a parent.
    pub fn roots(self) -> Items<'a> {
        self.filter(|item| !item.has_parent())
    }

    /// Items where either the item or its link is active.
    pub fn actives(self) -> Items<'a> {
        self.filter(Item::is_item_or_link_active)
    }

    /// Items that are the parent of at least one item of the whole collection.
    pub fn having_children(self) -> Items<'a> {
        let source = self.source;
        self.filter(|item| source.has_children(item))
    }

    pub fn having_parent(self) -> Items<'a> {
        self.filter(Item::has_parent)
    }

    /// Items whose metadata `key` equals `value`.
    pub fn filter_by_metadata(self, key: &str, value: impl Into<Value>) -> Items<'a> {
        let value = value.into();
        self.filter(|item| item.data.get(key) == Some(&value))
    }

    /// Items whose attribute `name` equals `value`.
    pub fn filter_by_attribute(self, name: &str, value: &str) -> Items<'a> {
        self.filter(|item| item.attributes.get(name) == Some(value))
    }

    pub fn get(&self, name: &str) -> Option<&'a Item> {
        self.members.iter().copied().find(|item| item.name() == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn first(&self) -> Option<&'a Item> {
        self.members.first().copied()
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.members.iter().map(|item| item.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.members.iter().copied()
    }
}

impl<'a> IntoIterator for Items<'a> {
    type Item = &'a Item;
    type IntoIter = std::vec::IntoIter<&'a Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

/// A mutable selection of items, for bulk updates.
#[derive(Debug)]
pub struct ItemsMut<'a> {
    members: Vec<&'a mut Item>,
}

impl<'a> ItemsMut<'a> {
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        for item in self.members.iter_mut() {
            item.attributes.set(name, value.clone());
        }
        self
    }

    pub fn set_data(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        for item in self.members.iter_mut() {
            item.data.set(key, value.clone());
        }
        self
    }

    pub fn append_html(&mut self, html: &str) -> &mut Self {
        for item in self.members.iter_mut() {
            item.append(html);
        }
        self
    }

    pub fn prepend_html(&mut self, html: &str) -> &mut Self {
        for item in self.members.iter_mut() {
            item.prepend(html);
        }
        self
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Item> + use<'_, 'a> {
        self.members.iter_mut().map(|item| &mut **item)
    }
}
