//! # Menus
//!
//! A [`Menu`] owns its items, its validated configuration and the attributes
//! of its container tag. It is the only way to create items, so every item's
//! parent is guaranteed to exist at the moment the item is added.
//!
//! ## Cursors
//!
//! Items only know their parent by name, so anything that needs to look at
//! relatives (children, parent, activation propagation, data cascade) goes
//! through the menu. Two cursor types wrap an item together with its menu:
//!
//! - [`ItemRef`]: shared access. Derefs to [`Item`] and adds tree queries
//!   (`children`, `parent`, `has_active_child`, ...), URL resolution and
//!   rendering through the menu's collaborators.
//! - [`ItemMut`]: exclusive access, returned by [`Menu::add_item`]. Derefs
//!   mutably to [`Item`] and offers consuming, chainable operations that need
//!   the rest of the tree (`activate`, `with_data`, `add_sub_item`, ...).
//!
//! ```
//! use navmenu::{Menu, MenuConfiguration, MenuContext, StaticUrlResolver};
//!
//! let context = MenuContext::new(StaticUrlResolver::new("http://menu.test"));
//! let mut menu = Menu::new("main", MenuConfiguration::default(), context);
//!
//! menu.add_item("home", "Home", "/").unwrap();
//! menu.add_item("about", "About", "/about")
//!     .unwrap()
//!     .add_sub_item("team", "Team", "/about/team")
//!     .unwrap();
//!
//! let about = menu.item("about").unwrap();
//! assert!(about.has_child("team"));
//! assert_eq!(about.url().as_deref(), Some("http://menu.test/about"));
//! ```

use crate::attributes::AttributeBag;
use crate::collection::{ItemCollection, Items};
use crate::config::{ActiveElement, MenuConfiguration};
use crate::context::{Authenticatable, MenuContext};
use crate::error::{MenuError, Result};
use crate::item::{Item, ItemOptions};
use crate::metadata::expect_object;
use serde_json::Value;
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// Menu renderer used when neither the call nor the menu names one.
pub const DEFAULT_MENU_RENDERER: &str = "ul";

/// Item renderer used when neither the call nor the item names one.
pub const DEFAULT_ITEM_RENDERER: &str = "li";

#[derive(Debug, Clone)]
pub struct Menu {
    name: String,
    config: MenuConfiguration,
    items: ItemCollection,
    pub attributes: AttributeBag,
    renderer: Option<String>,
    context: MenuContext,
}

impl Menu {
    pub fn new(name: impl Into<String>, config: MenuConfiguration, context: MenuContext) -> Self {
        Self {
            name: name.into(),
            config,
            items: ItemCollection::new(),
            attributes: AttributeBag::new(),
            renderer: None,
            context,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &MenuConfiguration {
        &self.config
    }

    pub fn context(&self) -> &MenuContext {
        &self.context
    }

    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    /// Write access to the items for lookups, removal and bulk updates.
    ///
    /// New items can only be added through [`add_item`](Self::add_item),
    /// which checks the parent and ties the item to this menu:
    ///
    /// ```compile_fail
    /// use navmenu::{Menu, MenuConfiguration, MenuContext};
    ///
    /// let mut source = Menu::new("source", MenuConfiguration::default(), MenuContext::default());
    /// source.add_item("home", "Home", "/").unwrap();
    /// let home = source.get_item("home").unwrap().clone();
    ///
    /// let mut target = Menu::new("target", MenuConfiguration::default(), MenuContext::default());
    /// target.items_mut().add_item(home).unwrap();
    /// ```
    pub fn items_mut(&mut self) -> &mut ItemCollection {
        &mut self.items
    }

    pub fn renderer(&self) -> Option<&str> {
        self.renderer.as_deref()
    }

    /// Sets the renderer used by [`render(None)`](Self::render).
    pub fn set_renderer(&mut self, renderer: impl Into<String>) -> &mut Self {
        self.renderer = Some(renderer.into());
        self
    }

    /// Creates an item and appends it to the menu.
    ///
    /// The parent named in the options must already exist
    /// ([`MenuError::ItemNotFound`]) and the name must be unused
    /// ([`MenuError::DuplicateItemName`]). Nothing is added on failure. The
    /// new item is activated right away when auto activation is on and it
    /// matches the current request.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        options: impl Into<ItemOptions>,
    ) -> Result<ItemMut<'_>> {
        let name = name.into();
        let mut options = options.into();

        options.parent = options.parent.filter(|parent| !parent.is_empty());
        if let Some(parent) = &options.parent {
            if !self.items.has(parent) {
                return Err(MenuError::ItemNotFound {
                    item: parent.clone(),
                    menu: self.name.clone(),
                });
            }
        }

        let item = Item::new(&self.name, name, title, options, self.config.active_class());
        let index = self.items.count();
        self.items.add_item(item)?;
        debug!(menu = %self.name, item = %self.items.at(index).name(), "item added");

        self.check_activation_at(index);
        Ok(ItemMut { menu: self, index })
    }

    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn item(&self, name: &str) -> Option<ItemRef<'_>> {
        self.items.get(name).map(|item| ItemRef { menu: self, item })
    }

    pub fn item_mut(&mut self, name: &str) -> Option<ItemMut<'_>> {
        let index = self.items.position(name)?;
        Some(ItemMut { menu: self, index })
    }

    /// Root items as cursors, in menu order.
    pub fn root_items(&self) -> impl Iterator<Item = ItemRef<'_>> + '_ {
        self.items
            .roots()
            .into_iter()
            .map(move |item| ItemRef { menu: self, item })
    }

    /// Removes an item, and with `remove_children` all of its descendants.
    ///
    /// Descendants are removed before their ancestors. Without
    /// `remove_children` the children stay in the menu and keep referring to
    /// the removed parent by name.
    pub fn remove_item(&mut self, name: &str, remove_children: bool) -> bool {
        if remove_children {
            let mut descendants = Vec::new();
            self.collect_descendants(name, &mut vec![name.to_string()], &mut descendants);
            for descendant in descendants {
                self.items.remove(&descendant);
                debug!(menu = %self.name, item = %descendant, "item removed");
            }
        }

        let removed = self.items.remove(name);
        if removed {
            debug!(menu = %self.name, item = %name, "item removed");
        }
        removed
    }

    /// Drops every item, keeping the menu and its configuration.
    pub fn clear(&mut self) {
        self.items = ItemCollection::new();
    }

    /// Renders the menu with a named renderer, falling back to the menu's own
    /// renderer and then to [`DEFAULT_MENU_RENDERER`].
    pub fn render(&self, renderer: Option<&str>) -> Result<String> {
        let name = renderer
            .or(self.renderer.as_deref())
            .unwrap_or(DEFAULT_MENU_RENDERER);
        debug!(menu = %self.name, renderer = %name, "rendering menu");
        self.context.renderers.menu_renderer(name)?.render(self)
    }

    fn check_activation_at(&mut self, index: usize) {
        if !self.config.auto_activate() {
            return;
        }
        if self.items.at(index).current_url_matches(self.context.urls.as_ref()) {
            self.activate_at(index);
        }
    }

    /// Activates an item and, when configured, its ancestors.
    ///
    /// Stops at a root, at a parent that no longer exists, or at an item
    /// already visited during this walk.
    fn activate_at(&mut self, index: usize) {
        let mut visited = vec![false; self.items.count()];
        let mut current = Some(index);

        while let Some(index) = current {
            if visited[index] {
                break;
            }
            visited[index] = true;

            let item = self.items.at_mut(index);
            match self.config.active_element() {
                ActiveElement::Item => item.set_to_active(self.config.active_class()),
                ActiveElement::Link => {
                    if let Some(link) = item.link.as_mut() {
                        link.activate();
                    }
                }
            }
            debug!(menu = %self.name, item = %item.name(), "item activated");

            if !self.config.activate_parents() {
                break;
            }
            let parent = item.parent_name().map(str::to_string);
            current = parent.and_then(|parent| self.items.position(&parent));
        }
    }

    /// Writes metadata on an item, copying it to all descendants when
    /// cascading is enabled.
    fn with_data_at(&mut self, index: usize, key: &str, value: &Value) {
        let mut visited = vec![false; self.items.count()];
        let mut pending = vec![index];

        while let Some(index) = pending.pop() {
            if visited[index] {
                continue;
            }
            visited[index] = true;

            self.items.at_mut(index).data.set(key, value.clone());
            if self.config.cascade_data() {
                let name = self.items.at(index).name().to_string();
                pending.extend(self.children_indices(&name));
            }
        }
    }

    /// Descendants of `name`, each listed after its own descendants.
    fn collect_descendants(&self, name: &str, seen: &mut Vec<String>, order: &mut Vec<String>) {
        for child in self.items.children_of(name) {
            if seen.iter().any(|s| s == child.name()) {
                continue;
            }
            seen.push(child.name().to_string());
            self.collect_descendants(child.name(), seen, order);
            order.push(child.name().to_string());
        }
    }

    fn children_indices(&self, name: &str) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.parent_name() == Some(name))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Shared access to an item in the context of its menu.
#[derive(Debug, Clone, Copy)]
pub struct ItemRef<'a> {
    menu: &'a Menu,
    item: &'a Item,
}

impl<'a> ItemRef<'a> {
    pub fn menu(&self) -> &'a Menu {
        self.menu
    }

    pub fn item(&self) -> &'a Item {
        self.item
    }

    /// Items whose parent is this item, in menu order.
    pub fn children(&self) -> Items<'a> {
        self.menu.items.children_of(self.item.name())
    }

    /// Children visible to `user` (the current user when `None`).
    pub fn children_allowed(&self, user: Option<&dyn Authenticatable>) -> Items<'a> {
        let auth = self.menu.context.auth.as_ref();
        self.children().filter(|child| child.is_allowed(user, auth))
    }

    /// Children as cursors.
    pub fn child_items(&self) -> impl Iterator<Item = ItemRef<'a>> + 'a {
        let menu = self.menu;
        self.children()
            .into_iter()
            .map(move |item| ItemRef { menu, item })
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn has_active_child(&self) -> bool {
        !self.children().actives().is_empty()
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.children().has(name)
    }

    pub fn get_child_item(&self, name: &str) -> Option<ItemRef<'a>> {
        let menu = self.menu;
        self.children().get(name).map(|item| ItemRef { menu, item })
    }

    /// The parent item, `None` for roots and for removed parents.
    pub fn parent(&self) -> Option<ItemRef<'a>> {
        let parent = self.menu.items.get(self.item.parent_name()?)?;
        Some(ItemRef {
            menu: self.menu,
            item: parent,
        })
    }

    /// Resolved link target through the menu's URL resolver.
    pub fn url(&self) -> Option<String> {
        self.item.url(self.menu.context.urls.as_ref())
    }

    /// Authorization against `user`, or the current user when `None`.
    pub fn is_allowed(&self, user: Option<&dyn Authenticatable>) -> bool {
        self.item.is_allowed(user, self.menu.context.auth.as_ref())
    }

    /// Renders the item with a named renderer, falling back to the item's
    /// own renderer and then to [`DEFAULT_ITEM_RENDERER`].
    pub fn render(&self, renderer: Option<&str>) -> Result<String> {
        let name = renderer
            .or(self.item.renderer())
            .unwrap_or(DEFAULT_ITEM_RENDERER);
        self.menu.context.renderers.item_renderer(name)?.render(*self)
    }
}

impl Deref for ItemRef<'_> {
    type Target = Item;

    fn deref(&self) -> &Item {
        self.item
    }
}

/// Exclusive access to an item in the context of its menu.
///
/// Methods consume the cursor and hand it back so that calls can be chained
/// right after [`Menu::add_item`].
#[derive(Debug)]
pub struct ItemMut<'a> {
    menu: &'a mut Menu,
    index: usize,
}

impl<'a> ItemMut<'a> {
    /// Marks the item active following the menu's `active_element` and
    /// `activate_parents` settings.
    pub fn activate(self) -> Self {
        self.menu.activate_at(self.index);
        self
    }

    /// Activates the item when the current path matches `pattern`, where
    /// `*` matches anything (`"/articles/*"`).
    pub fn activate_on_urls(self, pattern: &str) -> Self {
        self.menu.items.at_mut(self.index).set_active_url_pattern(pattern);
        self.menu.check_activation_at(self.index);
        self
    }

    /// Sets a metadata entry, cascading it to the current descendants when
    /// `cascade_data` is enabled.
    pub fn with_data(self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.menu.with_data_at(self.index, key, &value);
        self
    }

    /// Merges a JSON object into the metadata, entry by entry through
    /// [`with_data`](Self::with_data). Anything but an object is rejected
    /// before any entry is written.
    pub fn push_data(self, data: Value) -> Result<Self> {
        let entries = expect_object(data)?;
        for (key, value) in entries {
            self.menu.with_data_at(self.index, &key, &value);
        }
        Ok(self)
    }

    pub fn allow_if_user_can(mut self, permission: impl Into<String>) -> Self {
        self.item_mut().allow_if_user_can(permission);
        self
    }

    pub fn allow_if<F>(mut self, check: F) -> Self
    where
        F: Fn(Option<&dyn Authenticatable>) -> bool + 'static,
    {
        self.item_mut().allow_if(check);
        self
    }

    pub fn append(mut self, html: &str) -> Self {
        self.item_mut().append(html);
        self
    }

    pub fn prepend(mut self, html: &str) -> Self {
        self.item_mut().prepend(html);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.item_mut().attributes.set(name, value);
        self
    }

    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.item_mut().set_renderer(renderer);
        self
    }

    /// Adds an item under this one and returns the new item.
    pub fn add_sub_item(
        self,
        name: impl Into<String>,
        title: impl Into<String>,
        options: impl Into<ItemOptions>,
    ) -> Result<ItemMut<'a>> {
        let parent = self.name().to_string();
        let ItemMut { menu, .. } = self;
        menu.add_item(name, title, options.into().parent(parent))
    }

    pub fn as_item_ref(&self) -> ItemRef<'_> {
        let menu: &Menu = self.menu;
        ItemRef {
            menu,
            item: menu.items.at(self.index),
        }
    }

    /// Gives up write access, keeping a shared cursor.
    pub fn into_item_ref(self) -> ItemRef<'a> {
        let menu: &'a Menu = self.menu;
        ItemRef {
            menu,
            item: menu.items.at(self.index),
        }
    }

    fn item_mut(&mut self) -> &mut Item {
        self.menu.items.at_mut(self.index)
    }
}

impl Deref for ItemMut<'_> {
    type Target = Item;

    fn deref(&self) -> &Item {
        self.menu.items.at(self.index)
    }
}

impl DerefMut for ItemMut<'_> {
    fn deref_mut(&mut self) -> &mut Item {
        self.item_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuOptions;
    use crate::context::StaticUrlResolver;
    use serde_json::json;

    fn menu_at(path: &str, options: MenuOptions) -> Menu {
        let urls = StaticUrlResolver::new("http://menu.test").with_current_path(path);
        let config = MenuConfiguration::new(&options).unwrap();
        Menu::new("main", config, MenuContext::new(urls))
    }

    fn menu() -> Menu {
        menu_at("/", MenuOptions::default())
    }

    #[test]
    fn test_add_item_returns_new_item() {
        let mut menu = menu();
        let item = menu.add_item("about", "About", "/about").unwrap();

        assert_eq!(item.name(), "about");
        assert_eq!(item.menu_name(), "main");
        assert_eq!(menu.items().count(), 1);
    }

    #[test]
    fn test_unknown_parent_is_rejected_without_side_effects() {
        let mut menu = menu();
        let err = menu
            .add_item("team", "Team", ItemOptions::from("/team").parent("about"))
            .unwrap_err();

        assert!(matches!(err, MenuError::ItemNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Item named `about` could not be found in the `main` menu"
        );
        assert!(menu.items().is_empty());
    }

    #[test]
    fn test_empty_parent_means_root() {
        let mut menu = menu();
        menu.add_item("home", "Home", ItemOptions::from("/x").parent("")).unwrap();
        assert!(!menu.get_item("home").unwrap().has_parent());
    }

    #[test]
    fn test_duplicate_item_keeps_original() {
        let mut menu = menu();
        menu.add_item("home", "Home", "/x").unwrap();
        assert!(menu.add_item("home", "Other", "/y").is_err());

        assert_eq!(menu.items().count(), 1);
        assert_eq!(menu.get_item("home").unwrap().title, "Home");
    }

    #[test]
    fn test_sub_items() {
        let mut menu = menu();
        menu.add_item("about", "About", "/about")
            .unwrap()
            .add_sub_item("team", "Team", "/about/team")
            .unwrap()
            .add_sub_item("lead", "Lead", "/about/team/lead")
            .unwrap();

        let team = menu.item("team").unwrap();
        assert_eq!(team.parent().map(|p| p.name().to_string()), Some("about".into()));
        assert!(team.has_child("lead"));
        assert_eq!(menu.item("about").unwrap().children().names(), vec!["team"]);
    }

    #[test]
    fn test_remove_item_with_children() {
        let mut menu = menu();
        menu.add_item("root", "Root", "/r").unwrap()
            .add_sub_item("child", "Child", "/r/c").unwrap()
            .add_sub_item("grandchild", "Grandchild", "/r/c/g").unwrap();
        menu.add_item("other", "Other", "/o").unwrap();

        assert!(menu.remove_item("root", true));
        assert_eq!(menu.items().view().names(), vec!["other"]);
    }

    #[test]
    fn test_remove_item_without_children_leaves_orphans() {
        let mut menu = menu();
        menu.add_item("root", "Root", "/r").unwrap()
            .add_sub_item("child", "Child", "/r/c").unwrap();

        assert!(menu.remove_item("root", false));
        let child = menu.item("child").unwrap();
        assert_eq!(child.parent_name(), Some("root"));
        assert!(child.parent().is_none());
        assert!(!menu.remove_item("root", true));
    }

    #[test]
    fn test_reused_parent_name_does_not_loop() {
        let mut menu = menu_at("/b", MenuOptions::default());
        menu.add_item("a", "A", "/a").unwrap()
            .add_sub_item("b", "B", "/x").unwrap();
        menu.remove_item("a", false);
        menu.add_item("a", "A", ItemOptions::from("/b").parent("b")).unwrap();

        assert!(menu.get_item("a").unwrap().is_active());
        assert!(menu.get_item("b").unwrap().is_active());
        assert!(menu.remove_item("a", true));
        assert!(menu.items().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut menu = menu();
        menu.add_item("a", "A", "/a").unwrap();
        menu.attributes.set("class", "nav");
        menu.clear();

        assert!(menu.items().is_empty());
        assert_eq!(menu.attributes.get("class"), Some("nav"));
    }

    #[test]
    fn test_exact_url_activates_on_add() {
        let mut menu = menu_at("/about", MenuOptions::default());
        menu.add_item("home", "Home", "/").unwrap();
        menu.add_item("about", "About", "/about").unwrap();

        assert_eq!(menu.items().actives().names(), vec!["about"]);
        assert_eq!(menu.get_item("about").unwrap().attributes.get("class"), Some("active"));
    }

    #[test]
    fn test_auto_activate_can_be_disabled() {
        let mut menu = menu_at("/about", MenuOptions::default().auto_activate(false));
        menu.add_item("about", "About", "/about").unwrap();

        assert!(menu.items().actives().is_empty());
    }

    #[test]
    fn test_activation_bubbles_to_parents() {
        let mut menu = menu_at("/about/team", MenuOptions::default());
        menu.add_item("about", "About", "/about").unwrap()
            .add_sub_item("team", "Team", "/about/team").unwrap();

        assert!(menu.get_item("about").unwrap().is_active());
        assert!(menu.item("about").unwrap().has_active_child());
    }

    #[test]
    fn test_parent_activation_can_be_disabled() {
        let mut menu = menu_at("/about/team", MenuOptions::default().activate_parents(false));
        menu.add_item("about", "About", "/about").unwrap()
            .add_sub_item("team", "Team", "/about/team").unwrap();

        assert!(!menu.get_item("about").unwrap().is_active());
        assert!(menu.get_item("team").unwrap().is_active());
    }

    #[test]
    fn test_link_element_activation() {
        let mut menu = menu_at("/about/team", MenuOptions::default().active_element("link"));
        menu.add_item("about", "About", "/about").unwrap()
            .add_sub_item("team", "Team", "/about/team").unwrap();

        for name in ["about", "team"] {
            let item = menu.get_item(name).unwrap();
            assert!(!item.is_active());
            assert!(item.link.as_ref().unwrap().is_active());
            assert!(item.is_item_or_link_active());
        }
    }

    #[test]
    fn test_manual_activation() {
        let mut menu = menu();
        menu.add_item("team", "Team", "#").unwrap().activate().activate();

        let team = menu.get_item("team").unwrap();
        assert!(team.is_active());
        assert_eq!(team.attributes.get("class"), Some("active"));
    }

    #[test]
    fn test_activate_on_urls() {
        let mut menu = menu_at("/article/42", MenuOptions::default());
        menu.add_item("articles", "Articles", "/articles").unwrap()
            .activate_on_urls("/article/*");
        menu.add_item("pages", "Pages", "/pages").unwrap()
            .activate_on_urls("/page/*");

        assert_eq!(menu.items().actives().names(), vec!["articles"]);
    }

    #[test]
    fn test_with_data_without_cascade() {
        let mut menu = menu();
        menu.add_item("about", "About", "/about").unwrap()
            .add_sub_item("team", "Team", "/about/team").unwrap();
        menu.item_mut("about").unwrap().with_data("Icon", "info");

        assert_eq!(menu.get_item("about").unwrap().data.get("icon"), Some(&json!("info")));
        assert!(!menu.get_item("team").unwrap().data.has("icon"));
    }

    #[test]
    fn test_with_data_cascades_to_descendants() {
        let mut menu = menu_at("/", MenuOptions::default().cascade_data(true));
        menu.add_item("about", "About", "/about").unwrap()
            .add_sub_item("team", "Team", "/about/team").unwrap()
            .add_sub_item("lead", "Lead", "/about/team/lead").unwrap();
        menu.item_mut("about").unwrap().with_data("section", "company");
        menu.add_item("jobs", "Jobs", ItemOptions::from("/about/jobs").parent("about")).unwrap();

        for name in ["about", "team", "lead"] {
            assert_eq!(
                menu.get_item(name).unwrap().data.get("section"),
                Some(&json!("company"))
            );
        }
        assert!(!menu.get_item("jobs").unwrap().data.has("section"));
    }

    #[test]
    fn test_push_data() {
        let mut menu = menu();
        let item = menu.add_item("about", "About", "/about").unwrap();
        let item = item.push_data(json!({ "Icon": "info", "badge": 3 })).unwrap();

        assert_eq!(item.data.get("icon"), Some(&json!("info")));
        assert_eq!(item.data.get("badge"), Some(&json!(3)));
    }

    #[test]
    fn test_push_data_rejects_lists() {
        let mut menu = menu();
        let item = menu.add_item("about", "About", "/about").unwrap();
        let err = item.push_data(json!(["info", 3])).unwrap_err();

        assert!(matches!(err, MenuError::InvalidArgument(_)));
        assert!(menu.get_item("about").unwrap().data.is_empty());
    }

    #[test]
    fn test_cursor_chaining() {
        let mut menu = menu();
        menu.add_item("about", "About", "/about")
            .unwrap()
            .attr("id", "about")
            .append(" <span class=\"badge\">2</span>")
            .with_renderer("div");

        let about = menu.get_item("about").unwrap();
        assert_eq!(about.attributes.get("id"), Some("about"));
        assert_eq!(about.title, "About <span class=\"badge\">2</span>");
        assert_eq!(about.renderer(), Some("div"));
    }

    #[test]
    fn test_root_items() {
        let mut menu = menu();
        menu.add_item("a", "A", "/a").unwrap().add_sub_item("b", "B", "/b").unwrap();
        menu.add_item("c", "C", "/c").unwrap();

        let roots: Vec<String> = menu.root_items().map(|item| item.name().to_string()).collect();
        assert_eq!(roots, vec!["a", "c"]);
    }
}
