//! # Menu Items
//!
//! An [`Item`] is one node of a menu tree. It is owned by the menu's
//! [`ItemCollection`](crate::collection::ItemCollection) and only knows its
//! parent by name: children are never stored, they are computed by scanning
//! the collection (see [`ItemRef::children`](crate::menu::ItemRef::children)).
//!
//! Items are created through [`Menu::add_item`](crate::menu::Menu::add_item)
//! with an [`ItemOptions`] value describing the link target, the parent, the
//! renderer hint and the initial tag attributes.

use crate::attributes::AttributeBag;
use crate::context::{AuthProvider, Authenticatable, UrlResolver};
use crate::error::{MenuError, Result};
use crate::link::{Link, LinkPath};
use crate::metadata::MetadataStore;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use tracing::warn;

/// Option keys that never end up as tag attributes.
pub const RESERVED_OPTIONS: [&str; 6] = ["route", "action", "url", "prefix", "parent", "renderer"];

/// A user check evaluated by [`Item::is_allowed`]. Receives `None` for guests.
pub type Predicate = Rc<dyn Fn(Option<&dyn Authenticatable>) -> bool>;

/// One entry of an item's authorization stack.
#[derive(Clone)]
pub enum Authorization {
    /// A named permission checked through the [`AuthProvider`].
    Permission(String),
    /// An arbitrary check on the user.
    Predicate(Predicate),
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authorization::Permission(p) => f.debug_tuple("Permission").field(p).finish(),
            Authorization::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Item {
    name: String,
    menu: String,
    pub title: String,
    parent: Option<String>,
    is_active: bool,
    pub link: Option<Link>,
    pub attributes: AttributeBag,
    pub data: MetadataStore,
    authorization: Vec<Authorization>,
    active_url_pattern: Option<String>,
    renderer: Option<String>,
}

impl Item {
    /// Builds a detached item. The parent name must already be validated
    /// against the owning menu.
    pub(crate) fn new(
        menu: &str,
        name: impl Into<String>,
        title: impl Into<String>,
        options: ItemOptions,
        active_class: &str,
    ) -> Self {
        let ItemOptions {
            path,
            parent,
            renderer,
            attributes,
        } = options;

        Self {
            name: name.into(),
            menu: menu.to_string(),
            title: title.into(),
            parent,
            is_active: false,
            link: path.map(|path| Link::new(Some(path), active_class)),
            attributes,
            data: MetadataStore::new(),
            authorization: Vec::new(),
            active_url_pattern: None,
            renderer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the menu owning this item.
    pub fn menu_name(&self) -> &str {
        &self.menu
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn has_link(&self) -> bool {
        self.link.is_some()
    }

    /// True when either the item or its link carries the active state.
    pub fn is_item_or_link_active(&self) -> bool {
        self.is_active || self.link.as_ref().is_some_and(Link::is_active)
    }

    /// Whether `property` is set either as a tag attribute or as metadata.
    pub fn has_property(&self, property: &str) -> bool {
        self.attributes.has(property) || self.data.has(property)
    }

    pub fn renderer(&self) -> Option<&str> {
        self.renderer.as_deref()
    }

    pub fn set_renderer(&mut self, renderer: impl Into<String>) -> &mut Self {
        self.renderer = Some(renderer.into());
        self
    }

    pub fn active_url_pattern(&self) -> Option<&str> {
        self.active_url_pattern.as_deref()
    }

    pub fn authorization(&self) -> &[Authorization] {
        &self.authorization
    }

    /// Appends raw HTML to the title.
    pub fn append(&mut self, html: &str) -> &mut Self {
        self.title.push_str(html);
        self
    }

    /// Prepends raw HTML to the title.
    pub fn prepend(&mut self, html: &str) -> &mut Self {
        self.title.insert_str(0, html);
        self
    }

    /// Requires the user to hold `permission`.
    pub fn allow_if_user_can(&mut self, permission: impl Into<String>) -> &mut Self {
        self.authorization
            .push(Authorization::Permission(permission.into()));
        self
    }

    /// Requires `check` to accept the user.
    pub fn allow_if<F>(&mut self, check: F) -> &mut Self
    where
        F: Fn(Option<&dyn Authenticatable>) -> bool + 'static,
    {
        self.authorization
            .push(Authorization::Predicate(Rc::new(check)));
        self
    }

    /// Evaluates the authorization stack.
    ///
    /// Without an explicit user the provider's current user is checked. Every
    /// entry must pass; an empty stack allows everybody, guests included. A
    /// named permission never passes for a guest.
    pub fn is_allowed(&self, user: Option<&dyn Authenticatable>, auth: &dyn AuthProvider) -> bool {
        let current;
        let user = match user {
            Some(user) => Some(user),
            None => {
                current = auth.current_user();
                current.as_deref()
            }
        };

        self.authorization.iter().all(|entry| match entry {
            Authorization::Permission(permission) => {
                user.is_some_and(|user| auth.user_can(user, permission))
            }
            Authorization::Predicate(check) => check(user),
        })
    }

    /// Resolved link target, `None` for text-only items.
    pub fn url(&self, urls: &dyn UrlResolver) -> Option<String> {
        self.link.as_ref()?.url(urls)
    }

    pub(crate) fn set_active_url_pattern(&mut self, pattern: impl Into<String>) {
        self.active_url_pattern = Some(pattern.into());
    }

    pub(crate) fn set_to_active(&mut self, active_class: &str) {
        self.attributes.add_class(active_class);
        self.is_active = true;
    }

    /// Whether the current request points at this item.
    ///
    /// An exact match of the resolved link against the current URL wins;
    /// otherwise the activation pattern, if any, is matched against the
    /// current path.
    pub(crate) fn current_url_matches(&self, urls: &dyn UrlResolver) -> bool {
        if let Some(url) = self.url(urls) {
            if url == urls.current_url() {
                return true;
            }
        }

        match &self.active_url_pattern {
            Some(pattern) => pattern_matches(pattern, &urls.current_path()),
            None => false,
        }
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

/// Matches a `*` wildcard pattern against a request path.
///
/// Leading slashes are ignored on both sides; everything apart from `*` is
/// matched literally and the whole path must match.
pub fn pattern_matches(pattern: &str, path: &str) -> bool {
    let source = pattern
        .trim_start_matches('/')
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("(.*)?");

    match Regex::new(&format!("^{}$", source)) {
        Ok(regex) => regex.is_match(path.trim_start_matches('/')),
        Err(e) => {
            warn!(pattern, error = %e, "activation pattern could not be compiled");
            false
        }
    }
}

/// Construction options of an item.
///
/// `&str` and `String` convert into options holding just a URL:
///
/// ```
/// use navmenu::item::ItemOptions;
/// use navmenu::link::LinkPath;
///
/// let options: ItemOptions = "/about".into();
/// assert_eq!(options.path, Some(LinkPath::url("/about")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemOptions {
    pub path: Option<LinkPath>,
    pub parent: Option<String>,
    pub renderer: Option<String>,
    pub attributes: AttributeBag,
}

impl ItemOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(self, uri: impl Into<String>) -> Self {
        self.path(LinkPath::url(uri))
    }

    pub fn url_with<P: Into<String>>(self, uri: impl Into<String>, params: impl IntoIterator<Item = P>) -> Self {
        self.path(LinkPath::url_with(uri, params))
    }

    pub fn route(self, name: impl Into<String>) -> Self {
        self.path(LinkPath::route(name))
    }

    pub fn route_with<P: Into<String>>(self, name: impl Into<String>, params: impl IntoIterator<Item = P>) -> Self {
        self.path(LinkPath::route_with(name, params))
    }

    pub fn action(self, action: impl Into<String>) -> Self {
        self.path(LinkPath::action(action))
    }

    pub fn action_with<P: Into<String>>(self, action: impl Into<String>, params: impl IntoIterator<Item = P>) -> Self {
        self.path(LinkPath::action_with(action, params))
    }

    /// Sets the link target, replacing any previous one.
    pub fn path(mut self, path: LinkPath) -> Self {
        self.path = Some(path);
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = Some(renderer.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attributes.set_flag(name);
        self
    }

    /// Parses an option map such as
    /// `{"route": ["user.show", 7], "parent": "users", "class": "nav-item"}`.
    ///
    /// A bare string is a URL. Link targets are given as a string or as an
    /// array of the target followed by its parameters; when several are
    /// present `url` wins over `route`, which wins over `action`. Keys outside
    /// [`RESERVED_OPTIONS`] become tag attributes, `null` values become flags.
    pub fn from_value(options: Value) -> Result<Self> {
        let map = match options {
            Value::Null => return Ok(Self::default()),
            Value::String(uri) => return Ok(Self::default().url(uri)),
            Value::Object(map) => map,
            other => {
                return Err(MenuError::InvalidArgument(format!(
                    "item options must be a URL or a key/value object, got `{}`",
                    other
                )))
            }
        };

        let mut options = Self::default();
        let (mut url, mut route, mut action) = (None, None, None);

        for (key, value) in map {
            match key.as_str() {
                "url" => url = Some(target_and_params(&key, value)?),
                "route" => route = Some(target_and_params(&key, value)?),
                "action" => action = Some(target_and_params(&key, value)?),
                "parent" => options.parent = Some(expect_string(&key, value)?),
                "renderer" => options.renderer = Some(expect_string(&key, value)?),
                "prefix" => {}
                _ => {
                    let value = match value {
                        Value::Null => None,
                        other => Some(scalar_to_string(&key, other)?),
                    };
                    options.attributes.set_optional(key, value);
                }
            }
        }

        options.path = match (url, route, action) {
            (Some((uri, params)), _, _) => Some(LinkPath::Url { uri, params }),
            (None, Some((name, params)), _) => Some(LinkPath::Route { name, params }),
            (None, None, Some((action, params))) => Some(LinkPath::Action { action, params }),
            (None, None, None) => None,
        };

        Ok(options)
    }
}

impl From<&str> for ItemOptions {
    fn from(uri: &str) -> Self {
        Self::default().url(uri)
    }
}

impl From<String> for ItemOptions {
    fn from(uri: String) -> Self {
        Self::default().url(uri)
    }
}

impl From<&String> for ItemOptions {
    fn from(uri: &String) -> Self {
        Self::default().url(uri.as_str())
    }
}

impl From<LinkPath> for ItemOptions {
    fn from(path: LinkPath) -> Self {
        Self::default().path(path)
    }
}

fn target_and_params(key: &str, value: Value) -> Result<(String, Vec<String>)> {
    match value {
        Value::String(target) => Ok((target, Vec::new())),
        Value::Array(values) => {
            let mut values = values.into_iter();
            let target = match values.next() {
                Some(Value::String(target)) => target,
                _ => {
                    return Err(MenuError::InvalidArgument(format!(
                        "the first element of `{}` must be a string",
                        key
                    )))
                }
            };
            let params = values
                .map(|param| scalar_to_string(key, param))
                .collect::<Result<Vec<_>>>()?;
            Ok((target, params))
        }
        other => Err(MenuError::InvalidArgument(format!(
            "`{}` must be a string or an array, got `{}`",
            key, other
        ))),
    }
}

fn expect_string(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(MenuError::InvalidArgument(format!(
            "`{}` must be a string, got `{}`",
            key, other
        ))),
    }
}

fn scalar_to_string(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(MenuError::InvalidArgument(format!(
            "`{}` must be a scalar value, got `{}`",
            key, other
        ))),
    }
}
