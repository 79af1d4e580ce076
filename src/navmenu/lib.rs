//! # Navmenu Architecture
//!
//! Navmenu is a **framework-agnostic navigation menu library**. Applications
//! declare named trees of menu items (titles, links, attributes, metadata,
//! authorization rules) and render them to markup, with the items matching
//! the current request marked active automatically.
//!
//! The library never talks to a web framework directly. URL generation, the
//! current request, the current user and view sharing are all reached through
//! the collaborator traits in [`context`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (repository.rs, factory.rs)                       │
//! │  - Named menus, one per name                                │
//! │  - Builds menus from option maps, shares them with views    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Menu (menu.rs)                                             │
//! │  - Owns items, configuration, container attributes          │
//! │  - Parent resolution, activation, data cascade, removal     │
//! │  - ItemRef / ItemMut cursors for tree-aware access          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (item.rs, link.rs, collection.rs, attributes.rs,     │
//! │         metadata.rs)                                        │
//! │  - Plain data with no knowledge of the surrounding tree     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Rendering (render/)                                        │
//! │  - Name-keyed renderer registry                             │
//! │  - Flat list/div renderers, template renderer for nesting   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//!
//! A menu's [`ItemCollection`] is the only owner of its items. An item stores
//! its parent's *name*; children are found by scanning the collection, in
//! insertion order. Because items can only be added through
//! [`Menu::add_item`], a parent always exists when its child is created.
//!
//! ## Active State
//!
//! When `auto_activate` is on, every new item is compared against the current
//! request: first its resolved URL against the full current URL, then its
//! optional activation pattern (`"/articles/*"`) against the current path.
//! Activation marks either the item or its link (`active_element`) and
//! climbs to the ancestors when `activate_parents` is on.
//!
//! ## Example
//!
//! ```
//! use navmenu::{MenuContext, MenuOptions, Repository, StaticUrlResolver};
//!
//! let urls = StaticUrlResolver::new("http://menu.test").with_current_path("/about");
//! let mut menus = Repository::new(MenuContext::new(urls));
//!
//! let menu = menus.create("main", &MenuOptions::default()).unwrap();
//! menu.add_item("home", "Home", "/").unwrap();
//! menu.add_item("about", "About", "/about").unwrap();
//!
//! let html = menu.render(None).unwrap();
//! assert!(html.contains(r#"<li class="active"><a href="http://menu.test/about">About</a></li>"#));
//! ```
//!
//! ## Module Overview
//!
//! - [`menu`]: Menus and the item cursors
//! - [`item`]: Items, item options and authorization
//! - [`link`]: Link targets and URL resolution
//! - [`collection`]: Item storage and filtered views
//! - [`attributes`]: HTML tag attributes
//! - [`metadata`]: Free-form item metadata
//! - [`config`]: Menu options and validated configuration
//! - [`context`]: Host collaborators and their stock implementations
//! - [`factory`]: Menu construction and view sharing
//! - [`repository`]: The named-menu registry
//! - [`render`]: Renderer contracts, registry and built-in renderers
//! - [`error`]: Error types

pub mod attributes;
pub mod collection;
pub mod config;
pub mod context;
pub mod error;
pub mod factory;
pub mod item;
pub mod link;
pub mod menu;
pub mod metadata;
pub mod render;
pub mod repository;

pub use attributes::AttributeBag;
pub use collection::{ItemCollection, Items, ItemsMut};
pub use config::{ActiveElement, MenuConfiguration, MenuOptions, Share};
pub use context::{
    AuthProvider, Authenticatable, MenuContext, StaticAuth, StaticUrlResolver, UrlResolver, ViewSink,
};
pub use error::{MenuError, RendererKind, Result};
pub use factory::create_menu;
pub use item::{Authorization, Item, ItemOptions};
pub use link::{Link, LinkPath};
pub use menu::{ItemMut, ItemRef, Menu};
pub use metadata::MetadataStore;
pub use render::{ItemRenderer, MenuRenderer, RendererRegistry};
pub use repository::Repository;
