//! # Rendering
//!
//! Menus and items are turned into markup by renderers looked up by name in a
//! [`RendererRegistry`]. There are two kinds:
//!
//! - [`MenuRenderer`]: renders a whole menu (`ul`, `ol`, `div`, ...)
//! - [`ItemRenderer`]: renders a single item (`li`, `div`, ...)
//!
//! Menu renderers usually delegate each item to an item renderer, picked by the
//! item's own renderer hint or the menu renderer's default. See
//! [`list`] for the built-in flat renderers and [`template`] for a
//! template-driven renderer that can produce nested markup.
//!
//! Plain closures can be registered too:
//!
//! ```
//! use navmenu::render::RendererRegistry;
//! use navmenu::{Menu, Result};
//!
//! let mut registry = RendererRegistry::with_defaults();
//! registry.register_menu("count", |menu: &Menu| -> Result<String> {
//!     Ok(format!("{} items", menu.items().count()))
//! });
//! assert!(registry.has_menu_renderer("count"));
//! ```

pub mod list;
pub mod template;

use crate::error::{MenuError, RendererKind, Result};
use crate::menu::{ItemRef, Menu};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

pub use list::{DivMenuRenderer, ListMenuRenderer, TagItemRenderer};
pub use template::{TemplateMenuRenderer, NESTED_LIST_TEMPLATE};

pub trait MenuRenderer {
    fn render(&self, menu: &Menu) -> Result<String>;
}

pub trait ItemRenderer {
    fn render(&self, item: ItemRef<'_>) -> Result<String>;
}

impl<F> MenuRenderer for F
where
    F: Fn(&Menu) -> Result<String>,
{
    fn render(&self, menu: &Menu) -> Result<String> {
        self(menu)
    }
}

impl<F> ItemRenderer for F
where
    F: Fn(ItemRef<'_>) -> Result<String>,
{
    fn render(&self, item: ItemRef<'_>) -> Result<String> {
        self(item)
    }
}

/// Name-keyed menu and item renderers.
#[derive(Default)]
pub struct RendererRegistry {
    menus: HashMap<String, Box<dyn MenuRenderer>>,
    items: HashMap<String, Box<dyn ItemRenderer>>,
}

impl RendererRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in renderers: menu renderers `ul`, `ol` and
    /// `div`, item renderers `li` and `div`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register_menu("ul", ListMenuRenderer::unordered())
            .register_menu("ol", ListMenuRenderer::ordered())
            .register_menu("div", DivMenuRenderer)
            .register_item("li", TagItemRenderer::li())
            .register_item("div", TagItemRenderer::div());
        registry
    }

    /// Registers a menu renderer, replacing any renderer of the same name.
    pub fn register_menu(&mut self, name: impl Into<String>, renderer: impl MenuRenderer + 'static) -> &mut Self {
        self.menus.insert(name.into(), Box::new(renderer));
        self
    }

    /// Registers an item renderer, replacing any renderer of the same name.
    pub fn register_item(&mut self, name: impl Into<String>, renderer: impl ItemRenderer + 'static) -> &mut Self {
        self.items.insert(name.into(), Box::new(renderer));
        self
    }

    pub fn has_menu_renderer(&self, name: &str) -> bool {
        self.menus.contains_key(name)
    }

    pub fn has_item_renderer(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn menu_renderer(&self, name: &str) -> Result<&dyn MenuRenderer> {
        debug!(kind = %RendererKind::Menu, renderer = %name, "renderer lookup");
        self.menus
            .get(name)
            .map(|renderer| &**renderer)
            .ok_or_else(|| MenuError::RendererNotFound {
                kind: RendererKind::Menu,
                name: name.to_string(),
            })
    }

    pub fn item_renderer(&self, name: &str) -> Result<&dyn ItemRenderer> {
        debug!(kind = %RendererKind::Item, renderer = %name, "renderer lookup");
        self.items
            .get(name)
            .map(|renderer| &**renderer)
            .ok_or_else(|| MenuError::RendererNotFound {
                kind: RendererKind::Item,
                name: name.to_string(),
            })
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut menus: Vec<&String> = self.menus.keys().collect();
        let mut items: Vec<&String> = self.items.keys().collect();
        menus.sort();
        items.sort();
        f.debug_struct("RendererRegistry")
            .field("menus", &menus)
            .field("items", &items)
            .finish()
    }
}
