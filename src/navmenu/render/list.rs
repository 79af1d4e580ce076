//! Built-in flat renderers.
//!
//! The menu renderers wrap the root items of a menu in a container tag
//! carrying the menu attributes, one item per line:
//!
//! ```text
//! <ul class="nav">
//! 	<li class="active"><a href="http://menu.test">Home</a></li>
//! 	<li><a href="http://menu.test/about">About</a></li>
//! </ul>
//! ```
//!
//! Child items are not rendered; nested markup is the job of custom or
//! template renderers.

use super::{ItemRenderer, MenuRenderer};
use crate::error::Result;
use crate::menu::{ItemRef, Menu};
use navmenu_markup::escape;

/// `<ul>` or `<ol>` menus with `li` items by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMenuRenderer {
    tag: &'static str,
}

impl ListMenuRenderer {
    pub fn unordered() -> Self {
        Self { tag: "ul" }
    }

    pub fn ordered() -> Self {
        Self { tag: "ol" }
    }
}

impl MenuRenderer for ListMenuRenderer {
    fn render(&self, menu: &Menu) -> Result<String> {
        render_container(menu, self.tag, "li")
    }
}

/// `<div>` menus with `div` items by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivMenuRenderer;

impl MenuRenderer for DivMenuRenderer {
    fn render(&self, menu: &Menu) -> Result<String> {
        render_container(menu, "div", "div")
    }
}

fn render_container(menu: &Menu, tag: &str, default_item: &str) -> Result<String> {
    let mut out = format!("<{}{}>\n", tag, menu.attributes.to_html());
    for item in menu.root_items() {
        let renderer = item.renderer().unwrap_or(default_item);
        out.push('\t');
        out.push_str(&item.render(Some(renderer))?);
        out.push('\n');
    }
    out.push_str(&format!("</{}>\n", tag));
    Ok(out)
}

/// Renders an item as a single tag around its anchor (or bare title).
///
/// The href is escaped, the title is written as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagItemRenderer {
    tag: &'static str,
}

impl TagItemRenderer {
    pub fn li() -> Self {
        Self { tag: "li" }
    }

    pub fn div() -> Self {
        Self { tag: "div" }
    }
}

impl ItemRenderer for TagItemRenderer {
    fn render(&self, item: ItemRef<'_>) -> Result<String> {
        let content = match &item.link {
            Some(link) => format!(
                "<a href=\"{}\"{}>{}</a>",
                escape(&item.url().unwrap_or_default()),
                link.attributes.to_html(),
                item.title
            ),
            None => item.title.clone(),
        };

        Ok(format!(
            "<{tag}{}>{}</{tag}>",
            item.attributes.to_html(),
            content,
            tag = self.tag
        ))
    }
}
