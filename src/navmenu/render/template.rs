//! Template-driven menu rendering.
//!
//! [`TemplateMenuRenderer`] hands the whole item tree to a minijinja template,
//! which makes nested menus possible without writing a renderer in Rust.
//! Only items the current user is allowed to see are part of the tree.
//!
//! The template context looks like this:
//!
//! | Key | Content |
//! |-----|---------|
//! | `name` | menu name |
//! | `attributes` | container attributes, for the `attrs` filter |
//! | `items` | root items |
//!
//! and every item carries `name`, `title` (raw markup, use `safe`), `url`,
//! `href` (the escaped URL, use `safe`), `attributes`, `link_attributes`,
//! `is_active`, `data` and `children`.

use super::MenuRenderer;
use crate::attributes::AttributeBag;
use crate::error::Result;
use crate::menu::{ItemRef, Menu};
use crate::metadata::MetadataStore;
use navmenu_markup::{escape, Templates};
use serde::Serialize;

const MENU_TEMPLATE: &str = "menu";

/// Nested `<ul>` lists of every allowed item.
pub const NESTED_LIST_TEMPLATE: &str = r#"<ul{{ attributes|attrs }}>
{%- for item in items recursive %}
<li{{ item.attributes|attrs }}>
{%- if item.href %}<a href="{{ item.href|safe }}"{{ item.link_attributes|attrs }}>{{ item.title|safe }}</a>
{%- else %}{{ item.title|safe }}{% endif %}
{%- if item.children %}<ul>{{ loop(item.children) }}
</ul>{% endif %}</li>
{%- endfor %}
</ul>
"#;

pub struct TemplateMenuRenderer {
    templates: Templates,
}

impl TemplateMenuRenderer {
    /// Compiles `source` as the menu template.
    pub fn new(source: &str) -> Result<Self> {
        let mut templates = Templates::new();
        templates.add_template(MENU_TEMPLATE, source)?;
        Ok(Self { templates })
    }

    /// A renderer using [`NESTED_LIST_TEMPLATE`].
    pub fn nested_list() -> Result<Self> {
        Self::new(NESTED_LIST_TEMPLATE)
    }
}

impl MenuRenderer for TemplateMenuRenderer {
    fn render(&self, menu: &Menu) -> Result<String> {
        let view = MenuView {
            name: menu.name(),
            attributes: &menu.attributes,
            items: menu
                .root_items()
                .filter(|item| item.is_allowed(None))
                .map(ItemView::new)
                .collect(),
        };
        Ok(self.templates.render(MENU_TEMPLATE, &view)?)
    }
}

#[derive(Serialize)]
struct MenuView<'a> {
    name: &'a str,
    attributes: &'a AttributeBag,
    items: Vec<ItemView<'a>>,
}

#[derive(Serialize)]
struct ItemView<'a> {
    name: &'a str,
    title: &'a str,
    url: Option<String>,
    href: Option<String>,
    attributes: &'a AttributeBag,
    link_attributes: Option<&'a AttributeBag>,
    is_active: bool,
    data: &'a MetadataStore,
    children: Vec<ItemView<'a>>,
}

impl<'a> ItemView<'a> {
    fn new(item: ItemRef<'a>) -> Self {
        let url = item.url();
        let inner = item.item();
        Self {
            name: inner.name(),
            title: &inner.title,
            href: url.as_deref().map(escape),
            url,
            attributes: &inner.attributes,
            link_attributes: inner.link.as_ref().map(|link| &link.attributes),
            is_active: inner.is_item_or_link_active(),
            data: &inner.data,
            children: item
                .child_items()
                .filter(|child| child.is_allowed(None))
                .map(ItemView::new)
                .collect(),
        }
    }
}
