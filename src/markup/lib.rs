//! # navmenu-markup - HTML Markup Helpers
//!
//! A small, menu-agnostic toolkit for producing HTML fragments: attribute
//! escaping, class-list merging, attribute serialization, and a template
//! environment for markup that is easier to express as a template than as
//! string concatenation.
//!
//! ## The Problem
//!
//! Rendering navigation markup mostly means gluing tags together, but:
//! - Attribute values must be escaped, attribute *flags* (`disabled`) must not
//!   carry a value at all
//! - CSS class lists get mutated repeatedly (an "active" class added twice must
//!   still appear once)
//! - Deeply nested structures (submenus) are awkward to print by hand
//!
//! ## The Solution
//!
//! - [`escape`], [`add_html_class`] and [`attrs_to_html`] cover the string level
//! - [`Templates`] wraps a [minijinja](https://docs.rs/minijinja) environment that
//!   auto-escapes HTML and ships an `attrs` filter which serializes an attribute
//!   list exactly like [`attrs_to_html`]
//!
//! ## Quick Example
//!
//! ```rust
//! use navmenu_markup::{add_html_class, attrs_to_html};
//!
//! let class = add_html_class(Some("nav-link active"), "active");
//! assert_eq!(class, "nav-link active");
//!
//! let html = attrs_to_html([("disabled", None), ("class", Some("btn"))]);
//! assert_eq!(html, r#" disabled class="btn""#);
//! ```
//!
//! ## Templates
//!
//! ```rust
//! use navmenu_markup::Templates;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Entry {
//!     title: String,
//!     attributes: Vec<(String, Option<String>)>,
//! }
//!
//! let mut templates = Templates::new();
//! templates
//!     .add_template("entry", "<li{{ attributes|attrs }}>{{ title }}</li>")
//!     .unwrap();
//!
//! let entry = Entry {
//!     title: "Fish & Chips".into(),
//!     attributes: vec![("class".into(), Some("active".into()))],
//! };
//! let html = templates.render("entry", &entry).unwrap();
//! assert_eq!(html, r#"<li class="active">Fish &amp; Chips</li>"#);
//! ```

use minijinja::value::ValueKind;
use minijinja::{AutoEscape, Environment, ErrorKind, Value};
use serde::Serialize;

pub use minijinja::Error;

/// Name under which [`render`] registers its one-off template.
const INLINE_TEMPLATE: &str = "_inline";

/// Escapes a string for use inside a double-quoted HTML attribute value.
///
/// Escapes `&`, `<`, `>`, `"` and `'`. Existing entities are escaped again.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Adds a class token to an existing space separated class list.
///
/// Tokens of both inputs are concatenated and de-duplicated, keeping the first
/// occurrence, then joined with single spaces:
///
/// ```rust
/// use navmenu_markup::add_html_class;
///
/// assert_eq!(add_html_class(Some("nav-link"), "active"), "nav-link active");
/// assert_eq!(add_html_class(Some("nav-link active"), "active"), "nav-link active");
/// assert_eq!(add_html_class(Some("active active"), "active"), "active");
/// assert_eq!(add_html_class(None, "active"), "active");
/// ```
pub fn add_html_class(existing: Option<&str>, class: &str) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in existing
        .unwrap_or_default()
        .split_whitespace()
        .chain(class.split_whitespace())
    {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

/// Serializes attributes to an HTML attribute string.
///
/// Valued entries become `key="escaped value"`, entries without a value are
/// emitted as bare flags. The result starts with a single space unless there
/// is nothing to emit, in which case it is empty.
pub fn attrs_to_html<I, K, V>(attributes: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut parts = Vec::new();
    for (key, value) in attributes {
        let key = key.as_ref();
        if key.is_empty() {
            continue;
        }
        match value {
            Some(value) => parts.push(format!("{}=\"{}\"", key, escape(value.as_ref()))),
            None => parts.push(key.to_string()),
        }
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}

/// Renders a one-off template with the given data.
///
/// The template is compiled for this call only. Use [`Templates`] when the
/// same template is rendered repeatedly.
pub fn render<T: Serialize>(template: &str, data: &T) -> Result<String, Error> {
    let mut env = environment();
    env.add_template_owned(INLINE_TEMPLATE.to_string(), template.to_string())?;
    let tmpl = env.get_template(INLINE_TEMPLATE)?;
    tmpl.render(data)
}

/// A set of named, pre-compiled markup templates.
///
/// Every template auto-escapes HTML; values that already are markup have to
/// be passed through the `safe` filter. The `attrs` filter turns an attribute
/// list (a sequence of `[key, value-or-none]` pairs, or a map) into an
/// attribute string.
pub struct Templates {
    env: Environment<'static>,
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}

impl Templates {
    pub fn new() -> Self {
        Self { env: environment() }
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; syntax errors are returned here.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Returns true if a template with the given name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_filter("attrs", attrs_filter);
    env
}

/// The `attrs` template filter.
fn attrs_filter(value: Value) -> Result<Value, Error> {
    if value.is_undefined() || value.is_none() {
        return Ok(Value::from_safe_string(String::new()));
    }

    let mut pairs: Vec<(String, Option<String>)> = Vec::new();
    match value.kind() {
        ValueKind::Map => {
            for key in value.try_iter()? {
                let entry = value.get_item(&key)?;
                pairs.push((value_to_string(&key), optional_string(&entry)));
            }
        }
        ValueKind::Seq => {
            for pair in value.try_iter()? {
                if pair.kind() == ValueKind::String {
                    // bare flag
                    pairs.push((value_to_string(&pair), None));
                    continue;
                }
                let key = pair.get_item_by_index(0)?;
                let entry = pair.get_item_by_index(1)?;
                pairs.push((value_to_string(&key), optional_string(&entry)));
            }
        }
        _ => {
            return Err(Error::new(
                ErrorKind::InvalidOperation,
                format!("attrs filter expects a map or a list of pairs, got {}", value.kind()),
            ))
        }
    }

    Ok(Value::from_safe_string(attrs_to_html(pairs)))
}

fn optional_string(value: &Value) -> Option<String> {
    if value.is_none() || value.is_undefined() {
        None
    } else {
        Some(value_to_string(value))
    }
}

fn value_to_string(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
