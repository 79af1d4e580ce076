//! # Menu Configuration
//!
//! Menus are configured from an option map, either built in Rust through
//! [`MenuOptions`] or parsed from a JSON object with [`MenuOptions::from_value`].
//! The options are validated once into an immutable [`MenuConfiguration`].
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `auto_activate` | `true` | Activate items whose URL matches the current request |
//! | `activate_parents` | `true` | Activating an item activates its ancestors too |
//! | `active_class` | `"active"` | CSS class added to active elements |
//! | `active_element` | `"item"` | `"item"` (e.g. the `<li>`) or `"link"` (the `<a>`) |
//! | `cascade_data` | `false` | Metadata written to an item is copied to its children |
//! | `share` | none | `true` to share the menu with views under its name, or a variable name |

use crate::error::{MenuError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

const DEFAULT_ACTIVE_CLASS: &str = "active";
const DEFAULT_ACTIVE_ELEMENT: &str = "item";

/// Which element receives the active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveElement {
    Item,
    Link,
}

impl ActiveElement {
    pub const ALL: [ActiveElement; 2] = [ActiveElement::Item, ActiveElement::Link];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveElement::Item => "item",
            ActiveElement::Link => "link",
        }
    }
}

impl std::fmt::Display for ActiveElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveElement {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "item" => Ok(ActiveElement::Item),
            "link" => Ok(ActiveElement::Link),
            other => Err(MenuError::InvalidConfiguration(format!(
                "`{}` is not a valid value for the `active_element` setting. Must be one of: `{}`",
                other,
                ActiveElement::ALL.map(|e| e.as_str()).join(",")
            ))),
        }
    }
}

/// How a newly created menu is shared with views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Share {
    /// `true` shares the menu under its own name, `false` does not share it.
    Enabled(bool),
    /// Shares the menu under the given variable name.
    As(String),
}

/// Raw, unvalidated menu options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuOptions {
    pub auto_activate: bool,
    pub activate_parents: bool,
    pub active_class: String,
    pub active_element: String,
    pub cascade_data: bool,
    pub share: Option<Share>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            auto_activate: true,
            activate_parents: true,
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            active_element: DEFAULT_ACTIVE_ELEMENT.to_string(),
            cascade_data: false,
            share: None,
        }
    }
}

impl MenuOptions {
    /// Parses an option map such as `{"active_element": "link"}`.
    ///
    /// Unknown keys are ignored; a value of the wrong type is an
    /// [`MenuError::InvalidConfiguration`].
    pub fn from_value(options: Value) -> Result<Self> {
        if options.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(options).map_err(|e| MenuError::InvalidConfiguration(e.to_string()))
    }

    pub fn auto_activate(mut self, enabled: bool) -> Self {
        self.auto_activate = enabled;
        self
    }

    pub fn activate_parents(mut self, enabled: bool) -> Self {
        self.activate_parents = enabled;
        self
    }

    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn active_element(mut self, element: impl Into<String>) -> Self {
        self.active_element = element.into();
        self
    }

    pub fn cascade_data(mut self, enabled: bool) -> Self {
        self.cascade_data = enabled;
        self
    }

    pub fn share(mut self, share: Share) -> Self {
        self.share = Some(share);
        self
    }
}

/// Validated settings controlling activation and metadata behavior.
///
/// Built once per menu and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfiguration {
    auto_activate: bool,
    activate_parents: bool,
    active_class: String,
    active_element: ActiveElement,
    cascade_data: bool,
}

impl Default for MenuConfiguration {
    fn default() -> Self {
        Self {
            auto_activate: true,
            activate_parents: true,
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            active_element: ActiveElement::Item,
            cascade_data: false,
        }
    }
}

impl MenuConfiguration {
    pub fn new(options: &MenuOptions) -> Result<Self> {
        Ok(Self {
            auto_activate: options.auto_activate,
            activate_parents: options.activate_parents,
            active_class: options.active_class.clone(),
            active_element: options.active_element.parse()?,
            cascade_data: options.cascade_data,
        })
    }

    pub fn from_value(options: Value) -> Result<Self> {
        Self::new(&MenuOptions::from_value(options)?)
    }

    pub fn auto_activate(&self) -> bool {
        self.auto_activate
    }

    pub fn activate_parents(&self) -> bool {
        self.activate_parents
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    pub fn active_element(&self) -> ActiveElement {
        self.active_element
    }

    pub fn cascade_data(&self) -> bool {
        self.cascade_data
    }
}
