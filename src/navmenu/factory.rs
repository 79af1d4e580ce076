//! Menu construction from options.

use crate::config::{MenuConfiguration, MenuOptions, Share};
use crate::context::MenuContext;
use crate::error::{MenuError, Result};
use crate::menu::Menu;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

static VARIABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*$")
        .expect("variable name pattern is valid")
});

/// Whether `name` can be used as a view variable.
pub fn is_valid_variable_name(name: &str) -> bool {
    VARIABLE_NAME.is_match(name)
}

/// Builds a menu from validated options and shares it with views when asked
/// to.
///
/// An invalid `active_element` or share variable name fails with
/// [`MenuError::InvalidConfiguration`] before anything is shared.
pub fn create_menu(name: &str, options: &MenuOptions, context: MenuContext) -> Result<Menu> {
    let config = MenuConfiguration::new(options)?;

    let variable = match &options.share {
        Some(Share::Enabled(true)) => Some(name.to_string()),
        Some(Share::As(variable)) => {
            if !is_valid_variable_name(variable) {
                return Err(MenuError::InvalidConfiguration(format!(
                    "The value of the 'share' configuration '{}' is not a valid variable name.",
                    variable
                )));
            }
            Some(variable.clone())
        }
        Some(Share::Enabled(false)) | None => None,
    };

    let menu = Menu::new(name, config, context);
    debug!(menu = %name, "menu created");

    if let Some(variable) = variable {
        match &menu.context().views {
            Some(views) => {
                views.share(&variable, &menu);
                debug!(menu = %name, variable = %variable, "menu shared with views");
            }
            None => warn!(menu = %name, variable = %variable, "menu share requested without a view sink"),
        }
    }

    Ok(menu)
}

/// [`create_menu`] with options given as an option map.
pub fn create_menu_from_value(name: &str, options: Value, context: MenuContext) -> Result<Menu> {
    create_menu(name, &MenuOptions::from_value(options)?, context)
}
