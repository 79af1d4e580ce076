use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("An item with name `{item}` already exists in the menu `{menu}`")]
    DuplicateItemName { item: String, menu: String },

    #[error("Item named `{item}` could not be found in the `{menu}` menu")]
    ItemNotFound { item: String, menu: String },

    #[error("Can not create menu named `{0}` because it already exists")]
    MenuAlreadyExists(String),

    #[error("Invalid menu configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No {kind} renderer registered under the name `{name}`")]
    RendererNotFound { kind: RendererKind, name: String },

    #[error("Template error: {0}")]
    Template(#[from] navmenu_markup::Error),
}

/// Which side of the renderer registry a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    Menu,
    Item,
}

impl std::fmt::Display for RendererKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RendererKind::Menu => write!(f, "menu"),
            RendererKind::Item => write!(f, "item"),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
