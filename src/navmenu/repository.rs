//! # Menu Repository
//!
//! The [`Repository`] is the registry of named menus of an application. It is
//! an ordinary value: create it once at startup with the collaborators menus
//! should use and pass it to wherever menus are built or looked up.
//!
//! Menu names are unique. The repository has no locking; share it behind
//! whatever synchronization the host already uses, or build one per request.

use crate::config::MenuOptions;
use crate::context::MenuContext;
use crate::error::{MenuError, Result};
use crate::factory::create_menu;
use crate::menu::Menu;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Default)]
pub struct Repository {
    context: MenuContext,
    menus: Vec<Menu>,
}

impl Repository {
    pub fn new(context: MenuContext) -> Self {
        Self {
            context,
            menus: Vec::new(),
        }
    }

    pub fn context(&self) -> &MenuContext {
        &self.context
    }

    /// Creates and registers a menu.
    ///
    /// Fails with [`MenuError::MenuAlreadyExists`] if the name is taken.
    pub fn create(&mut self, name: &str, options: &MenuOptions) -> Result<&mut Menu> {
        if self.has(name) {
            return Err(MenuError::MenuAlreadyExists(name.to_string()));
        }

        let menu = create_menu(name, options, self.context.clone())?;
        self.menus.push(menu);
        debug!(menu = %name, count = self.menus.len(), "menu registered");

        let last = self.menus.len() - 1;
        Ok(&mut self.menus[last])
    }

    /// [`create`](Self::create) with options given as an option map.
    pub fn create_from_value(&mut self, name: &str, options: Value) -> Result<&mut Menu> {
        self.create(name, &MenuOptions::from_value(options)?)
    }

    pub fn get(&self, name: &str) -> Option<&Menu> {
        self.menus.iter().find(|menu| menu.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Menu> {
        self.menus.iter_mut().find(|menu| menu.name() == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every registered menu, in creation order.
    pub fn all(&self) -> &[Menu] {
        &self.menus
    }

    /// Unregisters a menu and hands it back.
    pub fn remove(&mut self, name: &str) -> Option<Menu> {
        let pos = self.menus.iter().position(|menu| menu.name() == name)?;
        debug!(menu = %name, "menu unregistered");
        Some(self.menus.remove(pos))
    }
}
