#![allow(dead_code)]

use navmenu::{
    AuthProvider, Authenticatable, Menu, MenuContext, MenuOptions, Repository, StaticUrlResolver,
};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const APP_URL: &str = "http://menu.test";

#[derive(Debug, Clone)]
pub struct TestUser {
    pub email: String,
}

impl TestUser {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
        }
    }
}

impl Authenticatable for TestUser {
    fn identifier(&self) -> String {
        self.email.clone()
    }

    fn can(&self, _permission: &str) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

type Ability = Box<dyn Fn(&TestUser) -> bool>;

/// Auth provider with a switchable current user and named abilities.
#[derive(Clone, Default)]
pub struct Gate {
    user: Rc<RefCell<Option<Rc<dyn Authenticatable>>>>,
    abilities: Rc<RefCell<HashMap<String, Ability>>>,
}

impl Gate {
    pub fn define(&self, ability: &str, check: impl Fn(&TestUser) -> bool + 'static) {
        self.abilities
            .borrow_mut()
            .insert(ability.to_string(), Box::new(check));
    }

    pub fn be(&self, user: &TestUser) {
        *self.user.borrow_mut() = Some(Rc::new(user.clone()));
    }
}

impl AuthProvider for Gate {
    fn current_user(&self) -> Option<Rc<dyn Authenticatable>> {
        self.user.borrow().clone()
    }

    fn user_can(&self, user: &dyn Authenticatable, permission: &str) -> bool {
        let Some(user) = user.as_any().downcast_ref::<TestUser>() else {
            return false;
        };
        self.abilities
            .borrow()
            .get(permission)
            .map_or(false, |check| check(user))
    }
}

pub fn urls_at(path: &str) -> StaticUrlResolver {
    StaticUrlResolver::new(APP_URL)
        .with_current_path(path)
        .with_route("user.show", "users/{user}")
        .with_route("dashboard", "admin/dashboard")
        .with_action("ReportController@index", "reports")
        .with_action("ReportController@show", "reports/{report}")
}

pub fn context_at(path: &str) -> MenuContext {
    MenuContext::new(urls_at(path))
}

pub fn menu_at(path: &str, options: MenuOptions) -> Menu {
    navmenu::create_menu("menu", &options, context_at(path)).unwrap()
}

pub fn repository_at(path: &str) -> Repository {
    Repository::new(context_at(path))
}

/// `http://menu.test/<path>` the way the resolver builds it.
pub fn app_url(path: &str) -> String {
    let path = path.trim_matches('/');
    if path.is_empty() {
        APP_URL.to_string()
    } else {
        format!("{}/{}", APP_URL, path)
    }
}
