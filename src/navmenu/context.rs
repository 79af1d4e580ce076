//! # Host Collaborators
//!
//! Menus never talk to a web framework directly. Everything they need from
//! the host is expressed by the traits in this module:
//!
//! - [`UrlResolver`]: turns paths, named routes and controller actions into
//!   URLs, and describes the current request
//! - [`AuthProvider`] / [`Authenticatable`]: the current user and permission checks
//! - [`ViewSink`]: receives menus that should be shared with views
//!
//! [`MenuContext`] bundles one implementation of each so that a
//! [`Repository`](crate::repository::Repository) can hand the same
//! collaborators to every menu it creates.
//!
//! ## Stock Implementations
//!
//! - [`StaticUrlResolver`]: base-URL resolver with route/action tables and a
//!   fixed current request. Suitable for tests, static site generation and
//!   hosts that build one context per request.
//! - [`StaticAuth`]: a fixed (optional) user.

use crate::menu::Menu;
use crate::render::RendererRegistry;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Resolves navigable URLs and exposes the current request.
pub trait UrlResolver {
    /// Builds an absolute URL from an application path.
    fn resolve_url(&self, uri: &str, params: &[String]) -> String;

    /// Builds the URL of a named route, `None` if the route is unknown.
    fn resolve_route(&self, name: &str, params: &[String]) -> Option<String>;

    /// Builds the URL of a controller action, `None` if the action is unknown.
    fn resolve_action(&self, action: &str, params: &[String]) -> Option<String>;

    /// Full URL of the current request, without the query string.
    fn current_url(&self) -> String;

    /// Path of the current request without a leading slash (`/` for the root).
    fn current_path(&self) -> String;
}

/// A user that permission checks can be run against.
pub trait Authenticatable: Any {
    fn identifier(&self) -> String;

    /// Whether the user holds the named permission.
    fn can(&self, permission: &str) -> bool;

    fn as_any(&self) -> &dyn Any;
}

impl<'a> dyn Authenticatable + 'a {
    /// Downcasts to the host's concrete user type.
    pub fn downcast_ref<T: Authenticatable>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl<'a> fmt::Debug for dyn Authenticatable + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Authenticatable")
            .field(&self.identifier())
            .finish()
    }
}

/// Supplies the current user and evaluates named permissions.
pub trait AuthProvider {
    fn current_user(&self) -> Option<Rc<dyn Authenticatable>>;

    fn user_can(&self, user: &dyn Authenticatable, permission: &str) -> bool {
        user.can(permission)
    }
}

/// Receives menus that should be made available to views.
pub trait ViewSink {
    fn share(&self, variable: &str, menu: &Menu);
}

/// The collaborators a menu works with.
#[derive(Clone)]
pub struct MenuContext {
    pub urls: Rc<dyn UrlResolver>,
    pub auth: Rc<dyn AuthProvider>,
    pub renderers: Rc<RendererRegistry>,
    pub views: Option<Rc<dyn ViewSink>>,
}

impl MenuContext {
    pub fn new(urls: impl UrlResolver + 'static) -> Self {
        Self {
            urls: Rc::new(urls),
            auth: Rc::new(StaticAuth::guest()),
            renderers: Rc::new(RendererRegistry::with_defaults()),
            views: None,
        }
    }

    pub fn with_auth(mut self, auth: impl AuthProvider + 'static) -> Self {
        self.auth = Rc::new(auth);
        self
    }

    pub fn with_renderers(mut self, renderers: RendererRegistry) -> Self {
        self.renderers = Rc::new(renderers);
        self
    }

    pub fn with_views(mut self, views: impl ViewSink + 'static) -> Self {
        self.views = Some(Rc::new(views));
        self
    }
}

impl Default for MenuContext {
    fn default() -> Self {
        Self::new(StaticUrlResolver::default())
    }
}

impl fmt::Debug for MenuContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuContext")
            .field("current_url", &self.urls.current_url())
            .field("renderers", &self.renderers)
            .field("views", &self.views.is_some())
            .finish()
    }
}

const DEFAULT_BASE_URL: &str = "http://localhost";

/// URIs that are returned as given instead of being joined to the base URL.
const PASSTHROUGH_SCHEMES: [&str; 3] = ["mailto:", "tel:", "sms:"];

/// A [`UrlResolver`] rooted at a fixed base URL.
///
/// Routes and actions are registered as path templates where `{name}`
/// placeholders are substituted by the parameters in order; surplus
/// parameters are appended as extra path segments.
#[derive(Debug, Clone)]
pub struct StaticUrlResolver {
    base_url: String,
    current_path: String,
    routes: HashMap<String, String>,
    actions: HashMap<String, String>,
}

impl Default for StaticUrlResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl StaticUrlResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            current_path: String::new(),
            routes: HashMap::new(),
            actions: HashMap::new(),
        }
    }

    /// Sets the path of the current request (`"/about"` or `"about"`).
    pub fn with_current_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = path.into().trim_matches('/').to_string();
        self
    }

    pub fn with_route(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.routes.insert(name.into(), path.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>, path: impl Into<String>) -> Self {
        self.actions.insert(action.into(), path.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn expand(template: &str, params: &[String]) -> String {
        let mut remaining = params.iter();
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            out.push_str(&rest[..start]);
            match remaining.next() {
                Some(param) => out.push_str(param),
                None => out.push_str(&rest[start..=start + len]),
            }
            rest = &rest[start + len + 1..];
        }
        out.push_str(rest);

        for param in remaining {
            out = format!("{}/{}", out.trim_end_matches('/'), param);
        }
        out
    }
}

impl UrlResolver for StaticUrlResolver {
    fn resolve_url(&self, uri: &str, params: &[String]) -> String {
        if uri.starts_with('#') || PASSTHROUGH_SCHEMES.iter().any(|s| uri.starts_with(s)) {
            return uri.to_string();
        }

        let mut path = uri.trim_end_matches('/').to_string();
        for param in params {
            path = format!("{}/{}", path, param);
        }
        self.join(&path)
    }

    fn resolve_route(&self, name: &str, params: &[String]) -> Option<String> {
        let template = self.routes.get(name)?;
        Some(self.join(&Self::expand(template, params)))
    }

    fn resolve_action(&self, action: &str, params: &[String]) -> Option<String> {
        let template = self.actions.get(action)?;
        Some(self.join(&Self::expand(template, params)))
    }

    fn current_url(&self) -> String {
        self.join(&self.current_path)
    }

    fn current_path(&self) -> String {
        if self.current_path.is_empty() {
            "/".to_string()
        } else {
            self.current_path.clone()
        }
    }
}

/// An [`AuthProvider`] with a fixed current user.
#[derive(Clone, Default)]
pub struct StaticAuth {
    user: Option<Rc<dyn Authenticatable>>,
}

impl StaticAuth {
    /// No user is logged in.
    pub fn guest() -> Self {
        Self { user: None }
    }

    pub fn user(user: impl Authenticatable) -> Self {
        Self {
            user: Some(Rc::new(user)),
        }
    }
}

impl AuthProvider for StaticAuth {
    fn current_user(&self) -> Option<Rc<dyn Authenticatable>> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> StaticUrlResolver {
        StaticUrlResolver::new("http://menu.test/")
            .with_route("user.show", "users/{user}")
            .with_route("post.comment", "posts/{post}/comments/{comment}")
            .with_action("ReportController@index", "reports")
    }

    #[test]
    fn test_resolve_url_joins_base() {
        let urls = resolver();
        assert_eq!(urls.resolve_url("/about", &[]), "http://menu.test/about");
        assert_eq!(urls.resolve_url("about", &[]), "http://menu.test/about");
        assert_eq!(urls.resolve_url("/", &[]), "http://menu.test");
        assert_eq!(urls.resolve_url("page?id=53", &[]), "http://menu.test/page?id=53");
    }

    #[test]
    fn test_fragments_and_mail_links_pass_through() {
        let urls = resolver();
        assert_eq!(urls.resolve_url("#", &[]), "#");
        assert_eq!(urls.resolve_url("#team", &[]), "#team");
        assert_eq!(urls.resolve_url("mailto:hi@menu.test", &[]), "mailto:hi@menu.test");
    }

    #[test]
    fn test_resolve_url_appends_params() {
        let urls = resolver();
        assert_eq!(
            urls.resolve_url("/users", &["7".into(), "edit".into()]),
            "http://menu.test/users/7/edit"
        );
    }

    #[test]
    fn test_resolve_route_substitutes_placeholders() {
        let urls = resolver();
        assert_eq!(
            urls.resolve_route("user.show", &["42".into()]),
            Some("http://menu.test/users/42".to_string())
        );
        assert_eq!(
            urls.resolve_route("post.comment", &["1".into(), "2".into()]),
            Some("http://menu.test/posts/1/comments/2".to_string())
        );
    }

    #[test]
    fn test_resolve_route_surplus_params_become_segments() {
        let urls = resolver();
        assert_eq!(
            urls.resolve_route("user.show", &["42".into(), "edit".into()]),
            Some("http://menu.test/users/42/edit".to_string())
        );
    }

    #[test]
    fn test_resolve_route_missing_params_keep_placeholder() {
        let urls = resolver();
        assert_eq!(
            urls.resolve_route("user.show", &[]),
            Some("http://menu.test/users/{user}".to_string())
        );
    }

    #[test]
    fn test_unknown_route_and_action() {
        let urls = resolver();
        assert_eq!(urls.resolve_route("nope", &[]), None);
        assert_eq!(urls.resolve_action("Nope@index", &[]), None);
        assert_eq!(
            urls.resolve_action("ReportController@index", &[]),
            Some("http://menu.test/reports".to_string())
        );
    }

    #[test]
    fn test_current_request() {
        let root = resolver();
        assert_eq!(root.current_url(), "http://menu.test");
        assert_eq!(root.current_path(), "/");

        let nested = resolver().with_current_path("/article/42");
        assert_eq!(nested.current_url(), "http://menu.test/article/42");
        assert_eq!(nested.current_path(), "article/42");
    }

    struct Editor;

    impl Authenticatable for Editor {
        fn identifier(&self) -> String {
            "editor".into()
        }

        fn can(&self, permission: &str) -> bool {
            permission == "edit posts"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_static_auth() {
        assert!(StaticAuth::guest().current_user().is_none());

        let auth = StaticAuth::user(Editor);
        let user = auth.current_user().unwrap();
        assert!(auth.user_can(&*user, "edit posts"));
        assert!(!auth.user_can(&*user, "delete posts"));
        assert!(user.downcast_ref::<Editor>().is_some());
    }
}
