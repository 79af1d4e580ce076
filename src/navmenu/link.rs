//! The navigable part of a menu item.

use crate::attributes::AttributeBag;
use crate::context::UrlResolver;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

/// Where a link points to, before URL resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPath {
    /// An application path or an absolute URL.
    Url { uri: String, params: Vec<String> },
    /// A named route of the host application.
    Route { name: String, params: Vec<String> },
    /// A controller action of the host application.
    Action { action: String, params: Vec<String> },
}

impl LinkPath {
    pub fn url(uri: impl Into<String>) -> Self {
        Self::url_with(uri, Vec::<String>::new())
    }

    pub fn url_with<P: Into<String>>(uri: impl Into<String>, params: impl IntoIterator<Item = P>) -> Self {
        LinkPath::Url {
            uri: uri.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn route(name: impl Into<String>) -> Self {
        Self::route_with(name, Vec::<String>::new())
    }

    pub fn route_with<P: Into<String>>(name: impl Into<String>, params: impl IntoIterator<Item = P>) -> Self {
        LinkPath::Route {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    pub fn action(action: impl Into<String>) -> Self {
        Self::action_with(action, Vec::<String>::new())
    }

    pub fn action_with<P: Into<String>>(action: impl Into<String>, params: impl IntoIterator<Item = P>) -> Self {
        LinkPath::Action {
            action: action.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    path: Option<LinkPath>,
    href: Option<String>,
    active_class: String,
    is_active: bool,
    pub attributes: AttributeBag,
}

impl Link {
    pub fn new(path: Option<LinkPath>, active_class: impl Into<String>) -> Self {
        Self {
            path,
            href: None,
            active_class: active_class.into(),
            is_active: false,
            attributes: AttributeBag::new(),
        }
    }

    pub fn path(&self) -> Option<&LinkPath> {
        self.path.as_ref()
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Pins the link to an explicit href, bypassing path resolution.
    pub fn set_href(&mut self, href: impl Into<String>) -> &mut Self {
        self.href = Some(href.into());
        self
    }

    /// Marks the link active and adds the active class to its attributes.
    ///
    /// Activating twice leaves a single class token.
    pub fn activate(&mut self) -> &mut Self {
        self.is_active = true;
        self.attributes.add_class(&self.active_class);
        self
    }

    /// Resolves the link target.
    ///
    /// An explicit href wins, then the path: absolute URLs are returned as
    /// they are, everything else goes through the resolver. `None` when there
    /// is nothing to resolve or the route/action is unknown to the host.
    pub fn url(&self, urls: &dyn UrlResolver) -> Option<String> {
        if let Some(href) = &self.href {
            return Some(href.clone());
        }

        match self.path.as_ref()? {
            LinkPath::Url { uri, params } => {
                if is_absolute_url(uri) {
                    Some(uri.clone())
                } else {
                    Some(urls.resolve_url(uri, params))
                }
            }
            LinkPath::Route { name, params } => {
                let resolved = urls.resolve_route(name, params);
                if resolved.is_none() {
                    warn!(route = %name, "route could not be resolved");
                }
                resolved
            }
            LinkPath::Action { action, params } => {
                let resolved = urls.resolve_action(action, params);
                if resolved.is_none() {
                    warn!(action = %action, "controller action could not be resolved");
                }
                resolved
            }
        }
    }
}

/// True when the URL carries a host component (`https://x.com`, `//cdn.x.com`).
pub fn is_absolute_url(uri: &str) -> bool {
    let parsed = if uri.starts_with("//") {
        Url::parse(&format!("http:{}", uri))
    } else {
        Url::parse(uri)
    };

    parsed
        .ok()
        .and_then(|url| url.host_str().map(|host| !host.is_empty()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StaticUrlResolver;

    fn urls() -> StaticUrlResolver {
        StaticUrlResolver::new("http://menu.test")
            .with_route("user.show", "users/{user}")
            .with_action("HomeController@index", "home")
    }

    #[test]
    fn absolute_urls_are_detected() {
        assert!(is_absolute_url("https://zeit.co"));
        assert!(is_absolute_url("http://ft.com"));
        assert!(is_absolute_url("//techsylvania.co"));
        assert!(is_absolute_url("https://vuejs.org/v2/guide/#Getting-Started"));

        assert!(!is_absolute_url("/about"));
        assert!(!is_absolute_url("page?id=53"));
        assert!(!is_absolute_url("mailto:someone@example.com"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn absolute_url_bypasses_resolver() {
        let link = Link::new(Some(LinkPath::url("https://zeit.co")), "active");
        assert_eq!(link.url(&urls()), Some("https://zeit.co".to_string()));

        let link = Link::new(Some(LinkPath::url("//techsylvania.co")), "active");
        assert_eq!(link.url(&urls()), Some("//techsylvania.co".to_string()));
    }

    #[test]
    fn relative_url_goes_through_resolver() {
        let link = Link::new(Some(LinkPath::url("/about")), "active");
        assert_eq!(link.url(&urls()), Some("http://menu.test/about".to_string()));

        let link = Link::new(Some(LinkPath::url("page?id=53")), "active");
        assert_eq!(link.url(&urls()), Some("http://menu.test/page?id=53".to_string()));
    }

    #[test]
    fn url_params_are_passed_to_resolver() {
        let link = Link::new(Some(LinkPath::url_with("/users", ["7"])), "active");
        assert_eq!(link.url(&urls()), Some("http://menu.test/users/7".to_string()));
    }

    #[test]
    fn route_and_action_resolution() {
        let link = Link::new(Some(LinkPath::route_with("user.show", ["3"])), "active");
        assert_eq!(link.url(&urls()), Some("http://menu.test/users/3".to_string()));

        let link = Link::new(Some(LinkPath::action("HomeController@index")), "active");
        assert_eq!(link.url(&urls()), Some("http://menu.test/home".to_string()));

        let link = Link::new(Some(LinkPath::route("missing")), "active");
        assert_eq!(link.url(&urls()), None);
    }

    #[test]
    fn href_takes_precedence() {
        let mut link = Link::new(Some(LinkPath::url("/about")), "active");
        link.set_href("#top");
        assert_eq!(link.url(&urls()), Some("#top".to_string()));
        assert_eq!(link.href(), Some("#top"));
    }

    #[test]
    fn empty_path_resolves_to_none() {
        let link = Link::new(None, "active");
        assert_eq!(link.url(&urls()), None);
    }

    #[test]
    fn activation_is_idempotent() {
        let mut link = Link::new(Some(LinkPath::url("/")), "is-active");
        link.attributes.set("class", "nav-link");

        link.activate();
        link.activate();

        assert!(link.is_active());
        assert_eq!(link.attributes.get("class"), Some("nav-link is-active"));
    }
}
