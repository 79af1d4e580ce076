mod common;

use common::{menu_at, APP_URL};
use navmenu::{ItemOptions, MenuOptions};
use serde_json::json;

fn site(path: &str, options: MenuOptions) -> navmenu::Menu {
    let mut menu = menu_at(path, options);
    menu.add_item("home", "Home", "/").unwrap();
    menu.add_item("about", "About", "/about").unwrap();
    menu.add_item("contact", "Contact", "/contact").unwrap();
    menu
}

#[test]
fn test_only_the_current_url_is_active() {
    let menu = site("/", MenuOptions::default());

    assert_eq!(menu.items().actives().names(), vec!["home"]);
    assert!(menu.get_item("home").unwrap().is_active());
    assert!(!menu.get_item("about").unwrap().is_active());
    assert!(!menu.get_item("contact").unwrap().is_active());
}

#[test]
fn test_active_class_is_configurable() {
    let menu = site("/contact", MenuOptions::default().active_class("is-current"));
    let contact = menu.get_item("contact").unwrap();

    assert_eq!(contact.attributes.get("class"), Some("is-current"));
}

#[test]
fn test_active_class_merges_with_existing_classes() {
    let mut menu = menu_at("/about", MenuOptions::default());
    menu.add_item("about", "About", ItemOptions::from("/about").attr("class", "nav-item"))
        .unwrap()
        .activate();

    assert_eq!(
        menu.get_item("about").unwrap().attributes.get("class"),
        Some("nav-item active")
    );
}

#[test]
fn test_pattern_activates_on_matching_path() {
    let mut menu = menu_at("/article/42", MenuOptions::default());
    menu.add_item("articles", "Articles", "/articles")
        .unwrap()
        .activate_on_urls("/article/*");

    assert!(menu.get_item("articles").unwrap().is_active());
}

#[test]
fn test_exact_url_wins_even_when_pattern_does_not_match() {
    let mut menu = menu_at("/articles", MenuOptions::default());
    menu.add_item("articles", "Articles", "/articles")
        .unwrap()
        .activate_on_urls("/article/*");

    assert!(menu.get_item("articles").unwrap().is_active());
}

#[test]
fn test_pattern_does_not_activate_other_paths() {
    let mut menu = menu_at("/blog/42", MenuOptions::default());
    menu.add_item("articles", "Articles", "/articles")
        .unwrap()
        .activate_on_urls("/article/*");

    assert!(!menu.get_item("articles").unwrap().is_item_or_link_active());
}

#[test]
fn test_patterns_respect_auto_activate() {
    let mut menu = menu_at("/article/42", MenuOptions::default().auto_activate(false));
    menu.add_item("articles", "Articles", "/articles")
        .unwrap()
        .activate_on_urls("/article/*");

    assert!(!menu.get_item("articles").unwrap().is_active());
}

#[test]
fn test_parents_are_activated() {
    let mut menu = menu_at("/shop/shoes/boots", MenuOptions::default());
    menu.add_item("shop", "Shop", "/shop")
        .unwrap()
        .add_sub_item("shoes", "Shoes", "/shop/shoes")
        .unwrap()
        .add_sub_item("boots", "Boots", "/shop/shoes/boots")
        .unwrap();

    assert_eq!(menu.items().actives().names(), vec!["shop", "shoes", "boots"]);
    assert!(menu.item("shop").unwrap().has_active_child());
}

#[test]
fn test_link_activation_climbs_through_links() {
    let options = MenuOptions::from_value(json!({
        "active_element": "link",
        "active_class": "is-active"
    }))
    .unwrap();
    let mut menu = menu_at("/team/members", options);
    menu.add_item("team", "Team", "/team")
        .unwrap()
        .add_sub_item("members", "Members", "/team/members")
        .unwrap();

    for name in ["team", "members"] {
        let item = menu.get_item(name).unwrap();
        let link = item.link.as_ref().unwrap();
        assert!(!item.is_active(), "{} item should stay inactive", name);
        assert!(link.is_active(), "{} link should be active", name);
        assert_eq!(link.attributes.get("class"), Some("is-active"));
        assert!(item.attributes.get("class").is_none());
    }
}

#[test]
fn test_link_activation_skips_text_only_parents() {
    let mut menu = menu_at("/team/members", MenuOptions::default().active_element("link"));
    menu.add_item("team", "Team", ItemOptions::new())
        .unwrap()
        .add_sub_item("members", "Members", "/team/members")
        .unwrap();

    assert!(!menu.get_item("team").unwrap().is_item_or_link_active());
    assert!(menu.get_item("members").unwrap().is_item_or_link_active());
}

#[test]
fn test_manual_activation_of_hash_links() {
    let mut menu = menu_at("/", MenuOptions::default());
    menu.add_item("team", "Team", "#").unwrap().activate();

    let team = menu.item("team").unwrap();
    assert!(team.is_active());
    assert_eq!(team.url().as_deref(), Some("#"));
}

#[test]
fn test_absolute_urls_match_the_current_url() {
    let mut menu = menu_at("/docs", MenuOptions::default());
    menu.add_item("docs", "Docs", format!("{}/docs", APP_URL)).unwrap();
    menu.add_item("external", "External", "https://docs.rs").unwrap();

    assert_eq!(menu.items().actives().names(), vec!["docs"]);
}

#[test]
fn test_route_items_activate() {
    let mut menu = menu_at("/admin/dashboard", MenuOptions::default());
    menu.add_item("dashboard", "Dashboard", ItemOptions::new().route("dashboard"))
        .unwrap();

    assert!(menu.get_item("dashboard").unwrap().is_active());
}
