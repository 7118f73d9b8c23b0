//! Site navigation tree.
//!
//! Feeds the static half of the sitemap. The header markup in
//! `base.html` mirrors this tree by hand; a test below checks every
//! entry against the template so the two stay in sync.

use bandstand_domain::menu::{NavEntry, NavItem};

/// The header navigation, in display order.
pub fn site_nav() -> Vec<NavItem> {
    vec![
        NavItem::link("Home", "/"),
        NavItem::dropdown(
            "Music",
            vec![
                NavEntry::new("Releases", "/music"),
                NavEntry::new("Videos", "/videos"),
            ],
        ),
        NavItem::dropdown(
            "Gigs",
            vec![
                NavEntry::new("Upcoming", "/gigs"),
                NavEntry::new("Past gigs", "/gigs/past"),
            ],
        ),
        NavItem::dropdown(
            "Band",
            vec![
                NavEntry::new("Members", "/band"),
                NavEntry::new("Biography", "/bio"),
            ],
        ),
        NavItem::link("News", "/news"),
        NavItem::link("Merch", "/merch"),
        NavItem::link("Contacts", "/contacts"),
    ]
}

/// Every static route the sitemap advertises.
pub fn static_routes() -> Vec<String> {
    let mut routes = vec!["/".to_owned()];
    for item in site_nav() {
        for entry in item.entries() {
            if entry.href != "/" {
                routes.push(entry.href.clone());
            }
        }
    }
    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_static_routes_at_the_front_page() {
        let routes = static_routes();
        assert_eq!(routes[0], "/");
        assert_eq!(routes.iter().filter(|href| *href == "/").count(), 1);
    }

    #[test]
    fn should_include_every_dropdown_entry_in_static_routes() {
        let routes = static_routes();
        for expected in ["/music", "/videos", "/gigs", "/gigs/past", "/band", "/bio"] {
            assert!(routes.iter().any(|href| href == expected), "missing {expected}");
        }
    }

    #[test]
    fn should_match_header_markup_in_base_template() {
        let base = include_str!("../templates/base.html");
        for item in site_nav() {
            for entry in item.entries() {
                let link = format!("<a href=\"{}\">{}</a>", entry.href, entry.label);
                assert!(base.contains(&link), "header is missing {link}");
            }
        }
    }
}
