//! Sidebar navigation
//!
//! Marks the sidebar entry for the page being displayed. One rule applies
//! everywhere: the current page is the last path segment, with the site
//! root standing for the landing page it serves, and a link is active when
//! its `href` names exactly that file.

use wasm_bindgen::JsCast;
use web_sys::Element;

const ACTIVE_CLASS: &str = "active";
const LINK_SELECTOR: &str = ".sidebar-nav a";

/// Resolve the filename of the current page from `location.pathname`
pub fn current_page(pathname: &str, root_page: &str) -> String {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => root_page.to_string(),
    }
}

/// Exact filename match between a link's `href` and the current page
pub fn is_active(href: &str, current_page: &str) -> bool {
    let href = href.strip_prefix("./").unwrap_or(href);
    href == current_page
}

/// Toggle the `active` class on every sidebar link inside `container`.
/// Returns the number of links marked active.
pub fn mark_active_links(container: &Element, current_page: &str) -> usize {
    let links = match container.query_selector_all(LINK_SELECTOR) {
        Ok(links) => links,
        Err(e) => {
            log::warn!("Could not set active sidebar link: {:?}", e);
            return 0;
        }
    };

    let mut marked = 0;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let active = link
            .get_attribute("href")
            .map_or(false, |href| is_active(&href, current_page));
        let _ = link.class_list().toggle_with_force(ACTIVE_CLASS, active);
        if active {
            marked += 1;
        }
    }
    marked
}
