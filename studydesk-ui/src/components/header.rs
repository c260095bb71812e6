//! Header listeners
//!
//! Search box or motivational quote, the profile and notification
//! dropdowns, and logout. Everything here lives inside the header fragment.

use std::rc::Rc;

use web_sys::Event;

use crate::app::PageContext;
use crate::components::menus::{DropdownMenus, MenuId};
use crate::config::SiteConfig;
use crate::dom;
use crate::state::storage::clear_session;

pub const QUOTES: [&str; 5] = [
    "\u{201c}Romanticizing my study grind because success looks good on me.\u{201d}",
    "\u{201c}Coffee and ambition running in my veins.\u{201d}",
    "\"Believe you can and you're halfway there.\"",
    "\u{201c}In my \u{2018}ace this test and break hearts\u{2019} era.\u{201d}",
    "\"Push yourself, because no one else is going to do it for you.\"",
];

/// What the header's left slot shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderMode {
    Search,
    Quote(&'static str),
}

impl HeaderMode {
    /// `roll` is a uniform sample in `[0, 1)` used to pick the quote
    pub fn for_page(config: &SiteConfig, page: &str, roll: f64) -> Self {
        if config.shows_search(page) {
            HeaderMode::Search
        } else {
            HeaderMode::Quote(pick_quote(roll))
        }
    }
}

pub fn pick_quote(roll: f64) -> &'static str {
    let index = (roll.clamp(0.0, 1.0) * QUOTES.len() as f64) as usize;
    QUOTES[index.min(QUOTES.len() - 1)]
}

/// External search URL for a query, `None` when the query is blank
pub fn search_url(endpoint: &str, raw_query: &str) -> Option<String> {
    let query = raw_query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("{}{}", endpoint, urlencoding::encode(query)))
}

/// Result of binding the header group
pub struct HeaderListeners {
    /// Dropdowns found in the header, shared with the click-outside group
    pub menus: Option<Rc<DropdownMenus>>,
    pub bound_any: bool,
}

pub fn bind(ctx: &PageContext) -> HeaderListeners {
    let document = &ctx.document;
    let mut bound_any = false;

    // Search or quote
    let search_form = dom::element(document, "search-form");
    match (&search_form, dom::element(document, "header-quote")) {
        (Some(form), Some(quote)) => {
            match HeaderMode::for_page(&ctx.config, &ctx.current_page, js_sys::Math::random()) {
                HeaderMode::Search => {
                    dom::set_display(form, "flex");
                    dom::set_display(&quote, "none");
                }
                HeaderMode::Quote(text) => {
                    dom::set_display(form, "none");
                    quote.set_text_content(Some(text));
                    dom::set_display(&quote, "block");
                }
            }
        }
        _ => log::debug!("Search form or quote element not found"),
    }

    if let (Some(form), Some(input)) = (search_form, dom::input(document, "search-input")) {
        let endpoint = ctx.config.search_endpoint.clone();
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            let Some(url) = search_url(&endpoint, &input.value()) else {
                return;
            };
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                    log::error!("Could not open search tab: {:?}", e);
                }
            }
            input.set_value("");
        });
        bound_any = true;
    }

    // Dropdowns
    let menus = DropdownMenus::find(document);
    let menus = if menus.is_empty() {
        log::debug!("No header dropdowns found");
        None
    } else {
        let menus = Rc::new(menus);
        for id in MenuId::ALL {
            if let Some(dropdown) = menus.dropdown(id) {
                let shared = Rc::clone(&menus);
                dom::listen(&dropdown.trigger, "click", move |event: Event| {
                    event.stop_propagation();
                    shared.toggle(id);
                });
            }
        }
        bound_any = true;
        Some(menus)
    };

    // Logout
    if let Some(button) = dom::element(document, "logout-btn") {
        let store = Rc::clone(&ctx.store);
        let landing = ctx.config.landing_page.clone();
        dom::listen(&button, "click", move |event: Event| {
            event.prevent_default();
            clear_session(store.as_ref());
            dom::navigate(&landing);
        });
        bound_any = true;
    }

    HeaderListeners { menus, bound_any }
}
