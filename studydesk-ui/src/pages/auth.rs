//! Landing Page
//!
//! Login and signup panels share the page; links swap which one is shown.
//! Signing up only records the display name locally and moves on to the
//! home page. Nothing is authenticated.

use web_sys::{Element, Event};

use crate::app::PageContext;
use crate::dom;
use crate::forms::submit_display_name;

fn bind_swap(link: &Element, hide: Element, show: Element) {
    dom::listen(link, "click", move |event: Event| {
        event.prevent_default();
        dom::set_display(&hide, "none");
        dom::set_display(&show, "block");
    });
}

/// Returns whether this is the landing page
pub fn bind(ctx: &PageContext) -> bool {
    let document = &ctx.document;
    let mut bound_any = false;

    if let (Some(login_box), Some(signup_box)) = (
        dom::element(document, "login-box"),
        dom::element(document, "signup-box"),
    ) {
        if let Some(link) = dom::element(document, "show-signup") {
            bind_swap(&link, login_box.clone(), signup_box.clone());
            bound_any = true;
        }
        if let Some(link) = dom::element(document, "show-login") {
            bind_swap(&link, signup_box, login_box);
            bound_any = true;
        }
    }

    if let (Some(form), Some(name_input)) = (
        dom::element(document, "signup-form"),
        dom::input(document, "signup-name"),
    ) {
        let store = ctx.store.clone();
        let home = ctx.config.home_page.clone();
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            match submit_display_name(store.as_ref(), &name_input.value()) {
                Ok(profile) => {
                    log::info!("Signed up as {}", profile.name);
                    dom::navigate(&home);
                }
                Err(e) => dom::alert(&e.to_string()),
            }
        });
        bound_any = true;
    }

    bound_any
}
