//! Settings Page
//!
//! Display name form and the dark mode switch.

use web_sys::Event;

use crate::app::PageContext;
use crate::components::ToastKind;
use crate::dom;
use crate::forms::submit_display_name;
use crate::state::theme::{self, Theme};

pub const SAVED_MESSAGE: &str = "Changes saved successfully! \u{2705}";

pub fn bind(ctx: &PageContext) -> bool {
    let document = &ctx.document;
    let mut bound_any = false;

    if let (Some(form), Some(name_input)) = (
        dom::element(document, "settings-form"),
        dom::input(document, "full-name"),
    ) {
        let ctx = ctx.clone();
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            match submit_display_name(ctx.store.as_ref(), &name_input.value()) {
                Ok(profile) => {
                    log::info!("Display name changed to {}", profile.name);
                    ctx.refresh_user_data();
                    ctx.toast(SAVED_MESSAGE, ToastKind::Success);
                }
                Err(e) => dom::alert(&e.to_string()),
            }
        });
        bound_any = true;
    }

    if let Some(switch) = dom::input(document, "theme-switch") {
        switch.set_checked(theme::load(ctx.store.as_ref()).is_dark());

        let ctx = ctx.clone();
        let input = switch.clone();
        dom::listen(&switch, "change", move |_| {
            let selected = Theme::from_checked(input.checked());
            theme::apply(&ctx.document, selected);
            theme::save(ctx.store.as_ref(), selected);
        });
        bound_any = true;
    }

    bound_any
}
