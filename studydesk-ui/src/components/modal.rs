//! Submission Modal
//!
//! Opened by any element carrying `js-open-modal`, closed by its close
//! button or a click on the backdrop. Display and the `show` transition
//! class are switched a few milliseconds apart so the CSS transition runs.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

use crate::app::PageContext;
use crate::components::ToastKind;
use crate::dom;
use crate::forms::validate_submission;

const MODAL_ID: &str = "submission-modal";
const OPEN_TRIGGER_CLASS: &str = "js-open-modal";

struct Modal {
    element: Element,
    show_delay_ms: u32,
    hide_delay_ms: u32,
}

impl Modal {
    fn open(&self) {
        dom::set_display(&self.element, "grid");
        let element = self.element.clone();
        Timeout::new(self.show_delay_ms, move || dom::add_class(&element, "show")).forget();
    }

    fn close(&self) {
        dom::remove_class(&self.element, "show");
        let element = self.element.clone();
        Timeout::new(self.hide_delay_ms, move || dom::set_display(&element, "none")).forget();
    }
}

fn is_open_trigger(target: Option<&web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_ref::<Element>())
        .map_or(false, |el| el.class_list().contains(OPEN_TRIGGER_CLASS))
}

pub fn bind(ctx: &PageContext) -> bool {
    let document = &ctx.document;
    let Some(element) = dom::element(document, MODAL_ID) else {
        return false;
    };

    let modal = Rc::new(Modal {
        element,
        show_delay_ms: ctx.config.modal_show_delay_ms,
        hide_delay_ms: ctx.config.modal_hide_delay_ms,
    });

    // Triggers can be anywhere on the page
    {
        let modal = Rc::clone(&modal);
        dom::listen(document, "click", move |event: Event| {
            if is_open_trigger(event.target().as_ref()) {
                event.prevent_default();
                modal.open();
            }
        });
    }

    if let Ok(Some(close_button)) = modal.element.query_selector(".modal-close-btn") {
        let modal = Rc::clone(&modal);
        dom::listen(&close_button, "click", move |_| modal.close());
    }

    {
        let backdrop = Rc::clone(&modal);
        dom::listen(&modal.element, "click", move |event: Event| {
            let target = event.target();
            let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
            if backdrop.element.is_same_node(node) {
                backdrop.close();
            }
        });
    }

    if let (Some(form), Some(file_input)) = (
        dom::element(document, "submission-form"),
        dom::input(document, "file-upload"),
    ) {
        let modal = Rc::clone(&modal);
        let ctx = ctx.clone();
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            match validate_submission(&file_input.value()) {
                Ok(()) => {
                    modal.close();
                    ctx.toast("File Submitted! \u{2705}", ToastKind::Success);
                    file_input.set_value("");
                }
                Err(e) => dom::alert(&e.to_string()),
            }
        });
    }

    true
}
