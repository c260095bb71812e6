//! DOM helpers
//!
//! Thin wrappers over `web-sys` for the handful of operations every widget
//! needs. Lookups return `Option` so callers can no-op on missing elements.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement};

/// Look up an element by id and cast it
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn element(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    by_id::<HtmlInputElement>(document, id)
}

/// Set `textContent` on the element with `id`, if present
pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = element(document, id) {
        el.set_text_content(Some(text));
    }
}

/// Set an attribute on the element with `id`, if present
pub fn set_attr(document: &Document, id: &str, name: &str, value: &str) {
    if let Some(el) = element(document, id) {
        if let Err(e) = el.set_attribute(name, value) {
            log::warn!("Failed to set {} on #{}: {:?}", name, id, e);
        }
    }
}

/// Set the inline `display` style
pub fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property("display", value) {
            log::warn!("Failed to set display: {:?}", e);
        }
    }
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Attach an event listener for the lifetime of the page
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("Failed to attach {} listener: {:?}", event, e);
    }
    closure.forget();
}

/// Whether `target` is `container` or one of its descendants
pub fn contains(container: &Element, target: Option<&EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_ref::<web_sys::Node>())
        .map_or(false, |node| container.contains(Some(node)))
}

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// Navigate the current tab
pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            log::error!("Navigation to {} failed: {:?}", href, e);
        }
    }
}
