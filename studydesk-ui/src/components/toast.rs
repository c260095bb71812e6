//! Toast Notifications
//!
//! Every page carries one `#toast-notification` element. Showing a toast
//! replaces its text and classes; a fire-and-forget timer hides it again.

use web_sys::Document;

use crate::dom;

const TOAST_ID: &str = "toast-notification";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Full class attribute for a visible toast of this kind
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-notification show",
            ToastKind::Error => "toast-notification show error",
        }
    }
}

/// Show `message` for `duration_ms`
pub fn show_toast(document: &Document, message: &str, kind: ToastKind, duration_ms: u32) {
    let Some(toast) = dom::element(document, TOAST_ID) else {
        log::error!("Toast element not found!");
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name(kind.class_name());

    gloo_timers::callback::Timeout::new(duration_ms, move || {
        dom::remove_class(&toast, "show");
    })
    .forget();
}
