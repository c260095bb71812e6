//! StudyDesk client
//!
//! Page behavior for the StudyDesk study dashboard, compiled to WebAssembly
//! and loaded by every page of the static site.
//!
//! # Features
//!
//! - Saved theme applied before anything else runs
//! - Shared sidebar and header composed from fetched HTML fragments
//! - Display name kept in `localStorage` and rendered into every placeholder
//! - Header dropdowns, settings form, submission modal and a demo chat popup
//!
//! # Architecture
//!
//! [`loader`] fetches both fragments concurrently and binds the listener
//! groups once both fetches have settled. The groups themselves live in
//! [`components`] and [`pages`]; persisted values live in [`state`].

use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod forms;
pub mod loader;
pub mod pages;
pub mod state;

use crate::config::SiteConfig;
use crate::state::{theme, KeyValueStore, LocalStore, MemoryStore};

/// WASM entry point
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Logger setup failed: {}", e).into());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let store: Rc<dyn KeyValueStore> = match LocalStore::open() {
        Some(store) => Rc::new(store),
        None => Rc::new(MemoryStore::new()),
    };

    // Theme first, before any content is touched
    theme::apply(&document, theme::load(store.as_ref()));

    let ctx = app::PageContext::new(document.clone(), store, Rc::new(SiteConfig::default()));

    if document.ready_state() == "loading" {
        let mut pending = Some(ctx);
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(ctx) = pending.take() {
                app::boot(ctx);
            }
        });
    } else {
        app::boot(ctx);
    }
}
