//! App Root
//!
//! Page boot sequence and the browser-side [`PageSurface`].

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Event};

use crate::components::{chat, header, menus::DropdownMenus, modal, nav, show_toast, ToastKind};
use crate::config::SiteConfig;
use crate::dom;
use crate::loader::{Fragment, HttpFragmentSource, ListenerGroup, PageSurface, PartialLoader};
use crate::pages::{auth, settings};
use crate::state::{profile, KeyValueStore, UserProfile};

/// Everything a listener group needs to do its work
#[derive(Clone)]
pub struct PageContext {
    pub document: Document,
    pub store: Rc<dyn KeyValueStore>,
    pub config: Rc<SiteConfig>,
    /// Filename of the displayed page
    pub current_page: Rc<str>,
}

impl PageContext {
    pub fn new(document: Document, store: Rc<dyn KeyValueStore>, config: Rc<SiteConfig>) -> Self {
        let pathname = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let current_page = nav::current_page(&pathname, &config.landing_page);
        Self {
            document,
            store,
            config,
            current_page: current_page.into(),
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile::load(self.store.as_ref())
    }

    /// Apply the saved user data to every placeholder in the document
    pub fn refresh_user_data(&self) {
        profile::render(&self.document, &self.profile());
    }

    pub fn toast(&self, message: &str, kind: ToastKind) {
        show_toast(&self.document, message, kind, self.config.toast_ms);
    }
}

/// [`PageSurface`] over the live document
pub struct DocumentSurface {
    ctx: PageContext,
    /// Set by the header group, consumed by the click-outside group
    menus: RefCell<Option<Rc<DropdownMenus>>>,
}

impl DocumentSurface {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            menus: RefCell::new(None),
        }
    }

    fn container_id(&self, fragment: Fragment) -> &str {
        match fragment {
            Fragment::Sidebar => &self.ctx.config.sidebar_container,
            Fragment::Header => &self.ctx.config.header_container,
        }
    }

    fn bind_header(&self) -> bool {
        let listeners = header::bind(&self.ctx);
        *self.menus.borrow_mut() = listeners.menus;
        listeners.bound_any
    }

    fn bind_click_outside(&self) -> bool {
        let Some(menus) = self.menus.borrow().clone() else {
            return false;
        };
        let Some(window) = web_sys::window() else {
            return false;
        };
        dom::listen(&window, "click", move |event: Event| {
            menus.handle_click(event.target().as_ref());
        });
        true
    }
}

impl PageSurface for DocumentSurface {
    fn inject(&self, fragment: Fragment, html: &str) -> bool {
        match dom::element(&self.ctx.document, self.container_id(fragment)) {
            Some(container) => {
                container.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn refresh_user_data(&self) {
        self.ctx.refresh_user_data();
    }

    fn mark_active_link(&self) {
        let id = self.container_id(Fragment::Sidebar);
        if let Some(container) = dom::element(&self.ctx.document, id) {
            let marked = nav::mark_active_links(&container, &self.ctx.current_page);
            log::debug!("{} sidebar link(s) marked active for {}", marked, self.ctx.current_page);
        }
    }

    fn bind(&self, group: ListenerGroup) -> bool {
        match group {
            ListenerGroup::Header => self.bind_header(),
            ListenerGroup::ClickOutside => self.bind_click_outside(),
            ListenerGroup::Settings => settings::bind(&self.ctx),
            ListenerGroup::Modal => modal::bind(&self.ctx),
            ListenerGroup::Chat => chat::bind(&self.ctx),
        }
    }
}

/// Runs once the document is parsed
pub fn boot(ctx: PageContext) {
    ctx.refresh_user_data();

    if auth::bind(&ctx) {
        log::debug!("Auth page listeners added");
    }

    let loader = PartialLoader::new(
        HttpFragmentSource,
        DocumentSurface::new(ctx.clone()),
        &ctx.config,
    );
    wasm_bindgen_futures::spawn_local(async move {
        let report = loader.load().await;
        log::debug!("Page composed: {:?}", report);
    });
}
