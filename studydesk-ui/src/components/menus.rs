//! Header dropdown menus
//!
//! Which menu is open is tracked in [`MenuState`]; the `show` class on the
//! panels is only ever written from that state. Element handles are looked
//! up once, when the header listeners are bound.

use std::cell::RefCell;

use web_sys::{Document, Element, EventTarget};

use crate::dom;

const SHOW_CLASS: &str = "show";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuId {
    Profile,
    Notification,
}

impl MenuId {
    pub const ALL: [MenuId; 2] = [MenuId::Profile, MenuId::Notification];

    fn trigger_id(self) -> &'static str {
        match self {
            MenuId::Profile => "header-profile-icon",
            MenuId::Notification => "notification-icon",
        }
    }

    fn panel_id(self) -> &'static str {
        match self {
            MenuId::Profile => "profile-dropdown-menu",
            MenuId::Notification => "notification-dropdown-menu",
        }
    }
}

/// At most one dropdown is open at a time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: Option<MenuId>,
}

impl MenuState {
    pub fn open(&self) -> Option<MenuId> {
        self.open
    }

    pub fn is_open(&self, id: MenuId) -> bool {
        self.open == Some(id)
    }

    /// Trigger clicked: open `id` (closing any other) or close it if open
    pub fn toggle(&mut self, id: MenuId) {
        self.open = if self.is_open(id) { None } else { Some(id) };
    }

    /// A click somewhere on the page. `hit` is the menu whose trigger or
    /// panel contains the click. Returns whether anything closed.
    pub fn dismiss(&mut self, hit: Option<MenuId>) -> bool {
        match self.open {
            Some(open) if hit != Some(open) => {
                self.open = None;
                true
            }
            _ => false,
        }
    }
}

/// Trigger and panel of one dropdown
pub struct Dropdown {
    pub trigger: Element,
    pub panel: Element,
}

impl Dropdown {
    fn find(document: &Document, id: MenuId) -> Option<Self> {
        Some(Self {
            trigger: dom::element(document, id.trigger_id())?,
            panel: dom::element(document, id.panel_id())?,
        })
    }

    fn contains(&self, target: Option<&EventTarget>) -> bool {
        dom::contains(&self.trigger, target) || dom::contains(&self.panel, target)
    }
}

/// The header's dropdowns plus their shared state
pub struct DropdownMenus {
    profile: Option<Dropdown>,
    notification: Option<Dropdown>,
    state: RefCell<MenuState>,
}

impl DropdownMenus {
    /// Capture whichever dropdowns the header provides
    pub fn find(document: &Document) -> Self {
        Self {
            profile: Dropdown::find(document, MenuId::Profile),
            notification: Dropdown::find(document, MenuId::Notification),
            state: RefCell::new(MenuState::default()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.profile.is_none() && self.notification.is_none()
    }

    pub fn dropdown(&self, id: MenuId) -> Option<&Dropdown> {
        match id {
            MenuId::Profile => self.profile.as_ref(),
            MenuId::Notification => self.notification.as_ref(),
        }
    }

    pub fn toggle(&self, id: MenuId) {
        self.state.borrow_mut().toggle(id);
        self.render();
    }

    /// Close the open menu unless the click landed inside it or its trigger
    pub fn handle_click(&self, target: Option<&EventTarget>) {
        let hit = MenuId::ALL
            .into_iter()
            .find(|id| self.dropdown(*id).map_or(false, |d| d.contains(target)));
        let closed = self.state.borrow_mut().dismiss(hit);
        if closed {
            self.render();
        }
    }

    fn render(&self) {
        let state = *self.state.borrow();
        for id in MenuId::ALL {
            if let Some(dropdown) = self.dropdown(id) {
                dom::set_class(&dropdown.panel, SHOW_CLASS, state.is_open(id));
            }
        }
    }
}
