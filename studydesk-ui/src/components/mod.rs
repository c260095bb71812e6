//! UI Components
//!
//! Listener groups and widgets bound into the fetched fragments.

pub mod chat;
pub mod header;
pub mod menus;
pub mod modal;
pub mod nav;
pub mod toast;

pub use menus::{DropdownMenus, MenuId, MenuState};
pub use toast::{show_toast, ToastKind};
