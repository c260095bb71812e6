//! Page-specific behavior
//!
//! Forms that only exist on one page.

pub mod auth;
pub mod settings;
