//! Persisted State
//!
//! The display name and theme preference, and the store they live in.

pub mod profile;
pub mod storage;
pub mod theme;

pub use profile::UserProfile;
pub use storage::{KeyValueStore, LocalStore, MemoryStore};
pub use theme::Theme;
