//! User profile display
//!
//! The display name is the only user data the site keeps. Rendering it
//! fills every name/avatar placeholder currently in the document, so it is
//! re-run each time a fragment brings new placeholders in.

use web_sys::Document;

use crate::dom;
use crate::state::storage::{KeyValueStore, USER_NAME_KEY};

/// Name shown before the user has signed up
pub const DEFAULT_NAME: &str = "User Name";

const AVATAR_BASE: &str = "https://placehold.co/100x100/d9e2f3/1f497d?text=";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Read the saved name, falling back to the placeholder name
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(USER_NAME_KEY) {
            Some(name) if !name.is_empty() => Self { name },
            _ => Self::default(),
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        store.set(USER_NAME_KEY, &self.name);
    }

    /// Uppercased first character, `U` for an empty name
    pub fn initial(&self) -> String {
        match self.name.chars().next() {
            Some(c) => c.to_uppercase().collect(),
            None => "U".to_string(),
        }
    }

    pub fn avatar_url(&self) -> String {
        format!("{}{}", AVATAR_BASE, urlencoding::encode(&self.initial()))
    }

    pub fn welcome_text(&self) -> String {
        format!("Welcome back, {}!", self.name)
    }

    pub fn leaderboard_label(&self) -> String {
        format!("{} (You)", self.name)
    }
}

/// Fill every name/avatar placeholder present in the document
pub fn render(document: &Document, profile: &UserProfile) {
    let avatar = profile.avatar_url();

    dom::set_text(document, "sidebar-user-name", &profile.name);
    dom::set_attr(document, "sidebar-profile-img", "src", &avatar);
    dom::set_attr(document, "header-profile-icon", "src", &avatar);
    dom::set_text(document, "welcome-message", &profile.welcome_text());
    dom::set_text(document, "leaderboard-user-name", &profile.leaderboard_label());

    if let Some(input) = dom::input(document, "full-name") {
        input.set_value(&profile.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::MemoryStore;

    #[test]
    fn test_default_profile() {
        let store = MemoryStore::new();
        let profile = UserProfile::load(&store);
        assert_eq!(profile.name, "User Name");
        assert_eq!(profile.initial(), "U");
    }

    #[test]
    fn test_saved_name_drives_initial_and_welcome() {
        let store = MemoryStore::new();
        UserProfile::new("alice").save(&store);

        let profile = UserProfile::load(&store);
        assert_eq!(profile.initial(), "A");
        assert!(profile.welcome_text().contains("alice"));
        assert_eq!(profile.leaderboard_label(), "alice (You)");
        assert_eq!(
            profile.avatar_url(),
            "https://placehold.co/100x100/d9e2f3/1f497d?text=A"
        );
    }

    #[test]
    fn test_empty_name_initial() {
        assert_eq!(UserProfile::new("").initial(), "U");
    }

    #[test]
    fn test_non_ascii_initial() {
        assert_eq!(UserProfile::new("émile").initial(), "É");
    }
}
