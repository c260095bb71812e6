//! Local Persistence
//!
//! The two values the site remembers (display name and theme) live in the
//! browser's `localStorage`. Access goes through [`KeyValueStore`] so page
//! logic can be exercised against [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

/// Key holding the user's display name
pub const USER_NAME_KEY: &str = "userName";

/// Key holding the theme preference (`"dark"` / `"light"`)
pub const THEME_KEY: &str = "theme";

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Open the window's local storage, if the browser exposes one
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => {
                log::warn!("localStorage is not available");
                None
            }
            Err(e) => {
                log::warn!("localStorage access denied: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to read {}: {:?}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::error!("Failed to store {}: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            log::error!("Failed to remove {}: {:?}", key, e);
        }
    }
}

/// In-memory store, used when `localStorage` is unavailable and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Forget everything the site stored (logout)
pub fn clear_session(store: &dyn KeyValueStore) {
    store.remove(USER_NAME_KEY);
    store.remove(THEME_KEY);
}
