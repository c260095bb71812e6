//! Dark mode
//!
//! The preference is read once at boot, before anything else touches the
//! page, and applied as the `dark-mode` class on `<body>`. The settings
//! switch writes it back.

use web_sys::Document;

use crate::state::storage::{KeyValueStore, THEME_KEY};

const DARK_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Interpret a stored value; absent or unknown values mean light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Theme selected by the settings switch position
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

pub fn load(store: &dyn KeyValueStore) -> Theme {
    Theme::from_stored(store.get(THEME_KEY).as_deref())
}

pub fn save(store: &dyn KeyValueStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

/// Add or remove the `dark-mode` class on `<body>`
pub fn apply(document: &Document, theme: Theme) {
    let Some(body) = document.body() else {
        log::debug!("No <body> yet, theme not applied");
        return;
    };
    let class_list = body.class_list();
    let result = if theme.is_dark() {
        class_list.add_1(DARK_CLASS)
    } else {
        class_list.remove_1(DARK_CLASS)
    };
    if let Err(e) = result {
        log::warn!("Failed to apply theme: {:?}", e);
    }
}
