//! Theme and visitor name, backed by [`LocalStore`].

use folio_core::StorageError;
use serde::{Deserialize, Serialize};

use crate::local_store::LocalStore;

pub const THEME_KEY: &str = "theme";
pub const VISITOR_NAME_KEY: &str = "visitorName";

/// Page color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value; anything unrecognised is the default
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button icon: offers the opposite theme
    pub fn icon_name(&self) -> &'static str {
        match self {
            Theme::Light => "moon",
            Theme::Dark => "sun",
        }
    }
}

/// Greeting for a returning visitor; `None` when no name is known
pub fn greeting(visitor_name: &str) -> Option<String> {
    if visitor_name.is_empty() {
        return None;
    }
    Some(format!(
        "Hello, {}! I'm a web developer passionate about creating amazing experiences.",
        visitor_name
    ))
}

/// Typed access to the persisted preferences
#[derive(Debug)]
pub struct Preferences {
    store: LocalStore,
}

impl Preferences {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn theme(&self) -> Theme {
        self.store
            .get_item(THEME_KEY)
            .map(Theme::parse)
            .unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be written.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.store.set_item(THEME_KEY, theme.as_str())
    }

    /// Stored visitor name, empty when unknown
    pub fn visitor_name(&self) -> &str {
        self.store.get_item(VISITOR_NAME_KEY).unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be written.
    pub fn set_visitor_name(&mut self, name: &str) -> Result<(), StorageError> {
        self.store.set_item(VISITOR_NAME_KEY, name)
    }
}
