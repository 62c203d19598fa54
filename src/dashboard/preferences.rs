//! Favorites and theme persisted through a [`KeyValueStore`].

use super::store::{KeyValueStore, StoreError};

pub const FAVORITES_KEY: &str = "weatherFavs";
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Only an explicit "light" selects the light theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// User preferences backed by a key-value store
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Favorite cities in insertion order. Unreadable data counts as empty.
    pub fn favorites(&self) -> Vec<String> {
        self.store
            .get(FAVORITES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn is_favorite(&self, city: &str) -> bool {
        self.favorites().iter().any(|c| c == city)
    }

    /// Add `city` if absent, remove it if present. Returns whether the city
    /// is a favorite afterwards.
    pub fn toggle_favorite(&mut self, city: &str) -> Result<bool, StoreError> {
        let mut favorites = self.favorites();
        let added = if favorites.iter().any(|c| c == city) {
            favorites.retain(|c| c != city);
            false
        } else {
            favorites.push(city.to_string());
            true
        };

        self.store
            .set(FAVORITES_KEY, serde_json::to_string(&favorites)?)?;
        Ok(added)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_stored(self.store.get(THEME_KEY).as_deref())
    }

    /// Flip and persist the theme, returning the new one
    pub fn toggle_theme(&mut self) -> Result<Theme, StoreError> {
        let theme = self.theme().toggled();
        self.store.set(THEME_KEY, theme.as_str().to_string())?;
        Ok(theme)
    }
}
