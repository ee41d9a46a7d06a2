//! Light/dark appearance preference.
//!
//! Independent of the todo list: the flag lives under its own storage key
//! (default `darkMode`) as a bare JSON boolean. Loading follows the same
//! forgiving rules as the list; anything but `true` or `false` reads as
//! light.

use std::fmt;

use tracing::{debug, warn};

use crate::storage::KeyValueStorage;

/// Storage key the preference is saved under unless configured otherwise.
pub const DEFAULT_APPEARANCE_KEY: &str = "darkMode";

/// Display theme derived from the preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl From<bool> for Theme {
    fn from(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Persisted "dark appearance enabled" flag.
///
/// # Example
///
/// ```
/// use taskpad_core::appearance::{AppearancePreference, Theme};
/// use taskpad_core::storage::MemoryStorage;
///
/// let mut appearance = AppearancePreference::new(MemoryStorage::new());
/// assert_eq!(appearance.theme(), Theme::Light);
///
/// appearance.toggle();
/// assert!(appearance.is_dark());
/// ```
#[derive(Debug)]
pub struct AppearancePreference<S> {
    storage: S,
    key: String,
    dark: bool,
}

impl<S: KeyValueStorage> AppearancePreference<S> {
    /// Loads the preference from [`DEFAULT_APPEARANCE_KEY`].
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_APPEARANCE_KEY)
    }

    /// Loads the preference from `key`.
    #[must_use]
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let dark = load_dark_mode(&storage, &key);
        Self { storage, key, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from(self.dark)
    }

    /// Sets the flag and saves it.
    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
        self.persist();
    }

    /// Flips the flag, saves it, and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_dark(!self.dark);
        self.dark
    }

    fn persist(&self) {
        let blob = if self.dark { "true" } else { "false" };
        if let Err(e) = self.storage.write(&self.key, blob) {
            warn!(key = %self.key, error = %e, "Failed to save appearance preference");
        }
    }
}

fn load_dark_mode<S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> bool {
    match storage.read(key) {
        Ok(Some(blob)) => match serde_json::from_str::<bool>(&blob) {
            Ok(dark) => {
                debug!(key, dark, "Loaded appearance preference");
                dark
            }
            Err(e) => {
                warn!(key, error = %e, "Saved appearance preference is corrupt, using light");
                false
            }
        },
        Ok(None) => false,
        Err(e) => {
            warn!(key, error = %e, "Failed to read appearance preference, using light");
            false
        }
    }
}
