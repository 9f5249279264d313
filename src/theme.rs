//! Light/dark theme persistence and toggle.
//!
//! Reads the stored preference from `localStorage` at startup and applies the
//! `dark-theme` class to the document root element. The toggle control flips
//! the class and writes the resulting theme back under the fixed key.
//! Storage being unavailable or empty means light mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::consts::{DARK_THEME_CLASS, THEME_STORAGE_KEY, THEME_TOGGLE_SELECTOR};
use crate::dom;

/// The two presentation themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The value persisted to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored preference. Anything but the exact dark marker,
    /// including an absent key, means light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the dark-theme class flag should be present.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Read the persisted preference, defaulting to light when storage is
/// unavailable or holds nothing usable.
fn read_preference() -> Theme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

/// Persist the preference. Dropped with a log line when storage is unavailable.
fn save_preference(theme: Theme) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        log::warn!("theme: localStorage unavailable, preference not saved");
        return;
    };
    if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
        log::warn!("theme: failed to persist preference: {err:?}");
    }
}

/// Apply the stored preference and wire the toggle control.
///
/// The startup application happens even when the toggle control is absent.
pub fn wire(doc: &Document) -> Result<(), JsValue> {
    let Some(root) = doc.document_element() else {
        return Ok(());
    };

    let initial = read_preference();
    dom::set_class(&root, DARK_THEME_CLASS, initial.is_dark());

    let Some(toggle) = dom::query(doc, THEME_TOGGLE_SELECTOR) else {
        log::debug!("theme: no {THEME_TOGGLE_SELECTOR} element, toggle not wired");
        return Ok(());
    };

    dom::listen(&toggle, "click", move |_event| {
        // The rendered class is the source of truth; the persisted value
        // always follows it.
        let current = if dom::has_class(&root, DARK_THEME_CLASS) { Theme::Dark } else { Theme::Light };
        let next = current.toggled();
        dom::set_class(&root, DARK_THEME_CLASS, next.is_dark());
        save_preference(next);
    })?;

    Ok(())
}
