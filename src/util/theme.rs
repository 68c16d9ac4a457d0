//! Light/dark theme preference with `localStorage` persistence.
//!
//! Reads the saved preference on construction and applies it by setting a
//! `data-theme` attribute on the `<html>` element. `apply_theme` persists
//! unconditionally; `toggle_theme` flips between the two themes. A stored
//! value that is neither `light` nor `dark` is applied as-is and the next
//! toggle lands on `light`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::{BrowserStore, PreferenceStore};

/// `localStorage` key holding the theme preference.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Attribute set on the document root to drive themed styling.
pub const THEME_ATTR: &str = "data-theme";

pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";

/// The theme used on the page, as configured for production.
pub type SiteTheme = ThemePreference<BrowserStore>;

/// The user's theme preference, backed by an explicit store.
///
/// Invariant: after `apply_theme`, the document-root attribute, the
/// internal state, and the stored value all carry the same theme.
#[derive(Clone, Debug)]
pub struct ThemePreference<S: PreferenceStore> {
    current: String,
    store: S,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Restore the saved preference. With nothing stored, the state
    /// defaults to `light` and the document attribute stays unset.
    #[must_use]
    pub fn restore(store: S) -> Self {
        let mut pref = Self { current: LIGHT.to_owned(), store };
        if let Some(saved) = pref.store.read(STORAGE_KEY) {
            set_document_theme(&saved);
            pref.current = saved;
        }
        pref
    }

    /// The active theme.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.current == DARK
    }

    /// Apply `theme`: set the document attribute, update state, and
    /// persist, overwriting any prior stored value.
    pub fn apply_theme(&mut self, theme: &str) {
        set_document_theme(theme);
        self.current = theme.to_owned();
        self.store.write(STORAGE_KEY, theme);
    }

    /// Flip between `light` and `dark` and apply the result.
    pub fn toggle_theme(&mut self) {
        let next = if self.current == LIGHT { DARK } else { LIGHT };
        self.apply_theme(next);
    }
}

/// Set the theming attribute on the `<html>` element.
fn set_document_theme(theme: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTR, theme);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
