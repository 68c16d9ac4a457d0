//! Preference storage adapter over browser `localStorage`.
//!
//! DESIGN
//! ======
//! Persistence goes through an explicit store passed to whoever needs it,
//! rather than reaching for `localStorage` ambiently, so preference logic
//! is testable with an in-memory store. The browser store is best-effort:
//! reads return `None` and writes drop silently when storage is missing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// A key-value store for string preferences.
pub trait PreferenceStore {
    /// Read the value for `key`, if one is stored.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, overwriting any prior value.
    fn write(&self, key: &str, value: &str);
}

/// Browser-backed store using `localStorage`. No-op outside a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
