#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.read("theme"), None);
}

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    store.write("theme", "dark");
    assert_eq!(store.read("theme"), Some("dark".to_owned()));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_overwrites_prior_value() {
    let store = MemoryStore::new();
    store.write("theme", "dark");
    store.write("theme", "light");
    assert_eq!(store.read("theme"), Some("light".to_owned()));
    assert_eq!(store.len(), 1);
}

// =============================================================
// BrowserStore (native fallback)
// =============================================================

#[test]
fn browser_store_reads_none_without_a_browser() {
    assert_eq!(BrowserStore.read("theme"), None);
}

#[test]
fn browser_store_write_is_noop_but_callable() {
    BrowserStore.write("theme", "dark");
    assert_eq!(BrowserStore.read("theme"), None);
}
