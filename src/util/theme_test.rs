use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// restore
// =============================================================

#[test]
fn restore_defaults_to_light_with_empty_store() {
    let pref = ThemePreference::restore(MemoryStore::new());
    assert_eq!(pref.current(), LIGHT);
    assert!(!pref.is_dark());
}

#[test]
fn restore_does_not_write_when_nothing_is_stored() {
    let store = MemoryStore::new();
    let pref = ThemePreference::restore(store);
    assert!(pref.store.is_empty());
}

#[test]
fn restore_picks_up_saved_dark_theme() {
    let store = MemoryStore::new();
    store.write(STORAGE_KEY, DARK);
    let pref = ThemePreference::restore(store);
    assert_eq!(pref.current(), DARK);
    assert!(pref.is_dark());
}

#[test]
fn restore_applies_corrupted_value_as_is() {
    let store = MemoryStore::new();
    store.write(STORAGE_KEY, "solarized");
    let pref = ThemePreference::restore(store);
    assert_eq!(pref.current(), "solarized");
    assert!(!pref.is_dark());
}

// =============================================================
// apply_theme
// =============================================================

#[test]
fn apply_theme_updates_state_and_persists() {
    let mut pref = ThemePreference::restore(MemoryStore::new());
    pref.apply_theme(DARK);
    assert_eq!(pref.current(), DARK);
    assert_eq!(pref.store.read(STORAGE_KEY), Some(DARK.to_owned()));
}

#[test]
fn apply_theme_overwrites_prior_stored_value() {
    let store = MemoryStore::new();
    store.write(STORAGE_KEY, DARK);
    let mut pref = ThemePreference::restore(store);
    pref.apply_theme(LIGHT);
    assert_eq!(pref.store.read(STORAGE_KEY), Some(LIGHT.to_owned()));
}

#[test]
fn applied_theme_survives_a_fresh_restore() {
    let mut pref = ThemePreference::restore(MemoryStore::new());
    pref.apply_theme(DARK);
    let restored = ThemePreference::restore(pref.store);
    assert_eq!(restored.current(), DARK);
}

// =============================================================
// toggle_theme
// =============================================================

#[test]
fn toggle_flips_light_to_dark_and_persists() {
    let mut pref = ThemePreference::restore(MemoryStore::new());
    pref.toggle_theme();
    assert_eq!(pref.current(), DARK);
    assert_eq!(pref.store.read(STORAGE_KEY), Some(DARK.to_owned()));
}

#[test]
fn toggle_flips_dark_to_light_and_persists() {
    let store = MemoryStore::new();
    store.write(STORAGE_KEY, DARK);
    let mut pref = ThemePreference::restore(store);
    pref.toggle_theme();
    assert_eq!(pref.current(), LIGHT);
    assert_eq!(pref.store.read(STORAGE_KEY), Some(LIGHT.to_owned()));
}

#[test]
fn double_toggle_round_trips() {
    let mut pref = ThemePreference::restore(MemoryStore::new());
    let original = pref.current().to_owned();
    pref.toggle_theme();
    pref.toggle_theme();
    assert_eq!(pref.current(), original);
}

#[test]
fn toggle_from_corrupted_value_lands_on_light() {
    let store = MemoryStore::new();
    store.write(STORAGE_KEY, "solarized");
    let mut pref = ThemePreference::restore(store);
    pref.toggle_theme();
    assert_eq!(pref.current(), LIGHT);
}
