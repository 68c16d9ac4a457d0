//! # portfolio
//!
//! Client-side interactivity for a personal portfolio site, as a Leptos +
//! WASM crate: smooth anchor scrolling, scroll-triggered reveal
//! animations, card hover/click feedback, a persisted light/dark theme,
//! deferred image loading, and a page-load timer.
//!
//! The crate builds and tests natively with no features enabled; every
//! browser path no-ops there. The `csr` feature pulls in the WASM
//! dependencies and the mount entry point.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

// The interactivity units, re-exported as a collection for reuse and
// testing outside the page itself.
pub use util::cards::CardInteractionManager;
pub use util::contact::ContactLinkTracker;
pub use util::lazy::LazyImageLoader;
pub use util::reveal::RevealAnimator;
pub use util::scroll::ScrollNavigator;
pub use util::theme::ThemePreference;

/// Browser entry point: set up panic reporting and logging, then mount
/// the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
