//! Browser glue for the page's interactivity units.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. Each unit performs its setup synchronously in
//! `install` and registers listeners/observers that live for the page
//! lifetime; on native builds every browser path is a no-op so the crate
//! tests without a DOM.

pub mod cards;
pub mod contact;
pub mod diag;
#[cfg(feature = "csr")]
pub mod intersection;
pub mod lazy;
#[cfg(feature = "csr")]
pub(crate) mod pulse;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod theme;
