//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; it owns section scaffolding (ids, titles)
//! and delegates item rendering to `components`.

pub mod portfolio;
