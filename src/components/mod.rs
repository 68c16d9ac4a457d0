//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page's sections and items. They are purely
//! presentational: the interactivity units find their targets by marker
//! class, never by component identity, so markup can evolve freely as
//! long as the markers stay.

pub mod contact_links;
pub mod education_card;
pub mod hero;
pub mod nav_bar;
pub mod project_card;
pub mod theme_toggle;
pub mod timeline;
