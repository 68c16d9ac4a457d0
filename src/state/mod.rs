//! Pure interaction state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is decision logic with no browser dependency: which
//! elements a behavior targets, whether an effect fires, and what the
//! effect looks like. The `util` modules apply these decisions to the DOM.

pub mod feedback;
pub mod lazy;
pub mod reveal;
