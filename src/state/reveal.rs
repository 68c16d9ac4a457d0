//! Presentation roles and one-directional reveal tracking.
//!
//! DESIGN
//! ======
//! The reveal behavior is data-driven: a fixed set of presentation roles
//! maps to marker classes, and the registry of matching elements is built
//! once at setup rather than re-queried per event. `RevealTracker` records
//! which elements have already been revealed so the entrance transition
//! never replays on scroll-back.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Class added to an element when it should play its entrance transition.
pub const REVEAL_CLASS: &str = "animate-in";

/// Fraction of an element's area that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin for the reveal watcher; the bottom edge is pulled up so
/// elements reveal slightly before fully entering the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay before the hero content is revealed unconditionally. The
/// intersection watcher may never fire for a block that is already fully
/// on-screen at load, so the hero gets a timed fallback.
pub const HERO_REVEAL_DELAY_MS: u32 = 300;

/// Presentation roles whose elements play an entrance transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    TimelineItem,
    EducationCard,
    ProjectCard,
    HeroContent,
    SectionTitle,
}

impl Role {
    /// Every role, in registry order.
    pub const ALL: [Role; 5] = [
        Role::TimelineItem,
        Role::EducationCard,
        Role::ProjectCard,
        Role::HeroContent,
        Role::SectionTitle,
    ];

    /// The marker class identifying elements with this role.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Role::TimelineItem => "timeline-item",
            Role::EducationCard => "education-card",
            Role::ProjectCard => "project-card",
            Role::HeroContent => "hero-content",
            Role::SectionTitle => "section-title",
        }
    }

    /// CSS selector for elements carrying this role's marker class.
    #[must_use]
    pub fn selector(self) -> String {
        format!(".{}", self.class())
    }
}

/// Stable identity of a registered element: its role plus its position in
/// that role's registry slot.
pub type ElementKey = (Role, usize);

/// Records which registered elements have already revealed.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<ElementKey>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an element as revealed. Returns `true` the first time only;
    /// later intersection events for the same element are ignored.
    pub fn mark(&mut self, key: ElementKey) -> bool {
        self.revealed.insert(key)
    }

    /// Whether an element has already revealed.
    #[must_use]
    pub fn is_revealed(&self, key: ElementKey) -> bool {
        self.revealed.contains(&key)
    }
}
