//! Pure decisions for click and hover feedback.
//!
//! DESIGN
//! ======
//! Each interaction is a function from event facts to a visual effect, so
//! the behavior is callable from real event dispatch and from native tests
//! alike. The `util` modules own the DOM side: applying transforms and
//! scheduling the reverts.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Class marking action buttons nested inside cards; clicks on these skip
/// the card-level feedback.
pub const ACTION_CLASS: &str = "btn";

/// Raised stacking order applied to a card while the pointer is over it.
pub const CARD_RAISE_Z_INDEX: &str = "10";

/// A transient transform applied to an element and reverted after a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pulse {
    pub transform: &'static str,
    pub revert_after_ms: u32,
}

/// Scale-up pulse played when a card is clicked.
pub const CARD_PULSE: Pulse = Pulse { transform: "scale(1.02)", revert_after_ms: 200 };

/// Scale-down pulse played when a contact link is clicked.
pub const CONTACT_PULSE: Pulse = Pulse { transform: "scale(0.98)", revert_after_ms: 150 };

/// Feedback for a click inside a card. Clicks that land on a nested action
/// button produce no card-level pulse.
#[must_use]
pub fn card_click_feedback(target_is_action: bool) -> Option<Pulse> {
    if target_is_action { None } else { Some(CARD_PULSE) }
}

/// Stacking-order change for pointer enter/leave on a card. `Some` raises
/// the card; `None` restores the original order.
#[must_use]
pub fn card_hover_z_index(entered: bool) -> Option<&'static str> {
    entered.then_some(CARD_RAISE_Z_INDEX)
}

/// Feedback for a contact-link click: the pulse plus one diagnostic line
/// carrying the link's visible text.
#[must_use]
pub fn contact_click_feedback(link_text: &str) -> (Pulse, String) {
    (CONTACT_PULSE, format!("Contact link clicked: {}", link_text.trim()))
}
