use super::*;

// =============================================================
// Card click
// =============================================================

#[test]
fn card_click_pulses_scale_up() {
    let pulse = card_click_feedback(false).expect("plain click should pulse");
    assert_eq!(pulse.transform, "scale(1.02)");
    assert_eq!(pulse.revert_after_ms, 200);
}

#[test]
fn card_click_on_action_button_is_ignored() {
    assert_eq!(card_click_feedback(true), None);
}

// =============================================================
// Card hover
// =============================================================

#[test]
fn hover_enter_raises_stacking_order() {
    assert_eq!(card_hover_z_index(true), Some("10"));
}

#[test]
fn hover_leave_restores_stacking_order() {
    assert_eq!(card_hover_z_index(false), None);
}

// =============================================================
// Contact click
// =============================================================

#[test]
fn contact_click_pulses_scale_down() {
    let (pulse, _) = contact_click_feedback("Email");
    assert_eq!(pulse.transform, "scale(0.98)");
    assert_eq!(pulse.revert_after_ms, 150);
}

#[test]
fn contact_click_records_link_text() {
    let (_, line) = contact_click_feedback("GitHub");
    assert_eq!(line, "Contact link clicked: GitHub");
}

#[test]
fn contact_click_trims_whitespace_from_link_text() {
    let (_, line) = contact_click_feedback("  Email \n");
    assert_eq!(line, "Contact link clicked: Email");
}
