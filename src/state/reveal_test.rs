use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_classes_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for role in Role::ALL {
        assert!(seen.insert(role.class()), "duplicate class for {role:?}");
    }
}

#[test]
fn role_selector_prefixes_class() {
    assert_eq!(Role::TimelineItem.selector(), ".timeline-item");
    assert_eq!(Role::HeroContent.selector(), ".hero-content");
    assert_eq!(Role::SectionTitle.selector(), ".section-title");
}

#[test]
fn role_all_covers_five_roles() {
    assert_eq!(Role::ALL.len(), 5);
}

// =============================================================
// RevealTracker
// =============================================================

#[test]
fn mark_is_true_exactly_once() {
    let mut tracker = RevealTracker::new();
    let key = (Role::ProjectCard, 0);
    assert!(tracker.mark(key));
    assert!(!tracker.mark(key));
    assert!(!tracker.mark(key));
}

#[test]
fn mark_tracks_keys_independently() {
    let mut tracker = RevealTracker::new();
    assert!(tracker.mark((Role::ProjectCard, 0)));
    assert!(tracker.mark((Role::ProjectCard, 1)));
    assert!(tracker.mark((Role::EducationCard, 0)));
    assert!(!tracker.mark((Role::ProjectCard, 0)));
}

#[test]
fn is_revealed_reflects_marks() {
    let mut tracker = RevealTracker::new();
    let key = (Role::HeroContent, 0);
    assert!(!tracker.is_revealed(key));
    tracker.mark(key);
    assert!(tracker.is_revealed(key));
}

// =============================================================
// Constants
// =============================================================

#[test]
fn reveal_threshold_is_ten_percent() {
    assert!((REVEAL_THRESHOLD - 0.1).abs() < f64::EPSILON);
}

#[test]
fn root_margin_shrinks_bottom_by_fifty_pixels() {
    assert_eq!(REVEAL_ROOT_MARGIN, "0px 0px -50px 0px");
}

#[test]
fn hero_delay_is_300ms() {
    assert_eq!(HERO_REVEAL_DELAY_MS, 300);
}
