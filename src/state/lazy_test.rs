use super::*;

#[test]
fn mark_is_true_exactly_once_per_image() {
    let mut tracker = LazyTracker::new();
    assert!(tracker.mark(0));
    assert!(!tracker.mark(0));
    assert!(!tracker.mark(0));
}

#[test]
fn images_are_tracked_independently() {
    let mut tracker = LazyTracker::new();
    assert!(tracker.mark(0));
    assert!(tracker.mark(1));
    assert!(tracker.mark(2));
    assert!(!tracker.mark(1));
}

#[test]
fn marker_names_match_page_markup() {
    assert_eq!(DEFERRED_SRC_ATTR, "data-src");
    assert_eq!(LAZY_CLASS, "lazy");
}
