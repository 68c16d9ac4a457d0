//! Transient transform application with a fire-and-forget revert.

use gloo_timers::callback::Timeout;

use crate::state::feedback::Pulse;

/// Apply a pulse transform and schedule its revert. If the element leaves
/// the page before the timer fires, the revert is a no-op against a
/// detached reference.
pub(crate) fn apply_pulse(element: &web_sys::HtmlElement, pulse: Pulse) {
    let _ = element.style().set_property("transform", pulse.transform);
    let element = element.clone();
    Timeout::new(pulse.revert_after_ms, move || {
        let _ = element.style().remove_property("transform");
    })
    .forget();
}
