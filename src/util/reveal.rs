//! Scroll-triggered entrance animations.
//!
//! Setup injects the transition stylesheet, builds the role registry once,
//! and registers one intersection watcher over every element carrying a
//! presentation-role marker. Revealing is one-directional: an element that
//! has played its entrance never replays it on scroll-back. The hero block
//! additionally reveals on a short timer, since the watcher may never fire
//! for a block that is already on-screen at load.

#[cfg(feature = "csr")]
use crate::state::reveal::Role;

/// Stylesheet rules injected at setup. Elements start hidden and slide or
/// fade in when the `animate-in` marker is added.
pub const REVEAL_CSS: &str = "
.timeline-item,
.education-card,
.project-card,
.hero-content,
.section-title {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}

.animate-in {
    opacity: 1;
    transform: translateY(0);
}

.timeline-item.animate-in {
    animation: slide-in-left 0.6s ease-out forwards;
}

.education-card.animate-in,
.project-card.animate-in {
    animation: fade-in-up 0.6s ease-out forwards;
}

@keyframes slide-in-left {
    from { opacity: 0; transform: translateX(-50px); }
    to { opacity: 1; transform: translateX(0); }
}

@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}

.project-card {
    cursor: pointer;
}

.project-card:hover .project-media {
    transform: scale(1.1);
    transition: transform 0.3s ease;
}

.contact-link:hover {
    transform: scale(1.1);
    transition: transform 0.2s ease;
}
";

/// Applies entrance animations to elements as they scroll into view.
pub struct RevealAnimator;

impl RevealAnimator {
    /// Inject the stylesheet and start watching every element with a
    /// presentation-role marker. No-op outside a browser.
    pub fn install() -> Self {
        #[cfg(feature = "csr")]
        Self::setup();
        Self
    }

    #[cfg(feature = "csr")]
    fn setup() {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::Timeout;

        use crate::state::reveal::{
            HERO_REVEAL_DELAY_MS, REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, RevealTracker,
        };
        use crate::util::intersection::IntersectionWatcher;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        inject_styles(&document);

        let registry = build_registry(&document);
        let tracker = Rc::new(RefCell::new(RevealTracker::new()));

        let lookup = registry.clone();
        let watcher_tracker = Rc::clone(&tracker);
        let watcher = IntersectionWatcher::new(
            Some(REVEAL_THRESHOLD),
            Some(REVEAL_ROOT_MARGIN),
            move |target, _observer| {
                let Some(key) = position_of(&lookup, &target) else {
                    return;
                };
                if watcher_tracker.borrow_mut().mark(key) {
                    let _ = target.class_list().add_1(REVEAL_CLASS);
                }
            },
        );
        if let Some(watcher) = watcher {
            for (_, _, element) in &registry {
                watcher.observe(element);
            }
        }

        // The watcher may not fire for a hero that is already visible at
        // load, so the hero entrance is guaranteed on a timer.
        let hero = registry
            .iter()
            .find(|(role, _, _)| *role == Role::HeroContent)
            .map(|(role, index, element)| ((*role, *index), element.clone()));
        if let Some((key, element)) = hero {
            let hero_tracker = Rc::clone(&tracker);
            Timeout::new(HERO_REVEAL_DELAY_MS, move || {
                hero_tracker.borrow_mut().mark(key);
                let _ = element.class_list().add_1(REVEAL_CLASS);
            })
            .forget();
        }
    }
}

/// One registry entry per element carrying a role marker, built once at
/// setup so behaviors are data-driven rather than re-querying per event.
#[cfg(feature = "csr")]
fn build_registry(document: &web_sys::Document) -> Vec<(Role, usize, web_sys::Element)> {
    use wasm_bindgen::JsCast;

    let mut registry = Vec::new();
    let mut index = 0;
    for role in Role::ALL {
        let Ok(nodes) = document.query_selector_all(&role.selector()) else {
            continue;
        };
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                registry.push((role, index, element));
                index += 1;
            }
        }
    }
    registry
}

#[cfg(feature = "csr")]
fn position_of(
    registry: &[(Role, usize, web_sys::Element)],
    target: &web_sys::Element,
) -> Option<(Role, usize)> {
    registry
        .iter()
        .find(|(_, _, element)| element == target)
        .map(|(role, index, _)| (*role, *index))
}

#[cfg(feature = "csr")]
fn inject_styles(document: &web_sys::Document) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(REVEAL_CSS));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}
