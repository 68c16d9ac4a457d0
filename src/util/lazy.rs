//! Deferred image loading and the page-load timer.
//!
//! Images marked with a deferred-source attribute keep a placeholder until
//! they scroll near the viewport, at which point the real source is
//! swapped in exactly once and the image is dropped from observation.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

use std::rc::Rc;

use crate::util::diag::DiagnosticsSink;

/// Defers image source assignment until the image scrolls into view, and
/// records the page-load duration once the `load` event fires.
pub struct LazyImageLoader;

impl LazyImageLoader {
    /// Start watching every deferred image and install the load timer.
    /// No-op outside a browser.
    pub fn install(sink: Rc<dyn DiagnosticsSink>) -> Self {
        #[cfg(feature = "csr")]
        Self::setup(sink);
        #[cfg(not(feature = "csr"))]
        {
            let _ = sink;
        }
        Self
    }

    #[cfg(feature = "csr")]
    fn setup(sink: Rc<dyn DiagnosticsSink>) {
        use std::cell::RefCell;

        use wasm_bindgen::JsCast;

        use crate::state::lazy::{DEFERRED_SRC_ATTR, LAZY_CLASS, LazyTracker};
        use crate::util::diag::install_load_timer;
        use crate::util::intersection::IntersectionWatcher;

        install_load_timer(sink);

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(&format!("img[{DEFERRED_SRC_ATTR}]")) else {
            return;
        };
        let mut images = Vec::new();
        for i in 0..nodes.length() {
            if let Some(image) =
                nodes.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlImageElement>().ok())
            {
                images.push(image);
            }
        }

        let tracker = RefCell::new(LazyTracker::new());
        let lookup = images.clone();
        let watcher = IntersectionWatcher::new(None, None, move |target, observer| {
            let Ok(target) = target.dyn_into::<web_sys::HtmlImageElement>() else {
                return;
            };
            let Some(index) = lookup.iter().position(|image| image == &target) else {
                return;
            };
            if !tracker.borrow_mut().mark(index) {
                return;
            }
            let image = &lookup[index];
            if let Some(src) = image.get_attribute(DEFERRED_SRC_ATTR) {
                image.set_src(&src);
            }
            let _ = image.class_list().remove_1(LAZY_CLASS);
            observer.unobserve(image);
        });
        if let Some(watcher) = watcher {
            for image in &images {
                watcher.observe(image);
            }
        }
    }
}
