//! Thin wrapper over the browser's viewport-intersection observer.
//!
//! The callback fires once per entry that crosses into view and receives
//! the target element plus the underlying observer, so callers that fire
//! at most once per element can unobserve from inside the callback.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// A viewport-visibility watcher for a set of registered elements.
pub struct IntersectionWatcher {
    observer: web_sys::IntersectionObserver,
}

impl IntersectionWatcher {
    /// Create a watcher. `threshold` and `root_margin` fall back to the
    /// browser defaults when `None`. Returns `None` outside a browser or
    /// if observer construction is rejected.
    pub fn new<F>(threshold: Option<f64>, root_margin: Option<&str>, mut on_enter: F) -> Option<Self>
    where
        F: FnMut(web_sys::Element, &web_sys::IntersectionObserver) + 'static,
    {
        let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_enter(entry.target(), &observer);
                    }
                }
            },
        );

        let observer = if threshold.is_some() || root_margin.is_some() {
            let init = web_sys::IntersectionObserverInit::new();
            if let Some(threshold) = threshold {
                init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
            }
            if let Some(margin) = root_margin {
                init.set_root_margin(margin);
            }
            web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init).ok()?
        } else {
            web_sys::IntersectionObserver::new(cb.as_ref().unchecked_ref()).ok()?
        };

        // Callback lives for the page lifetime.
        cb.forget();
        Some(Self { observer })
    }

    pub fn observe(&self, element: &web_sys::Element) {
        self.observer.observe(element);
    }
}
