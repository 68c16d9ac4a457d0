//! Smooth scrolling for in-page anchor navigation.
//!
//! Every anchor whose `href` is a fragment gets a click intercept: when
//! the fragment resolves to an element, default jump navigation is
//! cancelled and the viewport animates to the element's top. Unresolved
//! fragments fall through to the browser's default behavior.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Selector matching anchors that point at in-page fragments.
pub const ANCHOR_SELECTOR: &str = "a[href^='#']";

/// Intercepts same-page anchor clicks and performs smooth scrolling.
pub struct ScrollNavigator;

impl ScrollNavigator {
    /// Attach click intercepts to every in-page anchor currently on the
    /// page. No-op outside a browser.
    pub fn install() -> Self {
        #[cfg(feature = "csr")]
        Self::setup();
        Self
    }

    /// The element id a fragment href points at, if it names one.
    #[must_use]
    pub fn fragment_target(href: &str) -> Option<&str> {
        let target = href.strip_prefix('#')?;
        if target.is_empty() { None } else { Some(target) }
    }

    /// Smooth-scroll the viewport so the element with `element_id` sits
    /// `offset` pixels below the viewport top. Silently a no-op when the
    /// id does not resolve.
    pub fn scroll_to(element_id: &str, offset: f64) {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(element) = window.document().and_then(|d| d.get_element_by_id(element_id)) else {
                return;
            };
            let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
                return;
            };
            let options = web_sys::ScrollToOptions::new();
            options.set_top(f64::from(element.offset_top()) - offset);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (element_id, offset);
        }
    }

    #[cfg(feature = "csr")]
    fn setup() {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(links) = document.query_selector_all(ANCHOR_SELECTOR) else {
            return;
        };
        for i in 0..links.length() {
            let Some(link) = links.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let href = link.get_attribute("href").unwrap_or_default();
            let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                let Some(target_id) = Self::fragment_target(&href) else {
                    return;
                };
                let resolved = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(target_id))
                    .is_some();
                // Unresolved fragments fall through to default navigation.
                if resolved {
                    event.prevent_default();
                    Self::scroll_to(target_id, 0.0);
                }
            });
            let _ = link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            cb.forget();
        }
    }
}
