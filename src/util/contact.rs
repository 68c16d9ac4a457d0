//! Click feedback and diagnostics for outbound contact links.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::rc::Rc;

use crate::util::diag::DiagnosticsSink;

/// Class marking outbound contact links.
pub const CONTACT_LINK_CLASS: &str = "contact-link";

/// Attaches click feedback and a diagnostic record to contact links.
pub struct ContactLinkTracker;

impl ContactLinkTracker {
    /// Attach handlers to every contact link on the page; each click plays
    /// a brief pulse and records the link's visible text through `sink`.
    /// No-op outside a browser.
    pub fn install(sink: Rc<dyn DiagnosticsSink>) -> Self {
        #[cfg(feature = "csr")]
        Self::setup(&sink);
        #[cfg(not(feature = "csr"))]
        {
            let _ = sink;
        }
        Self
    }

    #[cfg(feature = "csr")]
    fn setup(sink: &Rc<dyn DiagnosticsSink>) {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::state::feedback::contact_click_feedback;
        use crate::util::pulse::apply_pulse;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(links) = document.query_selector_all(&format!(".{CONTACT_LINK_CLASS}")) else {
            return;
        };
        for i in 0..links.length() {
            let Some(link) = links.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                continue;
            };
            let sink = Rc::clone(sink);
            let click_link = link.clone();
            let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                let text = click_link.text_content().unwrap_or_default();
                let (pulse, line) = contact_click_feedback(&text);
                apply_pulse(&click_link, pulse);
                sink.record(&line);
            });
            let _ = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }
    }
}
