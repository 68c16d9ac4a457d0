//! Diagnostic output sink and the page-load timer.
//!
//! DESIGN
//! ======
//! The page emits a handful of developer-facing lines (contact-link
//! clicks, page-load duration). They go through a sink trait rather than a
//! hard-coded console call so tests can capture them and future consumers
//! can be plugged in without touching the units.

#[cfg(test)]
#[path = "diag_test.rs"]
mod diag_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Destination for diagnostic lines. Not machine-parsed, not persisted.
pub trait DiagnosticsSink {
    fn record(&self, line: &str);
}

/// Production sink writing to the browser console via the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl DiagnosticsSink for ConsoleSink {
    fn record(&self, line: &str) {
        #[cfg(feature = "csr")]
        log::info!("{line}");
        #[cfg(not(feature = "csr"))]
        {
            let _ = line;
        }
    }
}

/// Capturing sink for tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines recorded so far, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl DiagnosticsSink for MemorySink {
    fn record(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}

/// Format the page-load line from a `performance.now()` reading.
#[must_use]
pub fn format_load_line(elapsed_ms: f64) -> String {
    format!("Page loaded in {}ms", elapsed_ms.round())
}

/// Record the elapsed time since navigation start once the page's `load`
/// event fires. No-op outside a browser.
pub fn install_load_timer(sink: Rc<dyn DiagnosticsSink>) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            if let Some(performance) = web_sys::window().and_then(|w| w.performance()) {
                sink.record(&format_load_line(performance.now()));
            }
        });
        let _ = window.add_event_listener_with_callback("load", cb.as_ref().unchecked_ref());
        // Listener lives for the page lifetime.
        cb.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = sink;
    }
}
