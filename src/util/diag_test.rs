#![cfg(not(feature = "csr"))]

use std::rc::Rc;

use super::*;

// =============================================================
// Sinks
// =============================================================

#[test]
fn memory_sink_records_lines_in_order() {
    let sink = MemorySink::new();
    sink.record("first");
    sink.record("second");
    assert_eq!(sink.lines(), vec!["first".to_owned(), "second".to_owned()]);
}

#[test]
fn console_sink_is_noop_but_callable_natively() {
    ConsoleSink.record("Page loaded in 42ms");
}

// =============================================================
// Load line formatting
// =============================================================

#[test]
fn load_line_rounds_to_whole_milliseconds() {
    assert_eq!(format_load_line(123.4), "Page loaded in 123ms");
    assert_eq!(format_load_line(123.6), "Page loaded in 124ms");
}

#[test]
fn load_line_handles_zero() {
    assert_eq!(format_load_line(0.0), "Page loaded in 0ms");
}

// =============================================================
// Load timer (native fallback)
// =============================================================

#[test]
fn install_load_timer_is_noop_without_a_browser() {
    let sink = MemorySink::new();
    install_load_timer(Rc::new(sink.clone()));
    assert!(sink.lines().is_empty());
}
