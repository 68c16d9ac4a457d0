#![cfg(not(feature = "csr"))]

use std::rc::Rc;

use super::*;
use crate::util::diag::MemorySink;

#[test]
fn install_is_noop_without_a_browser() {
    let sink = MemorySink::new();
    let _loader = LazyImageLoader::install(Rc::new(sink.clone()));
    assert!(sink.lines().is_empty());
}
