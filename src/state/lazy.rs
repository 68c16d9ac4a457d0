//! Once-only bookkeeping for deferred image loading.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

use std::collections::HashSet;

/// Attribute holding the real image location until the image is near-visible.
pub const DEFERRED_SRC_ATTR: &str = "data-src";

/// Class marking an image as not yet loaded; removed once the source swaps.
pub const LAZY_CLASS: &str = "lazy";

/// Records which images have already had their source swapped in, so each
/// image is processed at most once regardless of later visibility changes.
#[derive(Debug, Default)]
pub struct LazyTracker {
    loaded: HashSet<usize>,
}

impl LazyTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an image (by registry index) as loaded. Returns `true` the
    /// first time only.
    pub fn mark(&mut self, index: usize) -> bool {
        self.loaded.insert(index)
    }
}
