//! Root application component and interactivity installation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` restores the theme preference, provides it as context, renders
//! the page, and installs the interactivity units exactly once after
//! mount. The units are independent of each other and of the component
//! tree: they find their targets by marker class.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::pages::portfolio::PortfolioPage;
use crate::util::storage::BrowserStore;
use crate::util::theme::ThemePreference;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Restore the saved theme before the page body first paints.
    let theme = RwSignal::new(ThemePreference::restore(BrowserStore));
    provide_context(theme);

    install_interactivity();

    view! {
        <Stylesheet id="portfolio" href="/portfolio.css"/>
        <Title text="Jordan Reyes"/>
        <PortfolioPage/>
    }
}

/// Install the interactivity units once the page is mounted. Each unit's
/// setup is synchronous; everything they register fires later, driven by
/// user interaction or scrolling.
fn install_interactivity() {
    #[cfg(feature = "csr")]
    {
        use std::rc::Rc;

        use crate::util::cards::CardInteractionManager;
        use crate::util::contact::ContactLinkTracker;
        use crate::util::diag::{ConsoleSink, DiagnosticsSink};
        use crate::util::lazy::LazyImageLoader;
        use crate::util::reveal::RevealAnimator;
        use crate::util::scroll::ScrollNavigator;

        Effect::new(move || {
            let sink: Rc<dyn DiagnosticsSink> = Rc::new(ConsoleSink);
            ScrollNavigator::install();
            RevealAnimator::install();
            CardInteractionManager::install();
            ContactLinkTracker::install(Rc::clone(&sink));
            LazyImageLoader::install(sink);
        });
    }
}
