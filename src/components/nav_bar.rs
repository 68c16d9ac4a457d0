//! Top navigation with in-page section links.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

/// Site header: brand, section anchors, and the theme toggle. The anchors
/// are plain fragment links; smooth scrolling is attached by marker.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="site-nav">
            <a class="brand" href="#top">"JR"</a>
            <nav class="site-nav__links">
                <a href="#experience">"Experience"</a>
                <a href="#education">"Education"</a>
                <a href="#projects">"Projects"</a>
                <a href="#contact">"Contact"</a>
            </nav>
            <ThemeToggle/>
        </header>
    }
}
