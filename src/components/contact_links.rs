//! Outbound contact links.

use leptos::prelude::*;

/// Row of contact links. Click feedback and the diagnostic record are
/// attached by the `contact-link` marker.
#[component]
pub fn ContactLinks() -> impl IntoView {
    view! {
        <div class="contact-row">
            <a class="contact-link" href="mailto:jordan@jordanreyes.dev">
                "Email"
            </a>
            <a class="contact-link" href="https://github.com/jordanreyes" target="_blank" rel="noreferrer">
                "GitHub"
            </a>
            <a class="contact-link" href="https://www.linkedin.com/in/jordanreyes" target="_blank" rel="noreferrer">
                "LinkedIn"
            </a>
        </div>
    }
}
