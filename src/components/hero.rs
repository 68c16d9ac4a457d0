//! Hero banner introducing the site owner.

use leptos::prelude::*;

/// Full-width hero section. The `hero-content` block plays a guaranteed
/// entrance animation shortly after load.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="hero">
            <div class="hero-content">
                <h1 class="hero-name">"Jordan Reyes"</h1>
                <p class="hero-tagline">
                    "Systems-minded web developer. I build small, fast tools and the occasional odd instrument."
                </p>
                <a class="btn" href="#projects">"See my work"</a>
            </div>
        </section>
    }
}
