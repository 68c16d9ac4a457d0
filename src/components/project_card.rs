//! Project showcase cards.

use leptos::prelude::*;

/// A card for one project. The image defers loading via `data-src` until
/// it scrolls into view; the `btn` link is excluded from card-level click
/// feedback.
#[component]
pub fn ProjectCard(
    name: &'static str,
    description: &'static str,
    image_src: &'static str,
    source_href: &'static str,
) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class="project-media">
                <img class="lazy" attr:data-src=image_src alt=name/>
            </div>
            <h3 class="project-card__name">{name}</h3>
            <p class="project-card__description">{description}</p>
            <div class="project-card__actions">
                <a class="btn" href=source_href target="_blank" rel="noreferrer">
                    "Source"
                </a>
            </div>
        </article>
    }
}
