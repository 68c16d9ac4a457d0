//! Education history cards.

use leptos::prelude::*;

/// A card for one degree or program.
#[component]
pub fn EducationCard(
    degree: &'static str,
    school: &'static str,
    years: &'static str,
    note: &'static str,
) -> impl IntoView {
    view! {
        <article class="education-card">
            <h3 class="education-card__degree">{degree}</h3>
            <span class="education-card__school">{school}</span>
            <span class="education-card__years">{years}</span>
            <p class="education-card__note">{note}</p>
        </article>
    }
}
