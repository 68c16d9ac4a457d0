//! Work-experience timeline entries.

use leptos::prelude::*;

/// One entry in the experience timeline.
#[component]
pub fn TimelineItem(
    period: &'static str,
    title: &'static str,
    organization: &'static str,
    summary: &'static str,
) -> impl IntoView {
    view! {
        <li class="timeline-item">
            <span class="timeline-item__period">{period}</span>
            <h3 class="timeline-item__title">{title}</h3>
            <span class="timeline-item__org">{organization}</span>
            <p class="timeline-item__summary">{summary}</p>
        </li>
    }
}
