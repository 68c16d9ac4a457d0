//! Dark/light theme toggle button.

use leptos::prelude::*;

use crate::util::theme::SiteTheme;

/// A button that flips the theme preference. Reads the restored preference
/// from context; each click toggles, applies, and persists.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<SiteTheme>>();

    let on_toggle = move |_| theme.update(|pref| pref.toggle_theme());
    let label = move || if theme.get().is_dark() { "\u{263E}" } else { "\u{2600}" };

    view! {
        <button class="theme-toggle" title="Toggle theme" on:click=on_toggle>
            {label}
        </button>
    }
}
