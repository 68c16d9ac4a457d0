//! Hover and click feedback for project cards.
//!
//! Each card is handled independently: a click anywhere except a nested
//! action button plays a brief scale-up pulse, and pointer enter/leave
//! raises/restores the card's stacking order. No state persists between
//! interactions.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

/// Attaches hover/click visual feedback to every project card.
pub struct CardInteractionManager;

impl CardInteractionManager {
    /// Attach feedback handlers to every project card on the page.
    /// No-op outside a browser.
    pub fn install() -> Self {
        #[cfg(feature = "csr")]
        Self::setup();
        Self
    }

    #[cfg(feature = "csr")]
    fn setup() {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::state::feedback::{ACTION_CLASS, card_click_feedback, card_hover_z_index};
        use crate::state::reveal::Role;
        use crate::util::pulse::apply_pulse;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(cards) = document.query_selector_all(&Role::ProjectCard.selector()) else {
            return;
        };
        for i in 0..cards.length() {
            let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                continue;
            };

            let click_card = card.clone();
            let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                let on_action = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .is_some_and(|el| el.class_list().contains(ACTION_CLASS));
                if let Some(pulse) = card_click_feedback(on_action) {
                    apply_pulse(&click_card, pulse);
                }
            });
            let _ = card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();

            let enter_card = card.clone();
            let on_enter = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                set_z_index(&enter_card, card_hover_z_index(true));
            });
            let _ =
                card.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref());
            on_enter.forget();

            let leave_card = card.clone();
            let on_leave = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                set_z_index(&leave_card, card_hover_z_index(false));
            });
            let _ =
                card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
            on_leave.forget();
        }
    }
}

#[cfg(feature = "csr")]
fn set_z_index(card: &web_sys::HtmlElement, value: Option<&str>) {
    match value {
        Some(z) => {
            let _ = card.style().set_property("z-index", z);
        }
        None => {
            let _ = card.style().remove_property("z-index");
        }
    }
}
