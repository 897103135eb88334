//! Country and indicator pill groups bound to [`AppState`].

use super::PillButtons;
use crate::loader::maybe_load;
use crate::state::AppState;
use dioxus::prelude::*;

/// Country pills. Clicking one re-renders the indicator pills and auto-loads
/// the country's first indicator.
#[component]
pub fn CountryPills() -> Element {
    let state = use_context::<AppState>();
    let mut selector = state.selector;
    let group = selector.read().country_pills();

    rsx! {
        div {
            class: "pill-group",
            "data-pais-buttons": "",
            PillButtons {
                group,
                on_select: move |code: String| {
                    let request = selector.write().select_country(&code);
                    maybe_load(state, request);
                },
            }
        }
    }
}

/// Indicator pills for the selected country. Clicking one loads it.
#[component]
pub fn IndicatorPills() -> Element {
    let state = use_context::<AppState>();
    let mut selector = state.selector;
    let group = selector.read().indicator_pills();

    rsx! {
        div {
            class: "pill-group",
            "data-indicador-buttons": "",
            PillButtons {
                group,
                on_select: move |code: String| {
                    let request = selector.write().select_indicator(&code);
                    maybe_load(state, request);
                },
            }
        }
    }
}
