//! Status line under the chart.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows loading, summary or error text; error text gets the `error` class.
#[component]
pub fn StatusText() -> Element {
    let state = use_context::<AppState>();
    let status = state.status.read().clone();

    rsx! {
        p {
            class: status.css_class(),
            "data-status": "",
            "{status.message}"
        }
    }
}
