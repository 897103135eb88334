//! Fire-and-forget indicator loads bound to [`AppState`].

use crate::api::BrowserSource;
use crate::state::AppState;
use dioxus::prelude::*;
use nuam_core::loader::fetch_series;
use nuam_core::selection::LoadRequest;
use nuam_core::status::StatusLine;

/// Start loading `request`. Returns immediately; the chart and status line
/// are updated when the response arrives, unless a newer load was started
/// in the meantime.
pub fn spawn_load(mut state: AppState, request: LoadRequest) {
    let pending = state.loader.write().begin(request);
    state.status.set(StatusLine::loading());

    spawn(async move {
        let outcome = fetch_series(&BrowserSource, &pending.url).await;
        let status = {
            let mut chart = state.chart.write();
            state.loader.write().apply(pending.ticket, outcome, &mut *chart)
        };
        if let Some(status) = status {
            state.status.set(status);
        }
    });
}

/// Apply a selection change: load when the selector asks for it.
pub fn maybe_load(state: AppState, request: Option<LoadRequest>) {
    if let Some(request) = request {
        spawn_load(state, request);
    }
}
