//! Economic indicators landing page.
//!
//! Data flow:
//! 1. The country/indicator catalog is embedded in `nuam-core` at compile time.
//! 2. On mount: install the Chart.js glue, select the default country and
//!    load its first indicator.
//! 3. Country click: re-render indicator pills and load the first indicator.
//!    Indicator click: load that indicator.
//! 4. Each load GETs `/api/indicador/{country}/{indicator}/`; only the most
//!    recent request may update the chart and status line.

use dioxus::prelude::*;
use nuam_core::catalog::Catalog;
use nuam_core::selection::SelectorController;
use nuam_ui::components::{ChartCanvas, CountryPills, ErrorDisplay, IndicatorPills, StatusText};
use nuam_ui::loader::maybe_load;
use nuam_ui::state::{AppState, CHART_CANVAS_ID};
use nuam_ui::{config, js_bridge};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("landing-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let catalog = use_hook(|| Catalog::embedded().map_err(|e| e.to_string()));

    match catalog {
        Ok(catalog) => rsx! { Landing { catalog } },
        Err(err) => {
            log::error!("Failed to load indicator catalog: {}", err);
            rsx! { ErrorDisplay { message: err } }
        }
    }
}

#[component]
fn Landing(catalog: Catalog) -> Element {
    let state = use_context_provider(|| {
        let selector = SelectorController::new(catalog.clone());
        AppState::new(selector, config::loader_config())
    });

    // ─── Mount: chart glue + initial auto-load ───
    use_effect(move || {
        js_bridge::init_charts();
        let mut selector = state.selector;
        let request = selector.write().start();
        maybe_load(state, request);
    });

    rsx! {
        section {
            class: "indicadores",
            h2 { "Indicadores económicos" }
            p {
                class: "subtitle",
                "Seleccione un país y un indicador para ver su evolución reciente."
            }
            CountryPills {}
            IndicatorPills {}
            ChartCanvas { id: CHART_CANVAS_ID.to_string() }
            StatusText {}
        }
    }
}
