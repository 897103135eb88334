//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the landing page's signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::js_bridge::ChartJsSurface;
use dioxus::prelude::*;
use nuam_core::chart::ChartController;
use nuam_core::config::LoaderConfig;
use nuam_core::loader::IndicatorLoader;
use nuam_core::selection::SelectorController;
use nuam_core::status::StatusLine;

/// DOM id of the indicator chart canvas.
pub const CHART_CANVAS_ID: &str = "indicadorChart";

/// Shared state for the indicators landing page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Catalog and current country/indicator
    pub selector: Signal<SelectorController>,
    /// Endpoint config and request sequencing
    pub loader: Signal<IndicatorLoader>,
    /// Text under the chart
    pub status: Signal<StatusLine>,
    /// The single chart widget
    pub chart: Signal<ChartController<ChartJsSurface>>,
}

impl AppState {
    pub fn new(selector: SelectorController, config: LoaderConfig) -> Self {
        Self {
            selector: Signal::new(selector),
            loader: Signal::new(IndicatorLoader::new(config)),
            status: Signal::new(StatusLine::loading()),
            chart: Signal::new(ChartController::new(ChartJsSurface::new(CHART_CANVAS_ID))),
        }
    }
}
