//! Canvas the indicator chart draws on.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCanvasProps {
    /// DOM id of the canvas (Chart.js binds to it)
    pub id: String,
    #[props(default = 320)]
    pub height: u32,
}

/// Fixed-height wrapper so a non-aspect-locked Chart.js chart has room to draw.
#[component]
pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
    let style = format!(
        "position: relative; width: 100%; height: {}px;",
        props.height
    );

    rsx! {
        div {
            class: "chart-wrapper",
            style: "{style}",
            canvas { id: "{props.id}" }
        }
    }
}
