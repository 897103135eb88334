//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a page-level error in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "error-box",
            style: "padding: 12px 16px; margin: 8px 0; background: #1f2937; color: #fca5a5; border-radius: 4px; border: 1px solid #7f1d1d;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
