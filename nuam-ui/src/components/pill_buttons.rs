//! Exclusive toggle-button group.

use dioxus::prelude::*;
use nuam_core::selection::PillGroup;

#[derive(Props, Clone, PartialEq)]
pub struct PillButtonsProps {
    /// Pills to render, in order
    pub group: PillGroup,
    /// Called with the clicked pill's key
    pub on_select: EventHandler<String>,
}

/// A row of pills where at most one carries the `active` class.
#[component]
pub fn PillButtons(props: PillButtonsProps) -> Element {
    let on_select = props.on_select;
    let buttons = props.group.pills.into_iter().map(move |pill| {
        let class = if pill.active {
            "pill-btn active"
        } else {
            "pill-btn"
        };
        let key = pill.key.clone();
        rsx! {
            button {
                key: "{pill.key}",
                r#type: "button",
                class: "{class}",
                onclick: move |_| on_select.call(key.clone()),
                "{pill.label}"
            }
        }
    });

    rsx! {
        {buttons}
    }
}
