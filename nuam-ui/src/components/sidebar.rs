//! Sidebar with a visibility toggle.

use dioxus::prelude::*;
use nuam_core::sidebar::SidebarState;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarLayoutProps {
    /// Sidebar contents
    pub sidebar: Element,
    /// Main page contents
    pub children: Element,
}

/// Page layout whose toggle control flips the sidebar's `is-hidden` class.
#[component]
pub fn SidebarLayout(props: SidebarLayoutProps) -> Element {
    let mut sidebar = use_signal(SidebarState::default);
    let class = sidebar.read().class();

    rsx! {
        div {
            class: "layout",
            aside { class: "{class}", {props.sidebar} }
            main {
                class: "content",
                button {
                    r#type: "button",
                    class: "sidebar-toggle",
                    "data-toggle-sidebar": "",
                    onclick: move |_| sidebar.write().toggle(),
                    "☰"
                }
                {props.children}
            }
        }
    }
}
