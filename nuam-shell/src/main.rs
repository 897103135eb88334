//! Base page layout: navigation sidebar plus a toggle to hide it.

use dioxus::prelude::*;
use nuam_ui::components::SidebarLayout;

/// Sidebar navigation entries (label, href).
const NAV_LINKS: [(&str, &str); 3] = [
    ("Inicio", "/"),
    ("Indicadores", "/indicadores/"),
    ("Calificaciones", "/calificaciones/"),
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("shell-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        SidebarLayout {
            sidebar: rsx! {
                nav {
                    ul {
                        for (label, href) in NAV_LINKS {
                            li { a { href: "{href}", "{label}" } }
                        }
                    }
                }
            },
            h1 { "NUAM" }
        }
    }
}
