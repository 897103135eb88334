//! Login page.
//!
//! Renders the login form. Blank username or password blocks the POST; a
//! valid submission disables the button until the browser navigates.

use dioxus::prelude::*;
use nuam_ui::components::LoginForm;
use nuam_ui::config;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("login-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let csrf_token = use_hook(|| {
        config::csrf_token().unwrap_or_else(|| {
            log::warn!("No CSRF cookie found; the server may reject the login POST");
            String::new()
        })
    });

    rsx! {
        div {
            class: "login-card",
            h2 { "Iniciar sesión" }
            LoginForm { csrf_token }
        }
    }
}
