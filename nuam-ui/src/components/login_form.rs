//! Login form with presence validation and double-submit protection.

use dioxus::prelude::*;
use nuam_core::form_guard::{Field, FormGuard, LoginFields, SubmitDecision};
use wasm_bindgen::JsCast;

const FORM_ID: &str = "login-form";
const FLAGGED_STYLE: &str = "border-color: red;";

#[derive(Props, Clone, PartialEq)]
pub struct LoginFormProps {
    /// Form `action`; empty posts back to the current URL
    #[props(default = String::new())]
    pub action: String,
    /// Django CSRF token, sent as `csrfmiddlewaretoken` when non-empty
    #[props(default = String::new())]
    pub csrf_token: String,
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Hand the form to the browser for a regular POST. `submit()` does not fire
/// another submit event, so the guard is not re-entered.
fn submit_native(form_id: &str) {
    let form = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(form_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok());
    match form {
        Some(form) => {
            if let Err(e) = form.submit() {
                log::error!("Login form submit failed: {:?}", e);
            }
        }
        None => log::error!("Login form #{} not found", form_id),
    }
}

/// Username/password form. Blank fields block submission, get a red border
/// and are listed in an alert; a valid submission disables the button.
#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut guard = use_signal(FormGuard::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let fields = LoginFields {
            username: username(),
            password: password(),
        };
        let decision = guard.write().submit(&fields);
        match decision {
            SubmitDecision::Proceed => {
                log::info!("Login form valid, submitting");
                submit_native(FORM_ID);
            }
            SubmitDecision::Block(violations) => {
                log::warn!("Login form blocked: {} rule(s) violated", violations.len());
                alert(&violations.message());
            }
            SubmitDecision::AlreadySubmitting => {}
        }
    };

    let current = guard.read().clone();
    let username_style = if current.is_flagged(Field::Username) {
        FLAGGED_STYLE
    } else {
        ""
    };
    let password_style = if current.is_flagged(Field::Password) {
        FLAGGED_STYLE
    } else {
        ""
    };
    let button = current.button();
    let button_label = button.label();

    rsx! {
        form {
            id: FORM_ID,
            method: "post",
            action: "{props.action}",
            onsubmit: on_submit,
            if !props.csrf_token.is_empty() {
                input { r#type: "hidden", name: "csrfmiddlewaretoken", value: "{props.csrf_token}" }
            }
            label {
                r#for: "username",
                "Usuario"
            }
            input {
                id: "username",
                name: "username",
                r#type: "text",
                autocomplete: "username",
                style: "{username_style}",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            label {
                r#for: "password",
                "Contraseña"
            }
            input {
                id: "password",
                name: "password",
                r#type: "password",
                autocomplete: "current-password",
                style: "{password_style}",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            button {
                r#type: "submit",
                disabled: button.disabled(),
                "{button_label}"
            }
        }
    }
}
