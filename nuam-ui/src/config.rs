//! Runtime configuration read from the browser.

use nuam_core::config::LoaderConfig;
use wasm_bindgen::JsCast;

/// localStorage key overriding the API origin (e.g. when the page is served
/// from a different host than the backend).
pub const API_BASE_STORAGE_KEY: &str = "nuam_api_base";

/// Cookie holding Django's CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Loader configuration, honouring a localStorage override when present.
pub fn loader_config() -> LoaderConfig {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten());
    match stored {
        Some(base) => {
            log::info!("Using API base from localStorage: {}", base);
            LoaderConfig::with_base(&base)
        }
        None => LoaderConfig::default(),
    }
}

/// Read the CSRF token cookie, if the page has one.
pub fn csrf_token() -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

/// Find `name` in a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; csrftoken=XyZ123; theme=dark";
        let token = cookie_value(cookies, "csrftoken");
        assert_eq!(token.as_deref(), Some("XyZ123"));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), None);
    }
}
