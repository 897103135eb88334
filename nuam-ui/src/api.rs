//! Browser transport for the indicator endpoint.

use gloo_net::http::Request;
use nuam_core::loader::SeriesSource;
use nuam_core::payload::RawResponse;

/// `fetch()`-backed [`SeriesSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSource;

impl SeriesSource for BrowserSource {
    async fn get(&self, url: &str) -> Result<RawResponse, String> {
        let response = Request::get(url).send().await.map_err(|e| e.to_string())?;

        let status = response.status();
        if !response.ok() {
            return Ok(RawResponse {
                status,
                body: String::new(),
            });
        }

        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(RawResponse { status, body })
    }
}
