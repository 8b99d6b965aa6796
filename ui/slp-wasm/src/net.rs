//! HTTP client.
//!
//! Wraps `gloo-net` so controllers get a `SiteError` instead of a raw JS
//! exception. No timeouts beyond the browser's own; no retries.

use gloo_net::http::Request;
use slp_core::SiteError;
use slp_core::form;
use web_sys::FormData;

fn network(url: &str, err: impl std::fmt::Display) -> SiteError {
    SiteError::Network {
        url: url.to_owned(),
        message: err.to_string(),
    }
}

/// GET `url` and return the body as text. Non-2xx is an error.
pub async fn fetch_text(url: &str) -> Result<String, SiteError> {
    let resp = Request::get(url).send().await.map_err(|e| network(url, e))?;
    if !resp.ok() {
        return Err(SiteError::Fetch {
            url: url.to_owned(),
            status: resp.status(),
        });
    }
    resp.text().await.map_err(|e| network(url, e))
}

/// POST form fields as multipart data. Only the status matters.
pub async fn post_form(url: &str, data: FormData) -> Result<(), SiteError> {
    let resp = Request::post(url)
        .body(data)
        .map_err(|e| network(url, e))?
        .send()
        .await
        .map_err(|e| network(url, e))?;
    form::classify(url, resp.status())
}
