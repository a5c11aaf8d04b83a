//! HTTP API Client
//!
//! Fetches the metrics document from the dashboard backend.

use gloo_net::http::Request;
use statboard::client::FetchError;
use statboard::metrics::MetricsDocument;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

const API_URL_KEY: &str = "statboard_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Fetch the composite metrics document. Single attempt, no retry.
pub async fn fetch_dashboard_data() -> Result<MetricsDocument, FetchError> {
    let url = format!("{}/dashboard", get_api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ApiError>()
            .await
            .ok()
            .and_then(|body| body.error.or(body.message))
            .unwrap_or_else(|| response.status_text());
        return Err(FetchError::Status { status, message });
    }

    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}
