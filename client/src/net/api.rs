//! Catalog API helpers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `FetchError::Unavailable`, since the catalog is only
//! requested from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed request leaves
//! an error on the page without crashing hydration. Requests are single
//! best-effort attempts with no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SystemView, SystemsDocument};

/// Catalog origin used when `SALDO_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "https://api.saldo.com.ar";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("catalog responded with status {0}")]
    Status(u16),
    #[error("invalid catalog payload: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Catalog API origin without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("SALDO_API_BASE").unwrap_or(DEFAULT_API_BASE).trim_end_matches('/')
}

pub fn systems_endpoint(base: &str) -> String {
    format!("{base}/v3/systems")
}

pub fn system_image_url(base: &str, system_id: &str) -> String {
    format!("{base}/img/sistemas2/{system_id}.big.webp")
}

/// Decode a catalog response body into view models, preserving order.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not a systems document.
pub fn parse_systems_document(body: &str, base: &str) -> Result<Vec<SystemView>, FetchError> {
    let doc: SystemsDocument = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(doc
        .data
        .into_iter()
        .map(|system| {
            let image_url = system_image_url(base, &system.id);
            SystemView::new(system, image_url)
        })
        .collect())
}

/// Fetch the systems catalog from `GET /v3/systems`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// cannot be decoded.
pub async fn fetch_systems() -> Result<Vec<SystemView>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let base = api_base();
        let resp = gloo_net::http::Request::get(&systems_endpoint(base))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        let systems = parse_systems_document(&body, base)?;
        log::debug!("loaded {} systems", systems.len());
        Ok(systems)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}
