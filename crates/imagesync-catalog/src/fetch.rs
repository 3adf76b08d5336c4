//! Catalog retrieval over HTTP(S).
//!
//! Certificate validation is disabled: the catalog is served from inside the
//! federation's own trust domain, whose CA is not in the system store.

use std::time::Duration;

use imagesync_common::error::{ImageSyncError, Result};

/// Downloads the raw catalog text from `url`.
///
/// # Errors
///
/// Returns `ImageSyncError::CatalogUnavailable` if the request fails, the
/// server answers with a non-success status, or the body is empty.
pub fn fetch_catalog(url: &str, timeout: Duration) -> Result<String> {
    tracing::debug!(url, ?timeout, "fetching catalog without certificate validation");

    let client = reqwest::blocking::Client::builder()
        .danger_accept_invalid_certs(true)
        .timeout(timeout)
        .build()
        .map_err(|e| unavailable(url, format!("failed to build HTTP client: {e}")))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| unavailable(url, format!("request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(unavailable(url, format!("HTTP {}", response.status())));
    }

    let body = response
        .text()
        .map_err(|e| unavailable(url, format!("failed to read response body: {e}")))?;
    check_body(url, body)
}

/// Rejects a body that carries no content.
fn check_body(url: &str, body: String) -> Result<String> {
    if body.trim().is_empty() {
        return Err(unavailable(url, "empty response body"));
    }
    tracing::info!(url, bytes = body.len(), "catalog downloaded");
    Ok(body)
}

fn unavailable(url: &str, message: impl Into<String>) -> ImageSyncError {
    ImageSyncError::CatalogUnavailable {
        url: url.to_string(),
        message: message.into(),
    }
}
