//! HTTP plumbing: base URL resolution, client construction, and
//! request/response journaling.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use tracing::debug;

use crate::client::ClientError;

/// Environment variable that overrides the backend base URL.
pub const BASE_URL_ENV: &str = "GEMDECK_API_URL";

/// Address used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8800/api";

/// Path prefix every backend route hangs off.
const API_SUFFIX: &str = "/api";

/// Ceiling applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Resolve the base URL from an optional override.
///
/// A set, non-blank override is used with the `/api` suffix appended exactly
/// once; anything else falls back to [`DEFAULT_BASE_URL`] verbatim. Callers
/// resolve once at client construction, never per request.
pub fn resolve_base_url(override_url: Option<&str>) -> String {
    match override_url.map(str::trim) {
        Some(url) if !url.is_empty() => {
            let url = url.trim_end_matches('/');
            if url.ends_with(API_SUFFIX) {
                url.to_string()
            } else {
                format!("{url}{API_SUFFIX}")
            }
        }
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Build the configured HTTP client shared by all pages: JSON content type by
/// default and a fixed request ceiling.
pub(crate) fn build_http_client() -> Result<reqwest::Client, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(ClientError::from)
}

/// Extension trait for RequestBuilder that logs the request body.
pub(crate) trait RequestBuilderExt {
    /// Set the JSON request body and log it. Returns the builder for chaining.
    fn json_logged<T: serde::Serialize + ?Sized>(self, json: &T) -> Self;
}

impl RequestBuilderExt for reqwest::RequestBuilder {
    fn json_logged<T: serde::Serialize + ?Sized>(self, json: &T) -> Self {
        if let Ok(body) = serde_json::to_string_pretty(json) {
            debug!("backend request body ({} bytes):\n{}", body.len(), body);
        }

        self.json(json)
    }
}

/// Error envelope the backend attaches to non-success responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    detail: Option<String>,
    message: Option<String>,
}

/// Log the response, then decode it: success bodies parse into `T`, failure
/// bodies into [`ClientError::Server`] via the error envelope.
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if let Ok(text) = std::str::from_utf8(&bytes) {
        debug!(status = %status, "backend response ({} bytes):\n{}", text.len(), text);
    }

    if !status.is_success() {
        let envelope: ErrorEnvelope = serde_json::from_slice(&bytes).unwrap_or_default();
        return Err(ClientError::Server {
            status,
            detail: envelope.detail,
            message: envelope.message,
        });
    }

    serde_json::from_slice(&bytes).map_err(ClientError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_gets_suffix_appended_once() {
        assert_eq!(
            resolve_base_url(Some("http://backend.example.com")),
            "http://backend.example.com/api"
        );
    }

    #[test]
    fn test_suffixed_override_left_alone() {
        assert_eq!(
            resolve_base_url(Some("http://backend.example.com/api")),
            "http://backend.example.com/api"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        assert_eq!(
            resolve_base_url(Some("http://backend.example.com/")),
            "http://backend.example.com/api"
        );
    }

    #[test]
    fn test_missing_override_uses_default() {
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_blank_override_uses_default() {
        assert_eq!(resolve_base_url(Some("")), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some("   ")), DEFAULT_BASE_URL);
    }
}
