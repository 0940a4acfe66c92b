//! Backend client and error types.

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::http::{self, read_json, RequestBuilderExt};

/// Message shown when no response was received at all.
pub const NO_RESPONSE_MESSAGE: &str =
    "サーバーに接続できませんでした。バックエンドが起動しているか確認してください。";
/// Last-resort message when nothing more specific is available.
pub const GENERIC_FAILURE_MESSAGE: &str = "エラーが発生しました";

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required field failed local validation; no request was issued.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request could not be constructed or sent.
    #[error("request error: {0}")]
    Request(String),

    /// No response arrived within the request ceiling.
    #[error("request timed out")]
    Timeout,

    /// The backend could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The backend answered with a non-success status.
    #[error("server error ({status})")]
    Server {
        status: StatusCode,
        /// FastAPI-style `detail` field from the error envelope, if any.
        detail: Option<String>,
        /// Generic `message` field from the error envelope, if any.
        message: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Collapse any failure into the one string shown to the user.
    ///
    /// Ordered fallback: server detail, server message, status-derived text,
    /// connectivity text, generic text. Raw error objects are never rendered.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(message) | ClientError::Request(message) => message.clone(),
            ClientError::Server {
                status,
                detail,
                message,
            } => detail
                .clone()
                .or_else(|| message.clone())
                .unwrap_or_else(|| format!("サーバーエラー: {status}")),
            ClientError::Timeout | ClientError::Connection(_) => NO_RESPONSE_MESSAGE.to_string(),
            ClientError::Parse(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_builder() {
            ClientError::Request(err.to_string())
        } else {
            // Everything else means no usable response: refused connections,
            // dropped sockets, bodies cut off mid-read.
            ClientError::Connection(err.to_string())
        }
    }
}

/// Client for the demo backend, shared by every page.
///
/// Construction resolves the base URL once; the instance is stateless beyond
/// its fixed configuration and cheap to clone (`reqwest::Client` is
/// reference-counted internally), so pages need no locking around it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against an explicit base URL.
    ///
    /// The `/api` suffix is appended if not already present.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        Self::with_resolved(http::resolve_base_url(Some(base_url.as_ref())))
    }

    /// Build a client from the `GEMDECK_API_URL` environment variable,
    /// falling back to the local default when it is unset or blank.
    pub fn from_env() -> Result<Self, ClientError> {
        let override_url = std::env::var(http::BASE_URL_ENV).ok();
        Self::with_resolved(http::resolve_base_url(override_url.as_deref()))
    }

    fn with_resolved(base_url: String) -> Result<Self, ClientError> {
        debug!(base_url = %base_url, "resolved backend base URL");
        Ok(Self {
            http: http::build_http_client()?,
            base_url,
        })
    }

    /// The resolved base URL every relative path is joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a JSON POST to `path` and decode the JSON response.
    pub(crate) async fn post_json<Req, Resp>(
        &self,
        path: &str,
        payload: &Req,
    ) -> Result<Resp, ClientError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = "POST", path, url = %url, "issuing backend request");
        let response = self.http.post(&url).json_logged(payload).send().await?;
        read_json(response).await
    }

    /// Issue a multipart POST to `path` and decode the JSON response.
    ///
    /// reqwest replaces the default JSON content type with its own
    /// `multipart/form-data` boundary here.
    pub(crate) async fn post_multipart<Resp>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Resp, ClientError>
    where
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = "POST", path, url = %url, "issuing multipart backend request");
        let response = self.http.post(&url).multipart(form).send().await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap();
        let previous = std::env::var(http::BASE_URL_ENV).ok();
        match value {
            Some(value) => std::env::set_var(http::BASE_URL_ENV, value),
            None => std::env::remove_var(http::BASE_URL_ENV),
        }
        let result = f();
        match previous {
            Some(previous) => std::env::set_var(http::BASE_URL_ENV, previous),
            None => std::env::remove_var(http::BASE_URL_ENV),
        }
        result
    }

    #[test]
    fn test_detail_shown_verbatim() {
        let err = ClientError::Server {
            status: StatusCode::BAD_REQUEST,
            detail: Some("モデルがサポートされていません".to_string()),
            message: Some("bad request".to_string()),
        };
        assert_eq!(err.user_message(), "モデルがサポートされていません");
    }

    #[test]
    fn test_message_used_when_detail_absent() {
        let err = ClientError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: None,
            message: Some("internal failure".to_string()),
        };
        assert_eq!(err.user_message(), "internal failure");
    }

    #[test]
    fn test_status_text_when_envelope_empty() {
        let err = ClientError::Server {
            status: StatusCode::SERVICE_UNAVAILABLE,
            detail: None,
            message: None,
        };
        assert_eq!(err.user_message(), "サーバーエラー: 503 Service Unavailable");
    }

    #[test]
    fn test_connectivity_message_for_timeout_and_connect() {
        assert_eq!(ClientError::Timeout.user_message(), NO_RESPONSE_MESSAGE);
        let err = ClientError::Connection("refused".to_string());
        assert_eq!(err.user_message(), NO_RESPONSE_MESSAGE);
    }

    #[test]
    fn test_generic_fallback_for_parse_errors() {
        let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(
            ClientError::Parse(parse).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = ClientError::Validation("プロンプトを入力してください".to_string());
        assert_eq!(err.user_message(), "プロンプトを入力してください");
    }

    #[test]
    fn test_new_appends_api_suffix() {
        let client = ApiClient::new("http://localhost:9000").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/api");
    }

    #[test]
    fn test_from_env_uses_override() {
        with_env(Some("http://backend.example.com"), || {
            let client = ApiClient::from_env().unwrap();
            assert_eq!(client.base_url(), "http://backend.example.com/api");
        });
    }

    #[test]
    fn test_from_env_ignores_blank_override() {
        with_env(Some("   "), || {
            let client = ApiClient::from_env().unwrap();
            assert_eq!(client.base_url(), http::DEFAULT_BASE_URL);
        });
    }

    #[test]
    fn test_from_env_defaults_when_unset() {
        with_env(None, || {
            let client = ApiClient::from_env().unwrap();
            assert_eq!(client.base_url(), http::DEFAULT_BASE_URL);
        });
    }
}
