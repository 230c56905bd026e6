//! Typed JSON transport over HTTP.
//!
//! [`ApiClient`] owns a connection pool and a base URL. Both request
//! helpers fetch the body as text first and run it through the shared JSON
//! guard, so a backend that answers 200 with an HTML error page surfaces as
//! a parse failure instead of a panic deeper in the stack. Non-success
//! statuses are reported with the status reason plus whatever `detail` the
//! backend put in the error body.

use fortune_core::parse_json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ApiError;

/// Error body shape used by the backend: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// HTTP client bound to one backend base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// Requests carry no client-side timeout. Each call is a single attempt
    /// and the caller decides how long it is willing to wait.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint and decode the JSON body into `T`.
    pub async fn get_json<T>(&self, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.base_url);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("GET {url} failed: {err}");
                return Err(ApiError::Transport(err));
            }
        };
        self.decode_response(&url, response).await
    }

    /// POST a JSON body to an endpoint and decode the JSON reply into `T`.
    pub async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.base_url);
        let response = match self.http.post(&url).json(body).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("POST {url} failed: {err}");
                return Err(ApiError::Transport(err));
            }
        };
        self.decode_response(&url, response).await
    }

    async fn decode_response<T>(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("unrecognized status")
                .to_string();
            // The error body is best effort. A backend that hangs up before
            // sending one still yields a usable Network error.
            let body = response.text().await.unwrap_or_default();
            let detail = parse_json::<ErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.detail);
            let err = ApiError::Network {
                status: status.as_u16(),
                reason,
                detail,
            };
            error!("{url} answered {status}: {err}");
            return Err(err);
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                error!("reading body from {url} failed: {err}");
                return Err(ApiError::Transport(err));
            }
        };
        match parse_json::<T>(&text) {
            Ok(value) => Ok(value),
            Err(failure) => {
                error!("{url} returned a body that is not valid JSON: {failure}");
                Err(ApiError::Parse(failure.to_string()))
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_API_URL)
    }
}
