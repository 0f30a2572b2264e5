//! HTTP helpers for JSON APIs with a consistent timeout and error mapping. Forms
//! use these helpers to avoid duplicating request setup. The helpers do not
//! store secrets; request bodies are never logged here.

use super::{config::AppConfig, errors::AppError};
use crate::APP_USER_AGENT;
use reqwest::{header::CONTENT_TYPE, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, Instrument, info_span};
use url::Url;

/// Maximum number of error body characters shown in an alert.
const MAX_ERROR_CHARS: usize = 200;

/// JSON client bound to the configured API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client with the configured timeout and the crate user agent.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        config.validate()?;

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        build_url_with_base(&self.base_url, path)
    }

    /// Posts a JSON body and returns the raw response without inspecting its status.
    ///
    /// # Errors
    /// Returns an error if the body cannot be encoded or the request cannot be sent.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, AppError> {
        let url = Url::parse(&self.url(path))
            .map_err(|err| AppError::Config(format!("Invalid request URL: {err}")))?;
        let payload = serde_json::to_vec(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

        let span = info_span!("api.post_json", http.method = "POST", url = %url);
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        debug!(
            status = response.status().as_u16(),
            headers = ?response.headers(),
            "response received"
        );

        Ok(response)
    }
}

/// Parses a JSON response body.
///
/// # Errors
/// Returns `AppError::Parse` when the body is not valid JSON for `T`.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    response
        .json::<T>()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

/// Reads an error body as text. Unreadable bodies count as empty.
pub async fn read_text(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

/// Builds a URL from an explicit base URL and the provided path.
#[must_use]
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
#[must_use]
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
