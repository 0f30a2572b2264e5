//! Endpoint and response policy for one form's submission.

use crate::common::{
    api::{read_json, read_text},
    ApiClient, AppError,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

/// Reported when a rejected response has no body text.
const EMPTY_BODY: &str = "Request failed.";

/// What to report when the server answers with a non-2xx status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorBody {
    /// Read the body and surface it, trimmed but otherwise whole, with the status code.
    Capture,
    /// Skip the body and surface this message with the status code.
    Discard(&'static str),
}

/// Where a form posts and where it navigates afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission {
    pub endpoint: &'static str,
    pub success_path: &'static str,
    pub error_body: ErrorBody,
}

impl Submission {
    /// Posts `body` and parses a 2xx response as JSON.
    ///
    /// The status is checked before the body is read.
    ///
    /// # Errors
    /// Returns `AppError::Http` for non-2xx statuses, network errors for
    /// failed requests, and `AppError::Parse` for undecodable bodies.
    pub async fn send<B, R>(&self, client: &ApiClient, body: &B) -> Result<R, AppError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = client.post_json(self.endpoint, body).await?;
        let status = response.status();

        if status.is_success() {
            return read_json(response).await;
        }

        let status = status.as_u16();
        let message = match self.error_body {
            ErrorBody::Capture => {
                let body = read_text(response).await;
                error!(status, body = %body, "response not OK");
                match body.trim() {
                    "" => EMPTY_BODY.to_string(),
                    trimmed => trimmed.to_string(),
                }
            }
            ErrorBody::Discard(message) => {
                error!(status, "response not OK");
                message.to_string()
            }
        };

        Err(AppError::Http { status, message })
    }
}
