//! Alert banners for submission errors. Messages must be safe to render
//! and should never include secrets or tokens.

use crate::common::{api::sanitize_body, AppError};
use serde::Serialize;

/// Alert style. Forms only raise errors; the kind is kept in the view so
/// renderers can style the banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    /// Error banner for a failed submission.
    #[must_use]
    pub fn error(err: &AppError) -> Self {
        Self {
            kind: AlertKind::Error,
            message: format_error(err),
        }
    }
}

/// Maps errors to user-facing strings; config messages are already phrased for
/// users and server bodies are shortened for display.
fn format_error(err: &AppError) -> String {
    match err {
        AppError::Config(message) => message.clone(),
        AppError::Http { status, message } => {
            format!("Request failed ({status}): {}", sanitize_body(message))
        }
        _ => err.to_string(),
    }
}
