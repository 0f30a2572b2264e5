use super::schema::FieldErrors;
use crate::common::AppError;

/// Result of one `submit` call on a form.
#[derive(Debug)]
pub enum SubmissionOutcome<T> {
    /// The server accepted the submission; carries the parsed response.
    Success(T),
    /// One or more fields failed validation; nothing was sent.
    Invalid(FieldErrors),
    /// The request failed at the HTTP, network or decoding stage.
    Failed(AppError),
    /// Another submission from the same form is still in flight.
    Busy,
}

impl<T> SubmissionOutcome<T> {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }

    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            SubmissionOutcome::Success(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmissionOutcome::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&AppError> {
        match self {
            SubmissionOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}
