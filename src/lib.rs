//! # authforms (Login & Registration Forms)
//!
//! `authforms` implements the two forms of an authentication flow: a login form
//! and a registration form. Each form owns a validation schema and a state
//! manager, submits its values as JSON to a remote API and navigates on success.
//!
//! ## Form Flow
//!
//! 1. **Edit:** Field values start empty and are updated one at a time through
//!    [`FormState::set`](forms::state::FormState::set).
//! 2. **Validate:** `submit` checks every field against the [`Schema`](forms::schema::Schema).
//!    Invalid forms never reach the network; the errors are kept for inline display.
//! 3. **Submit:** Valid values are decoded into the typed payload and POSTed as JSON
//!    (`/api/v1/users/login` or `/api/v1/users`).
//! 4. **Navigate:** A 2xx response is parsed as JSON and the [`Navigator`](routes::Navigator)
//!    is pushed to `/` (login) or `/auth/login` (registration).
//!
//! Failures are logged through `tracing` and returned as a
//! [`SubmissionOutcome`](forms::outcome::SubmissionOutcome) so the view layer can
//! render them. Only one submission per form may be in flight at a time.
//!
//! ## Surfaces
//!
//! The library exposes declarative view models in [`components`]; the `authforms`
//! binary mounts them in a terminal.

pub mod cli;
pub mod common;
pub mod components;
pub mod features;
pub mod forms;
pub mod routes;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

pub use features::auth::{LoginForm, RegisterForm};
