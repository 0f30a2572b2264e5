//! Application paths and the navigation seam used after a successful submission.

use std::sync::{PoisonError, RwLock};
use tracing::info;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";

/// Client-side router. Forms call `push` once a submission succeeds.
pub trait Navigator: Send + Sync {
    fn push(&self, path: &str);
}

/// In-memory navigation history.
#[derive(Debug, Default)]
pub struct History {
    entries: RwLock<Vec<String>>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent path, if any navigation happened.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.entries().pop()
    }

    /// Every path pushed so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for History {
    fn push(&self, path: &str) {
        info!(path, "navigating");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}

/// Link target for `path`, absolute when an application base URL is configured.
#[must_use]
pub fn href(app_base_url: &str, path: &str) -> String {
    crate::common::api::build_url_with_base(app_base_url, path)
}
