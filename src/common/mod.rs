//! Shared utilities for API access, configuration and errors.
//!
//! Centralizing these helpers keeps network behavior consistent across the
//! forms and avoids duplicated request setup. The helpers never store secrets;
//! callers must still avoid logging passwords or tokens.

pub mod api;
pub mod config;
pub mod errors;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::AppError;
