#![allow(dead_code)]

use authforms::common::AppConfig;
use std::{net::TcpListener, time::Duration};

pub fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Configuration pointing the forms at a mock server.
pub fn config_for(uri: &str) -> AppConfig {
    AppConfig {
        api_base_url: uri.to_string(),
        request_timeout: Duration::from_secs(5),
        ..AppConfig::default()
    }
}
