//! Configuration for API endpoints, link targets and request policy with
//! optional overrides. Library users call [`AppConfig::load`], which reads
//! `AUTHFORMS_*` environment variables; the CLI builds the same overrides from
//! its flags. Configuration values are public; do not store secrets here.

use super::errors::AppError;
use std::{env, time::Duration};
use url::Url;

/// Local development API host used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3003";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

pub const ENV_API_BASE_URL: &str = "AUTHFORMS_API_BASE_URL";
pub const ENV_APP_BASE_URL: &str = "AUTHFORMS_APP_BASE_URL";
pub const ENV_TIMEOUT: &str = "AUTHFORMS_TIMEOUT";

/// Replacement validation message for every rule on one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageOverride {
    pub field: String,
    pub message: String,
}

impl MessageOverride {
    /// Parses a `field=message` pair.
    ///
    /// # Errors
    /// Returns an error if the separator is missing or either side is blank.
    pub fn parse(pair: &str) -> Result<Self, AppError> {
        let (field, message) = pair
            .split_once('=')
            .ok_or_else(|| AppError::Config(format!("Expected field=message, got '{pair}'")))?;

        match (normalize_value(field), normalize_value(message)) {
            (Some(field), Some(message)) => Ok(Self { field, message }),
            _ => Err(AppError::Config(format!(
                "Expected field=message, got '{pair}'"
            ))),
        }
    }
}

/// Form configuration: where to submit, where links point, how long to wait.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub app_base_url: String,
    pub request_timeout: Duration,
    pub messages: Vec<MessageOverride>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            app_base_url: String::new(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            messages: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads defaults and applies environment overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply_overrides(env_overrides());
        config
    }

    /// Applies non-empty overrides on top of the current values.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(value) = overrides.api_base_url {
            self.api_base_url = value;
        }
        if let Some(value) = overrides.app_base_url {
            self.app_base_url = value;
        }
        if let Some(seconds) = overrides.timeout_seconds {
            self.request_timeout = Duration::from_secs(seconds);
        }
        self.messages.extend(overrides.messages);
    }

    /// Checks that the API base URL is an absolute http(s) URL.
    ///
    /// # Errors
    /// Returns `AppError::Config` when the URL cannot be parsed or uses another scheme.
    pub fn validate(&self) -> Result<(), AppError> {
        let url = Url::parse(self.api_base_url.trim()).map_err(|err| {
            AppError::Config(format!("Invalid API base URL '{}': {err}", self.api_base_url))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AppError::Config(format!(
                "Unsupported API base URL scheme: {scheme}"
            ))),
        }
    }
}

/// Optional values layered on top of the defaults.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub app_base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub messages: Vec<MessageOverride>,
}

fn env_overrides() -> ConfigOverrides {
    ConfigOverrides {
        api_base_url: read_env_value(ENV_API_BASE_URL),
        app_base_url: read_env_value(ENV_APP_BASE_URL),
        timeout_seconds: read_env_value(ENV_TIMEOUT)
            .and_then(|value| value.parse().ok())
            .filter(|seconds| *seconds > 0),
        messages: Vec::new(),
    }
}

fn read_env_value(key: &str) -> Option<String> {
    env::var(key).ok().as_deref().and_then(normalize_value)
}

/// Trims a configuration value and rejects blank input.
#[must_use]
pub fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, ConfigOverrides, MessageOverride, DEFAULT_API_BASE_URL, ENV_API_BASE_URL,
        ENV_APP_BASE_URL, ENV_TIMEOUT, normalize_value,
    };
    use std::time::Duration;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://api.example.dev "),
            Some("https://api.example.dev".to_string())
        );
    }

    #[test]
    fn apply_overrides_ignores_missing_values() {
        let mut config = AppConfig::default();
        config.apply_overrides(ConfigOverrides::default());

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.app_base_url, "");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.messages.is_empty());
    }

    #[test]
    fn apply_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        config.apply_overrides(ConfigOverrides {
            api_base_url: normalize_value("https://api.override"),
            app_base_url: normalize_value("https://app.override"),
            timeout_seconds: Some(3),
            messages: vec![MessageOverride {
                field: "lastName".to_string(),
                message: "Last name is required".to_string(),
            }],
        });

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.app_base_url, "https://app.override");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.messages.len(), 1);
    }

    #[test]
    fn load_reads_environment() {
        temp_env::with_vars(
            [
                (ENV_API_BASE_URL, Some(" https://api.from-env ")),
                (ENV_APP_BASE_URL, Some("")),
                (ENV_TIMEOUT, Some("25")),
            ],
            || {
                let config = AppConfig::load();
                assert_eq!(config.api_base_url, "https://api.from-env");
                assert_eq!(config.app_base_url, "");
                assert_eq!(config.request_timeout, Duration::from_secs(25));
            },
        );
    }

    #[test]
    fn load_ignores_zero_or_invalid_timeout() {
        for value in ["0", "soon", "-1"] {
            temp_env::with_vars([(ENV_TIMEOUT, Some(value))], || {
                let config = AppConfig::load();
                assert_eq!(config.request_timeout, Duration::from_secs(10), "{value}");
            });
        }
    }

    #[test]
    fn validate_rejects_bad_urls() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        config.api_base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api_base_url = "ftp://files.example.dev".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn message_override_parses_pairs() {
        let parsed = MessageOverride::parse("lastName = Last name is required");
        assert_eq!(
            parsed,
            Ok(MessageOverride {
                field: "lastName".to_string(),
                message: "Last name is required".to_string(),
            })
        );
        assert!(MessageOverride::parse("lastName").is_err());
        assert!(MessageOverride::parse("=message").is_err());
        assert!(MessageOverride::parse("field=  ").is_err());
    }
}
