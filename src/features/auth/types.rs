//! Request and response payloads for the users API. Passwords and tokens are
//! redacted from `Debug` output so they never reach the logs.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

const REDACTED: &str = "[REDACTED]";

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationDetails {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RegistrationDetails")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Login response. Any JSON value is accepted; the token is read from a
/// top-level `token` field and only a non-empty string counts.
#[derive(Debug, Default)]
pub struct LoginResponse {
    pub token: Option<SecretString>,
}

impl LoginResponse {
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

impl From<Value> for LoginResponse {
    fn from(body: Value) -> Self {
        let token = match body.get("token") {
            Some(Value::String(token)) if !token.is_empty() => {
                Some(SecretString::from(token.clone()))
            }
            _ => None,
        };
        Self { token }
    }
}

impl<'de> Deserialize<'de> for LoginResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Registration response: whatever JSON the API returns.
pub type RegistrationResponse = Value;
