//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, request timeout, token exchange timeout).
//! - Define the main `Config` structure combining connection, auth and storage.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `base_url` never ends with a slash once built by `ConfigLoader`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_EXCHANGE_TIMEOUT_SECS,
};
use crate::types::auth::AuthConfig;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Mini Santa API server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the API server (e.g., http://localhost:8080)
    pub base_url: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Upper bound for one login or refresh exchange (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub token_exchange_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_exchange_timeout: Duration::from_secs(DEFAULT_TOKEN_EXCHANGE_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// OAuth2 client settings
    pub auth: AuthConfig,
    /// Where the session file lives; `None` means the platform data directory.
    pub session_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_local_backend() {
        let config = Config::default();
        assert_eq!(config.connection.base_url, "http://localhost:8080");
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert_eq!(
            config.connection.token_exchange_timeout,
            Duration::from_secs(15)
        );
        assert_eq!(config.auth.client_id, "api");
        assert!(config.session_path.is_none());
    }

    #[test]
    fn test_durations_serialize_as_seconds() {
        let config = ConnectionConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["timeout"], 30);
        assert_eq!(json["token_exchange_timeout"], 15);

        let parsed: ConnectionConfig = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, config);
    }
}
