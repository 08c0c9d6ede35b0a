//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SANTA_*` environment variables.
//! - Apply environment variable values to a `ConfigLoader` instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_seconds(var: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be a number of seconds".to_string(),
        })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("SANTA_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(client_id) = env_var_or_none("SANTA_CLIENT_ID") {
        loader.set_client_id(Some(client_id));
    }
    if let Some(scope) = env_var_or_none("SANTA_SCOPE") {
        loader.set_scope(Some(scope));
    }
    if let Some(timeout) = env_var_or_none("SANTA_TIMEOUT") {
        loader.set_timeout(Some(parse_seconds("SANTA_TIMEOUT", &timeout)?));
    }
    if let Some(timeout) = env_var_or_none("SANTA_TOKEN_TIMEOUT") {
        loader.set_token_exchange_timeout(Some(parse_seconds("SANTA_TOKEN_TIMEOUT", &timeout)?));
    }
    if loader.session_path().is_none()
        && let Some(path) = env_var_or_none("SANTA_SESSION_PATH")
    {
        loader.set_session_path(Some(PathBuf::from(path)));
    }

    Ok(())
}
