//! Serde helpers for secret-bearing fields.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional string straight into a `SecretString`.
///
/// `null` and a missing key (with `#[serde(default)]`) both yield `None`.
pub fn optional_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| SecretString::new(s.into())))
}
