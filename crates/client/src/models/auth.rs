//! Authentication models.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::{ClientError, Result};
use crate::serde_helpers::optional_secret;
use crate::session::Session;

/// Body of a `/oauth/token` response.
///
/// Every field is optional so that an incomplete response can be detected
/// and rejected as a whole instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default, deserialize_with = "optional_secret")]
    pub access_token: Option<SecretString>,
    #[serde(default, deserialize_with = "optional_secret")]
    pub refresh_token: Option<SecretString>,
    /// Lifetime of the access token in seconds, relative to receipt.
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    /// Turn the response into a complete [`Session`] received at `now`.
    ///
    /// Fails with [`ClientError::InvalidTokenResponse`] naming the first
    /// missing (or empty) field. A zero `expires_in` counts as missing: the
    /// token would already be expired on receipt.
    pub fn into_session(self, now: DateTime<Utc>) -> Result<Session> {
        let access_token = self
            .access_token
            .filter(|t| !t.expose_secret().is_empty())
            .ok_or(ClientError::InvalidTokenResponse("access_token"))?;
        let refresh_token = self
            .refresh_token
            .filter(|t| !t.expose_secret().is_empty())
            .ok_or(ClientError::InvalidTokenResponse("refresh_token"))?;
        let expires_in = self
            .expires_in
            .filter(|secs| *secs > 0)
            .ok_or(ClientError::InvalidTokenResponse("expires_in"))?;
        let lifetime = i64::try_from(expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or(ClientError::InvalidTokenResponse("expires_in"))?;
        let expires_at = now
            .checked_add_signed(lifetime)
            .ok_or(ClientError::InvalidTokenResponse("expires_in"))?;

        Ok(Session::new(access_token, refresh_token, expires_at))
    }
}

/// Fields of a new account.
#[derive(Debug, Clone)]
pub struct Registration {
    pub login: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub nickname: String,
    pub email: String,
}

impl Registration {
    pub(crate) fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "login": self.login,
            "password": self.password.expose_secret(),
            "confirm_password": self.confirm_password.expose_secret(),
            "nickname": self.nickname,
            "email": self.email,
        })
    }
}
