//! Error types for the Mini Santa client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The authorization server rejected the supplied credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The token endpoint answered without one of the required fields.
    #[error("Authentication service returned invalid data: missing {0}")]
    InvalidTokenResponse(&'static str),

    /// No session exists; the user has to log in first.
    #[error("Login required")]
    LoginRequired,

    /// The session could not be renewed and has been cleared.
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status from an endpoint this crate interprets itself.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// A token exchange did not finish in time.
    #[error("Token exchange timed out after {0:?}")]
    Timeout(Duration),

    /// The request could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading or writing the persisted session failed.
    #[error("Session store error: {0}")]
    SessionStore(String),
}

impl ClientError {
    /// Check if this error is transient and the operation may be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::Timeout(_))
    }

    /// Check if this error means the user must (re-)authenticate.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_)
                | Self::InvalidTokenResponse(_)
                | Self::LoginRequired
                | Self::SessionExpired
        )
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::SessionStore(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_retryable() {
        assert!(ClientError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(!ClientError::LoginRequired.is_retryable());
        assert!(!ClientError::AuthFailed("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::LoginRequired.is_auth_error());
        assert!(ClientError::SessionExpired.is_auth_error());
        assert!(ClientError::InvalidTokenResponse("access_token").is_auth_error());
        assert!(!ClientError::Timeout(Duration::from_secs(1)).is_auth_error());
        assert!(!ClientError::SessionStore("disk full".to_string()).is_auth_error());
    }

    #[test]
    fn test_invalid_token_response_names_field() {
        let err = ClientError::InvalidTokenResponse("refresh_token");
        assert_eq!(
            err.to_string(),
            "Authentication service returned invalid data: missing refresh_token"
        );
    }
}
