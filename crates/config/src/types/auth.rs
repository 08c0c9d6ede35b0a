//! OAuth2 client settings.
//!
//! These identify the client application to the authorization server. They
//! are not user credentials: usernames and passwords are supplied per login
//! and never stored in configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CLIENT_ID, DEFAULT_SCOPE};

/// OAuth2 client registration used for password and refresh grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Client identifier sent as `client_id`.
    pub client_id: String,
    /// Space-separated scopes sent as `scope`.
    pub scope: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }
}
