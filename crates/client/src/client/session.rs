//! Session operations on [`SantaClient`].
//!
//! # What this module does NOT handle:
//! - Token exchange details and refresh coalescing (in [`crate::TokenManager`])
//! - Storage format of the session (in [`crate::store`])

use secrecy::SecretString;
use tracing::warn;

use crate::client::SantaClient;
use crate::dispatch::OutboundRequest;
use crate::endpoints::check_response;
use crate::error::Result;
use crate::models::Registration;
use crate::session::SessionStatus;

impl SantaClient {
    /// Log in with a username and password, replacing any stored session.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<()> {
        self.tokens.login(username, password).await
    }

    /// Forget the session on this device.
    pub async fn logout(&self) -> Result<()> {
        self.tokens.logout().await
    }

    /// Revoke every session of the account on the server, then log out locally.
    ///
    /// The local logout happens whatever the server answers. The server's
    /// outcome is still returned.
    pub async fn sign_out_from_all(&self) -> Result<()> {
        let url = self.url("/api/users/sign_out_from_all", &[]);
        let remote = match self.dispatcher.send(OutboundRequest::delete(url)).await {
            Ok(response) => check_response(response).await.map(drop),
            Err(e) => Err(e),
        };
        if let Err(e) = &remote {
            warn!(error = %e, "Server-side sign out failed");
        }

        let local = self.tokens.logout().await;
        remote.and(local)
    }

    /// Register a new account and return the server's reply.
    pub async fn signup(&self, registration: &Registration) -> Result<serde_json::Value> {
        self.tokens.signup(registration).await
    }

    /// Authentication state of the stored session.
    pub fn status(&self) -> Result<SessionStatus> {
        self.tokens.status()
    }
}
