//! Token lifecycle management.
//!
//! [`TokenManager`] owns the rule "is the current access token usable" and
//! performs every credential exchange: password-grant login, refresh-grant
//! renewal and logout.
//!
//! # What this module does NOT handle:
//! - Persisting the session (delegated to a [`SessionStore`])
//! - Attaching tokens to outgoing requests (handled by [`crate::dispatch::Dispatcher`])
//! - Redirecting to a login entry point (handled by [`crate::guard::SessionGuard`])
//!
//! # Invariants
//! - The store is only ever written with a complete [`Session`]
//! - At most one token exchange is in flight per manager; callers that find
//!   an expired token while a refresh runs wait for it and reuse its result
//! - A failed refresh clears the session
//! - A partial record found in the store is cleared and treated as logged out

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use santa_config::AuthConfig;
use secrecy::SecretString;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::endpoints::{self, Grant};
use crate::error::{ClientError, Result};
use crate::models::{Registration, TokenResponse};
use crate::session::{Session, SessionStatus};
use crate::store::SessionStore;

/// Acquires, renews and discards OAuth2 credentials.
#[derive(Debug)]
pub struct TokenManager {
    http: Client,
    base_url: String,
    auth: AuthConfig,
    store: Arc<dyn SessionStore>,
    exchange_timeout: Duration,
    refresh_gate: Mutex<()>,
}

impl TokenManager {
    pub fn new(
        http: Client,
        base_url: impl Into<String>,
        auth: AuthConfig,
        store: Arc<dyn SessionStore>,
        exchange_timeout: Duration,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            auth,
            store,
            exchange_timeout,
            refresh_gate: Mutex::new(()),
        }
    }

    /// The store this manager reads and writes.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Exchange a username and password for a new session.
    ///
    /// Nothing is written unless the token endpoint returns all of
    /// `access_token`, `refresh_token` and `expires_in`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the credentials are refused and
    /// [`ClientError::InvalidTokenResponse`] if the response is incomplete.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<()> {
        let _gate = self.refresh_gate.lock().await;

        let response = self
            .exchange(Grant::Password { username, password })
            .await?;
        let session = Self::session_from(response)?;
        self.store.save(&session)?;

        info!(expires_at = %session.expires_at(), "Logged in as {}", username);
        Ok(())
    }

    /// Renew the stored session with its refresh token.
    ///
    /// Any failure clears the session. The underlying cause is returned so
    /// that an explicit caller learns why.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::LoginRequired`] if there is nothing to refresh.
    pub async fn refresh(&self) -> Result<SecretString> {
        let observed = self.current_session()?.ok_or(ClientError::LoginRequired)?;
        self.refresh_if_current(|current| current.same_issue_as(&observed))
            .await
    }

    /// Return an access token that is fresh at the instant of return.
    ///
    /// If the stored expiry has been reached the session is refreshed first.
    /// Concurrent callers share a single refresh.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::LoginRequired`] with no session at all and
    /// [`ClientError::SessionExpired`] if the session could not be renewed.
    pub async fn get_access_token(&self) -> Result<SecretString> {
        let session = self.current_session()?.ok_or(ClientError::LoginRequired)?;
        if !session.is_expired_at(Utc::now()) {
            return Ok(session.access_token().clone());
        }

        debug!(expires_at = %session.expires_at(), "Access token expired, refreshing");
        self.refresh_if_current(|current| current.is_expired_at(Utc::now()))
            .await
            .map_err(Self::as_expired)
    }

    /// Renew the session after the server rejected `rejected` with a 401.
    ///
    /// If the stored access token already differs from `rejected` and is still
    /// fresh, another caller has renewed it and that token is returned without
    /// an exchange.
    pub(crate) async fn refresh_rejected(&self, rejected: &SecretString) -> Result<SecretString> {
        self.refresh_if_current(|current| {
            current.same_access_token(rejected) || current.is_expired_at(Utc::now())
        })
        .await
        .map_err(Self::as_expired)
    }

    /// Discard the session locally.
    pub async fn logout(&self) -> Result<()> {
        let _gate = self.refresh_gate.lock().await;
        self.store.clear()?;
        info!("Logged out");
        Ok(())
    }

    /// Register a new account. Does not log in.
    pub async fn signup(&self, registration: &Registration) -> Result<serde_json::Value> {
        endpoints::sign_up(&self.http, &self.base_url, registration).await
    }

    /// Authentication state derived from the stored record.
    pub fn status(&self) -> Result<SessionStatus> {
        let session = self.current_session()?;
        Ok(SessionStatus::of(session.as_ref(), Utc::now()))
    }

    /// Load the stored session, clearing it if only partially present.
    pub(crate) fn current_session(&self) -> Result<Option<Session>> {
        let stored = self.store.load()?;
        if stored.is_partial() {
            warn!("Stored session is incomplete, clearing it");
            self.store.clear()?;
            return Ok(None);
        }
        Ok(stored.complete())
    }

    /// Single-flight refresh.
    ///
    /// Waits for the gate, then re-reads the store. The exchange only runs if
    /// `still_current` holds for the stored session; otherwise the session was
    /// renewed while waiting and its access token is returned as-is. Callers
    /// must only let a session through `still_current == false` if its token
    /// is fresh.
    async fn refresh_if_current<F>(&self, still_current: F) -> Result<SecretString>
    where
        F: Fn(&Session) -> bool,
    {
        let _gate = self.refresh_gate.lock().await;

        let Some(session) = self.current_session()? else {
            debug!("Session was cleared while waiting to refresh");
            return Err(ClientError::SessionExpired);
        };
        if !still_current(&session) {
            debug!("Session already renewed by a concurrent caller");
            return Ok(session.access_token().clone());
        }

        let renewed = self
            .exchange(Grant::RefreshToken {
                refresh_token: session.refresh_token(),
            })
            .await
            .and_then(Self::session_from);

        match renewed {
            Ok(renewed) => {
                self.store.save(&renewed)?;
                info!(expires_at = %renewed.expires_at(), "Session refreshed");
                Ok(renewed.access_token().clone())
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed, clearing session");
                self.store.clear()?;
                Err(e)
            }
        }
    }

    async fn exchange(&self, grant: Grant<'_>) -> Result<TokenResponse> {
        tokio::time::timeout(
            self.exchange_timeout,
            endpoints::request_token(&self.http, &self.base_url, &self.auth, grant),
        )
        .await
        .map_err(|_| ClientError::Timeout(self.exchange_timeout))?
    }

    fn session_from(response: TokenResponse) -> Result<Session> {
        response.into_session(Utc::now()).inspect_err(|e| {
            warn!(error = %e, "Rejecting token response");
        })
    }

    /// Callers asking for a token only need to know the session is gone.
    fn as_expired(err: ClientError) -> ClientError {
        match err {
            ClientError::SessionStore(_) => err,
            _ => ClientError::SessionExpired,
        }
    }
}
