//! Client builder for constructing [`SantaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the base URL
//! - Configuring the underlying HTTP client (timeouts, redirects)
//! - Choosing a session store when none is supplied
//!
//! # Invariants
//! - `base_url` is required and always normalized to have no trailing slashes
//! - Without an explicit store, a configured session path selects a
//!   [`FileSessionStore`]; otherwise sessions live in memory

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use santa_config::{
    AuthConfig, Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_EXCHANGE_TIMEOUT_SECS},
};
use tracing::debug;

use crate::auth::TokenManager;
use crate::client::SantaClient;
use crate::dispatch::Dispatcher;
use crate::error::{ClientError, Result};
use crate::guard::{Navigator, SessionGuard, TracingNavigator};
use crate::notify::{Notifier, TracingNotifier};
use crate::store::{FileSessionStore, MemorySessionStore, SessionStore};

/// Builder for creating a new [`SantaClient`].
///
/// ```rust,ignore
/// use santa_client::SantaClient;
///
/// let client = SantaClient::builder()
///     .base_url("http://localhost:8080".to_string())
///     .session_path("/tmp/santa/session.json".into())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct SantaClientBuilder {
    base_url: Option<String>,
    auth: AuthConfig,
    timeout: Duration,
    token_exchange_timeout: Duration,
    store: Option<Arc<dyn SessionStore>>,
    session_path: Option<PathBuf>,
    notifier: Option<Arc<dyn Notifier>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl Default for SantaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth: AuthConfig::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_exchange_timeout: Duration::from_secs(DEFAULT_TOKEN_EXCHANGE_TIMEOUT_SECS),
            store: None,
            session_path: None,
            notifier: None,
            navigator: None,
        }
    }
}

impl SantaClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API server, e.g. `http://localhost:8080`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the OAuth2 client id and scope.
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    /// Set the per-request HTTP timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the upper bound for one token exchange. Default is 15 seconds.
    pub fn token_exchange_timeout(mut self, timeout: Duration) -> Self {
        self.token_exchange_timeout = timeout;
        self
    }

    /// Use an explicit session store. Takes precedence over `session_path`.
    pub fn store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Persist the session to a JSON file at `path`.
    pub fn session_path(mut self, path: PathBuf) -> Self {
        self.session_path = Some(path);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Take connection, OAuth2 and storage settings from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth = config.auth.clone();
        self.timeout = config.connection.timeout;
        self.token_exchange_timeout = config.connection.token_exchange_timeout;
        if let Some(path) = &config.session_path {
            self.session_path = Some(path.clone());
        }
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`SantaClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not an
    /// absolute URL, and `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SantaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        let store: Arc<dyn SessionStore> = match (self.store, self.session_path) {
            (Some(store), _) => store,
            (None, Some(path)) => {
                debug!(path = %path.display(), "Using file session store");
                Arc::new(FileSessionStore::new(path))
            }
            (None, None) => Arc::new(MemorySessionStore::new()),
        };
        let navigator = self
            .navigator
            .unwrap_or_else(|| Arc::new(TracingNavigator));
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(TracingNotifier));

        let tokens = Arc::new(TokenManager::new(
            http.clone(),
            base_url.clone(),
            self.auth,
            store.clone(),
            self.token_exchange_timeout,
        ));
        let guard = SessionGuard::new(store, navigator);
        let dispatcher = Dispatcher::new(http, tokens.clone(), guard, notifier);

        Ok(SantaClient {
            base_url,
            tokens,
            dispatcher,
        })
    }
}
