//! Session presence check performed before every authenticated call.
//!
//! The guard only looks at whether a session exists. Whether its access
//! token is still valid is [`crate::TokenManager`]'s concern.

use std::fmt::Debug;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::store::SessionStore;

/// Takes the user to a login entry point.
pub trait Navigator: Debug + Send + Sync {
    fn navigate_to_login(&self);
}

/// Navigator for headless use: records the redirect in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate_to_login(&self) {
        info!("Login required");
    }
}

/// Short-circuits authenticated calls when there is no session.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Succeed if all three session fields are stored.
    ///
    /// Otherwise redirect to login and return [`ClientError::LoginRequired`].
    pub fn ensure_session(&self) -> Result<()> {
        if self.store.load()?.is_complete() {
            return Ok(());
        }
        debug!("No session, redirecting to login");
        self.redirect_to_login();
        Err(ClientError::LoginRequired)
    }

    pub fn redirect_to_login(&self) {
        self.navigator.navigate_to_login();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, StoredSession};
    use crate::store::MemorySessionStore;
    use chrono::Utc;
    use secrecy::SecretString;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingNavigator(AtomicUsize);

    impl Navigator for CountingNavigator {
        fn navigate_to_login(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    #[test]
    fn test_missing_session_redirects() {
        let navigator = Arc::new(CountingNavigator::default());
        let guard = SessionGuard::new(Arc::new(MemorySessionStore::new()), navigator.clone());

        assert!(matches!(
            guard.ensure_session(),
            Err(ClientError::LoginRequired)
        ));
        assert_eq!(navigator.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_partial_session_redirects() {
        let navigator = Arc::new(CountingNavigator::default());
        let store = MemorySessionStore::with_record(StoredSession {
            access_token: Some(secret("A1")),
            ..StoredSession::default()
        });
        let guard = SessionGuard::new(Arc::new(store), navigator.clone());

        assert!(guard.ensure_session().is_err());
        assert_eq!(navigator.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_expired_session_passes() {
        let navigator = Arc::new(CountingNavigator::default());
        let store = MemorySessionStore::new();
        store
            .save(&Session::new(secret("A1"), secret("R1"), Utc::now()))
            .unwrap();
        let guard = SessionGuard::new(Arc::new(store), navigator.clone());

        assert!(guard.ensure_session().is_ok());
        assert_eq!(navigator.0.load(Ordering::SeqCst), 0);
    }
}
