//! The persisted credential triple.
//!
//! [`Session`] is the complete triple and the only value a store will accept
//! for writing, so a partially populated session cannot be saved.
//! [`StoredSession`] is what a store hands back: each field independently
//! optional, because storage may be empty, cleared, or damaged.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};

/// An authenticated session: access token, refresh token and expiry instant.
#[derive(Debug, Clone)]
pub struct Session {
    access_token: SecretString,
    refresh_token: SecretString,
    expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        access_token: SecretString,
        refresh_token: SecretString,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at,
        }
    }

    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &SecretString {
        &self.refresh_token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// A token is unusable once `now` has reached its expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Whether `other` is the same issued credential: same access token and expiry.
    pub(crate) fn same_issue_as(&self, other: &Session) -> bool {
        self.same_access_token(&other.access_token) && self.expires_at == other.expires_at
    }

    /// Whether `other` is this session's access token.
    pub(crate) fn same_access_token(&self, other: &SecretString) -> bool {
        self.access_token.expose_secret() == other.expose_secret()
    }
}

/// Raw contents of a session store. Every field may be absent.
#[derive(Debug, Clone, Default)]
pub struct StoredSession {
    pub access_token: Option<SecretString>,
    pub refresh_token: Option<SecretString>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl StoredSession {
    /// All three fields absent.
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none() && self.expires_at.is_none()
    }

    /// All three fields present.
    pub fn is_complete(&self) -> bool {
        self.access_token.is_some() && self.refresh_token.is_some() && self.expires_at.is_some()
    }

    /// Some but not all fields present.
    pub fn is_partial(&self) -> bool {
        !self.is_empty() && !self.is_complete()
    }

    /// Converts into a [`Session`] when, and only when, all fields are present.
    pub fn complete(self) -> Option<Session> {
        match (self.access_token, self.refresh_token, self.expires_at) {
            (Some(access_token), Some(refresh_token), Some(expires_at)) => {
                Some(Session::new(access_token, refresh_token, expires_at))
            }
            _ => None,
        }
    }
}

impl From<Session> for StoredSession {
    fn from(session: Session) -> Self {
        Self {
            access_token: Some(session.access_token),
            refresh_token: Some(session.refresh_token),
            expires_at: Some(session.expires_at),
        }
    }
}

/// Authentication state as seen by a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No usable session is stored.
    Unauthenticated,
    /// A session is stored and its access token is still valid.
    Authenticated { expires_at: DateTime<Utc> },
    /// A session is stored but the access token needs a refresh before use.
    Expired { expires_at: DateTime<Utc> },
}

impl SessionStatus {
    pub(crate) fn of(session: Option<&Session>, now: DateTime<Utc>) -> Self {
        match session {
            None => Self::Unauthenticated,
            Some(s) if s.is_expired_at(now) => Self::Expired {
                expires_at: s.expires_at(),
            },
            Some(s) => Self::Authenticated {
                expires_at: s.expires_at(),
            },
        }
    }
}
