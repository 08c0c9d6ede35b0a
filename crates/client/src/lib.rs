//! Mini Santa API client.
//!
//! This crate manages the OAuth2 session of a Mini Santa user (login,
//! transparent refresh, logout) and dispatches authenticated calls to the
//! gift-exchange API on their behalf.

mod auth;
pub mod client;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod guard;
pub mod models;
pub mod notify;
mod serde_helpers;
pub mod session;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::TokenManager;
pub use client::SantaClient;
pub use client::builder::SantaClientBuilder;
pub use dispatch::{Dispatcher, OutboundRequest};
pub use error::{ClientError, Result};
pub use guard::{Navigator, SessionGuard, TracingNavigator};
pub use models::{
    CreateInviteParams, JoinPoolParams, PoolParams, Registration, SendMessageParams,
    TokenResponse,
};
pub use notify::{Notifier, TracingNotifier};
pub use session::{Session, SessionStatus, StoredSession};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
