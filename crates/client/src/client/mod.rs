//! Mini Santa API client and domain methods.
//!
//! [`SantaClient`] bundles the session store, [`TokenManager`], session guard
//! and [`Dispatcher`] behind one handle.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login, logout, sign-up and status
//! - `users`, `pools`, `members`, `rooms`, `messages`, `invites`: domain calls
//!
//! # What this module does NOT handle:
//! - Token exchange and refresh (delegated to [`crate::TokenManager`])
//! - Attaching credentials and classifying replies (delegated to [`crate::dispatch`])
//!
//! # Invariants
//! - Domain methods never return errors; failures reach the user through the
//!   configured [`crate::notify::Notifier`] and yield `None`
//! - Every identifier interpolated into a path is percent-encoded

pub mod builder;
mod session;

mod invites;
mod members;
mod messages;
mod pools;
mod rooms;
mod users;

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::auth::TokenManager;
use crate::dispatch::{Dispatcher, OutboundRequest};
use crate::endpoints::encode_path_segment;

/// Mini Santa REST API client.
///
/// ```rust,ignore
/// use santa_client::SantaClient;
///
/// let client = SantaClient::builder()
///     .base_url("http://localhost:8080".to_string())
///     .build()?;
/// client.login("elf", &password).await?;
/// let pools = client.list_pools().await;
/// ```
#[derive(Debug)]
pub struct SantaClient {
    pub(crate) base_url: String,
    pub(crate) tokens: Arc<TokenManager>,
    pub(crate) dispatcher: Dispatcher,
}

impl SantaClient {
    pub fn builder() -> builder::SantaClientBuilder {
        builder::SantaClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The lifecycle manager, for callers that need tokens directly.
    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// The dispatcher, for requests the domain methods do not cover.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Absolute URL for an API path made of fixed parts and identifiers.
    pub(crate) fn url(&self, path: &str, ids: &[&str]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for id in ids {
            url.push('/');
            url.push_str(&encode_path_segment(id));
        }
        url
    }

    pub(crate) async fn call(&self, request: OutboundRequest, report_success: bool) -> Option<Value> {
        self.dispatcher
            .send_with_status_reporting(request, report_success)
            .await
    }

    pub(crate) async fn call_with_body<T: Serialize>(
        &self,
        method: Method,
        url: String,
        body: &T,
        report_success: bool,
    ) -> Option<Value> {
        match OutboundRequest::new(method, url).json(body) {
            Ok(request) => self.call(request, report_success).await,
            Err(e) => {
                warn!(error = %e, "Could not encode request body");
                self.dispatcher.notifier().notify(&e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_identifiers() {
        let client = SantaClient::builder()
            .base_url("http://localhost:8080/".to_string())
            .build()
            .unwrap();

        assert_eq!(
            client.url("/api/santa/pools/id", &["7"]),
            "http://localhost:8080/api/santa/pools/id/7"
        );
        assert_eq!(
            client.url("/api/santa/pools/id", &["7/../9"]),
            "http://localhost:8080/api/santa/pools/id/7%2F..%2F9"
        );
        assert_eq!(
            client.url("/api/santa/pools", &[]),
            "http://localhost:8080/api/santa/pools"
        );
    }
}
