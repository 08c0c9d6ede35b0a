//! Authenticated request dispatch.
//!
//! Every domain call is described as an [`OutboundRequest`] and handed to the
//! [`Dispatcher`], which owns all authentication and outcome-reporting
//! concerns so that call sites never see a token.
//!
//! # Invariants
//! - A request never reaches the network with a caller-supplied
//!   `Authorization` header; exactly one bearer credential is sent
//! - A `401 Unauthorized` answer triggers one forced refresh and one replay
//! - [`Dispatcher::send_with_status_reporting`] never returns an error

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::TokenManager;
use crate::error::{ClientError, Result};
use crate::guard::SessionGuard;
use crate::notify::Notifier;

/// Application status reported by the backend for a successful operation.
pub const STATUS_OK: &str = "OK";

/// Shown when a request could not be completed or its reply was unreadable.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Could not reach the server. Check your connection and try again.";

/// Shown when the session ran out and could not be renewed.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// A request described by a caller, not yet authenticated.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl OutboundRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Append a header. Repeated names accumulate.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let bytes =
            serde_json::to_vec(body).map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(bytes);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// Attaches a valid bearer token to requests and classifies their outcome.
#[derive(Debug)]
pub struct Dispatcher {
    http: Client,
    tokens: Arc<TokenManager>,
    guard: SessionGuard,
    notifier: Arc<dyn Notifier>,
}

impl Dispatcher {
    pub fn new(
        http: Client,
        tokens: Arc<TokenManager>,
        guard: SessionGuard,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            http,
            tokens,
            guard,
            notifier,
        }
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Send `request` with a fresh bearer token and return the raw response.
    ///
    /// Non-2xx statuses are not errors here. A `401` is answered with one
    /// forced refresh and a single replay of the request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::LoginRequired`] without touching the network if
    /// there is no session, [`ClientError::SessionExpired`] if it could not be
    /// renewed, and [`ClientError::HttpError`] on transport failure.
    pub async fn send(&self, mut request: OutboundRequest) -> Result<Response> {
        self.guard.ensure_session()?;
        request.headers.remove(AUTHORIZATION);

        let token = self.tokens.get_access_token().await?;
        let response = self.execute(&request, &token).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!(url = %request.url, "Bearer token rejected, refreshing and replaying");
        let token = self.tokens.refresh_rejected(&token).await?;
        self.execute(&request, &token).await
    }

    /// Send `request`, parse the reply as JSON and report the outcome.
    ///
    /// A reply whose top-level `status` is not `"OK"` is always reported in
    /// full; an `"OK"` reply only when `always_report_success` is set. Any
    /// failure is reported as a notification and yields `None`.
    pub async fn send_with_status_reporting(
        &self,
        request: OutboundRequest,
        always_report_success: bool,
    ) -> Option<Value> {
        let payload = match self.send_json(request).await {
            Ok(payload) => payload,
            Err(ClientError::LoginRequired) => return None,
            Err(ClientError::SessionExpired) => {
                self.notifier.notify(SESSION_EXPIRED_MESSAGE);
                self.guard.redirect_to_login();
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Request failed");
                self.notifier.notify(CONNECTION_ERROR_MESSAGE);
                return None;
            }
        };

        if !is_ok_status(&payload) || always_report_success {
            self.notifier.notify(&payload.to_string());
        }
        Some(payload)
    }

    async fn send_json(&self, request: OutboundRequest) -> Result<Value> {
        let response = self.send(request).await?;
        Ok(response.json::<Value>().await?)
    }

    async fn execute(&self, request: &OutboundRequest, token: &SecretString) -> Result<Response> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| {
                ClientError::InvalidRequest("access token is not a valid header value".to_string())
            })?;
        bearer.set_sensitive(true);

        let mut builder = self
            .http
            .request(request.method.clone(), &request.url)
            .headers(request.headers.clone())
            .header(AUTHORIZATION, bearer);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        debug!(method = %request.method, url = %request.url, "Sending request");
        Ok(builder.send().await?)
    }
}

/// Whether the payload's top-level `status` is exactly `"OK"`.
pub fn is_ok_status(payload: &Value) -> bool {
    payload.get("status").and_then(Value::as_str) == Some(STATUS_OK)
}
