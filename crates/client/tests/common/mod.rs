//! Common test utilities for integration tests.
//!
//! Builds a [`SantaClient`] against a wiremock server with an in-memory
//! store and recording UI collaborators, plus helpers to seed sessions and
//! mount token endpoint responses.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every harness starts with an empty session store

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

#[allow(unused_imports)]
pub use santa_client::testing::{RecordingNavigator, RecordingNotifier, load_fixture};
#[allow(unused_imports)]
pub use santa_client::{
    ClientError, MemorySessionStore, SantaClient, SantaClientBuilder, Session, SessionStore,
};
#[allow(unused_imports)]
pub use secrecy::{ExposeSecret, SecretString};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use wiremock::matchers::{body_string_contains, method, path};

/// A client wired to observable collaborators.
#[allow(dead_code)]
pub struct Harness {
    pub client: SantaClient,
    pub store: Arc<MemorySessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

#[allow(dead_code)]
impl Harness {
    /// Stored access token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.store
            .load()
            .unwrap()
            .access_token
            .map(|t| t.expose_secret().to_string())
    }

    pub fn is_logged_out(&self) -> bool {
        self.store.load().unwrap().is_empty()
    }
}

#[allow(dead_code)]
pub fn harness(server: &MockServer) -> Harness {
    harness_with(&server.uri(), |builder| builder)
}

/// Harness with extra builder settings applied before `build()`.
#[allow(dead_code)]
pub fn harness_with(
    base_url: &str,
    configure: impl FnOnce(SantaClientBuilder) -> SantaClientBuilder,
) -> Harness {
    let store = Arc::new(MemorySessionStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());

    let builder = SantaClient::builder()
        .base_url(base_url.to_string())
        .store(store.clone())
        .notifier(notifier.clone())
        .navigator(navigator.clone());
    let client = configure(builder).build().expect("client should build");

    Harness {
        client,
        store,
        notifier,
        navigator,
    }
}

#[allow(dead_code)]
pub fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

/// Store a complete session expiring `expires_in_secs` from now (negative for past).
#[allow(dead_code)]
pub fn seed_session(store: &MemorySessionStore, access: &str, refresh: &str, expires_in_secs: i64) {
    let expires_at = Utc::now() + chrono::Duration::seconds(expires_in_secs);
    store
        .save(&Session::new(secret(access), secret(refresh), expires_at))
        .unwrap();
}

/// Mount a refresh-grant response for `refresh_token`, expected `times` times.
#[allow(dead_code)]
pub async fn mount_refresh(
    server: &MockServer,
    refresh_token: &str,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains(format!("refresh_token={refresh_token}")))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

/// A 200 response carrying a fixture, optionally delayed.
#[allow(dead_code)]
pub fn fixture_response(fixture: &str, delay: Option<Duration>) -> ResponseTemplate {
    let template = ResponseTemplate::new(200).set_body_json(load_fixture(fixture));
    match delay {
        Some(delay) => template.set_delay(delay),
        None => template,
    }
}
