//! Token lifecycle tests.
//!
//! This module tests login, refresh and logout against a mock token endpoint:
//! - Password-grant login persists the complete credential triple
//! - Incomplete or refused token responses write nothing
//! - An expired token triggers exactly one refresh, even under concurrency
//! - Any refresh failure clears the session
//!
//! # What this does NOT handle
//! - Attaching tokens to domain requests (see dispatch_tests.rs)

mod common;

use std::time::Duration;

use chrono::Utc;
use common::*;
use futures::future::join_all;
use santa_client::{Registration, SessionStatus};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};

#[tokio::test]
async fn test_login_stores_session_and_reuses_fresh_token() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("username=elf"))
        .and(body_string_contains("password=hunter22"))
        .and(body_string_contains("client_id=api"))
        .respond_with(fixture_response("oauth/token_success.json", None))
        .expect(1)
        .mount(&server)
        .await;
    mount_refresh(&server, "R1", ResponseTemplate::new(500), 0).await;

    let before = Utc::now();
    h.client.login("elf", &secret("hunter22")).await.unwrap();
    let after = Utc::now();

    let stored = h.store.load().unwrap();
    assert_eq!(stored.access_token.unwrap().expose_secret(), "A1");
    assert_eq!(stored.refresh_token.unwrap().expose_secret(), "R1");
    let expires_at = stored.expires_at.unwrap();
    assert!(expires_at >= before + chrono::Duration::seconds(3600));
    assert!(expires_at <= after + chrono::Duration::seconds(3600));

    let token = h.client.tokens().get_access_token().await.unwrap();
    assert_eq!(token.expose_secret(), "A1");
    assert!(matches!(
        h.client.status().unwrap(),
        SessionStatus::Authenticated { .. }
    ));
}

#[tokio::test]
async fn test_login_refused_maps_to_auth_failed() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(load_fixture("oauth/invalid_grant.json")),
        )
        .mount(&server)
        .await;

    let err = h.client.login("elf", &secret("wrong")).await.unwrap_err();

    assert!(
        matches!(&err, ClientError::AuthFailed(msg) if msg == "Bad credentials"),
        "unexpected error: {err:?}"
    );
    assert!(h.is_logged_out());
}

#[tokio::test]
async fn test_login_with_incomplete_response_writes_nothing() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(fixture_response("oauth/token_missing_refresh.json", None))
        .mount(&server)
        .await;

    let err = h.client.login("elf", &secret("hunter22")).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::InvalidTokenResponse("refresh_token")
    ));
    assert!(h.is_logged_out());
    assert_eq!(h.client.status().unwrap(), SessionStatus::Unauthenticated);
}

#[tokio::test]
async fn test_expired_token_is_refreshed_exactly_once() {
    let server = MockServer::start().await;
    let h = harness(&server);
    seed_session(&h.store, "A1", "R1", -10);
    mount_refresh(
        &server,
        "R1",
        fixture_response("oauth/token_refreshed.json", None),
        1,
    )
    .await;

    assert!(matches!(
        h.client.status().unwrap(),
        SessionStatus::Expired { .. }
    ));

    let first = h.client.tokens().get_access_token().await.unwrap();
    let second = h.client.tokens().get_access_token().await.unwrap();

    assert_eq!(first.expose_secret(), "A2");
    assert_eq!(second.expose_secret(), "A2");
    let stored = h.store.load().unwrap();
    assert_eq!(stored.refresh_token.unwrap().expose_secret(), "R2");
    assert!(stored.expires_at.unwrap() > Utc::now());
}

#[tokio::test]
async fn test_token_expiring_now_is_refreshed() {
    let server = MockServer::start().await;
    let h = harness(&server);
    seed_session(&h.store, "A1", "R1", 0);
    mount_refresh(
        &server,
        "R1",
        fixture_response("oauth/token_refreshed.json", None),
        1,
    )
    .await;

    let token = h.client.tokens().get_access_token().await.unwrap();
    assert_eq!(token.expose_secret(), "A2");
}

#[tokio::test]
async fn test_refresh_missing_refresh_token_clears_session() {
    let server = MockServer::start().await;
    let h = harness(&server);
    seed_session(&h.store, "A1", "R1", -10);
    mount_refresh(
        &server,
        "R1",
        fixture_response("oauth/token_missing_refresh.json", None),
        1,
    )
    .await;

    let err = h.client.tokens().get_access_token().await.unwrap_err();

    assert!(matches!(err, ClientError::SessionExpired));
    assert!(h.is_logged_out());
}

#[tokio::test]
async fn test_explicit_refresh_reports_cause() {
    let server = MockServer::start().await;
    let h = harness(&server);
    seed_session(&h.store, "A1", "R1", 3600);
    mount_refresh(
        &server,
        "R1",
        fixture_response("oauth/token_missing_refresh.json", None),
        1,
    )
    .await;

    let err = h.client.tokens().refresh().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::InvalidTokenResponse("refresh_token")
    ));
    assert!(h.is_logged_out());
}

#[tokio::test]
async fn test_refresh_server_error_clears_session() {
    let server = MockServer::start().await;
    let h = harness(&server);
    seed_session(&h.store, "A1", "R1", -10);
    mount_refresh(&server, "R1", ResponseTemplate::new(503), 1).await;

    let err = h.client.tokens().get_access_token().await.unwrap_err();

    assert!(matches!(err, ClientError::SessionExpired));
    assert!(h.is_logged_out());
}

#[tokio::test]
async fn test_concurrent_callers_share_one_refresh() {
    let server = MockServer::start().await;
    let h = harness(&server);
    seed_session(&h.store, "A1", "R1", -10);
    mount_refresh(
        &server,
        "R1",
        fixture_response(
            "oauth/token_refreshed.json",
            Some(Duration::from_millis(200)),
        ),
        1,
    )
    .await;

    let results = join_all((0..10).map(|_| h.client.tokens().get_access_token())).await;

    for result in results {
        assert_eq!(result.unwrap().expose_secret(), "A2");
    }
}

#[tokio::test]
async fn test_concurrent_callers_fail_uniformly() {
    let server = MockServer::start().await;
    let h = harness(&server);
    seed_session(&h.store, "A1", "R1", -10);
    mount_refresh(
        &server,
        "R1",
        ResponseTemplate::new(400)
            .set_body_json(load_fixture("oauth/invalid_grant.json"))
            .set_delay(Duration::from_millis(100)),
        1,
    )
    .await;

    let results = join_all((0..5).map(|_| h.client.tokens().get_access_token())).await;

    for result in results {
        assert!(matches!(result, Err(ClientError::SessionExpired)));
    }
    assert!(h.is_logged_out());
}

#[tokio::test]
async fn test_non_rotating_refresh_is_shared() {
    let server = MockServer::start().await;
    let h = harness(&server);
    seed_session(&h.store, "A1", "R1", -10);
    mount_refresh(
        &server,
        "R1",
        ResponseTemplate::new(200)
            .set_body_json(json!({
                "access_token": "A2",
                "refresh_token": "R1",
                "expires_in": 3600
            }))
            .set_delay(Duration::from_millis(100)),
        1,
    )
    .await;

    let results = join_all((0..5).map(|_| h.client.tokens().get_access_token())).await;

    for result in results {
        assert_eq!(result.unwrap().expose_secret(), "A2");
    }
    assert_eq!(h.access_token().as_deref(), Some("A2"));
}

#[tokio::test]
async fn test_zero_lifetime_refresh_is_rejected() {
    let server = MockServer::start().await;
    let h = harness(&server);
    seed_session(&h.store, "A1", "R1", -10);
    mount_refresh(
        &server,
        "R1",
        ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A2",
            "refresh_token": "R2",
            "expires_in": 0
        })),
        1,
    )
    .await;

    let err = h.client.tokens().get_access_token().await.unwrap_err();

    assert!(matches!(err, ClientError::SessionExpired));
    assert!(h.is_logged_out());
}

#[tokio::test]
async fn test_stalled_refresh_times_out_and_clears_session() {
    let server = MockServer::start().await;
    let h = harness_with(&server.uri(), |builder| {
        builder.token_exchange_timeout(Duration::from_millis(100))
    });
    seed_session(&h.store, "A1", "R1", -10);
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(fixture_response(
            "oauth/token_refreshed.json",
            Some(Duration::from_secs(2)),
        ))
        .mount(&server)
        .await;

    let err = h.client.tokens().get_access_token().await.unwrap_err();

    assert!(matches!(err, ClientError::SessionExpired));
    assert!(h.is_logged_out());
}

#[tokio::test]
async fn test_logout_clears_all_fields() {
    let server = MockServer::start().await;
    let h = harness(&server);
    seed_session(&h.store, "A1", "R1", 3600);

    h.client.logout().await.unwrap();

    assert!(h.is_logged_out());
    assert!(matches!(
        h.client.tokens().get_access_token().await,
        Err(ClientError::LoginRequired)
    ));
}

#[tokio::test]
async fn test_signup_posts_registration() {
    let server = MockServer::start().await;
    let h = harness(&server);

    Mock::given(method("POST"))
        .and(path("/api/sign_up"))
        .and(body_json(json!({
            "login": "elf",
            "password": "hunter22",
            "confirm_password": "hunter22",
            "nickname": "Jingle",
            "email": "elf@example.com"
        })))
        .respond_with(fixture_response("users/sign_up_ok.json", None))
        .expect(1)
        .mount(&server)
        .await;

    let reply = h
        .client
        .signup(&Registration {
            login: "elf".to_string(),
            password: secret("hunter22"),
            confirm_password: secret("hunter22"),
            nickname: "Jingle".to_string(),
            email: "elf@example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(reply["status"], "OK");
    assert!(h.is_logged_out());
}
