//! Session commands: login, logout, signup, status and whoami.
//!
//! Invariants:
//! - Passwords are never echoed and are held as `SecretString`
//! - `logout --everywhere` clears the local session even if the server call fails

use anyhow::{Context, Result, bail};
use santa_client::{Registration, SessionStatus};
use santa_config::Config;
use secrecy::SecretString;
use serde_json::{Value, json};
use tracing::info;

use crate::commands::{build_client, print_json, print_reply};

fn prompt_password(confirm: bool) -> Result<SecretString> {
    let mut prompt = dialoguer::Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    let input = prompt.interact().context("Failed to read password")?;
    Ok(SecretString::new(input.into()))
}

pub async fn run_login(config: &Config, username: &str, password: Option<String>) -> Result<()> {
    if username.trim().is_empty() {
        bail!("Username must not be empty");
    }
    let password = match password {
        Some(p) => SecretString::new(p.into()),
        None => prompt_password(false)?,
    };

    let client = build_client(config)?;
    client
        .login(username, &password)
        .await
        .context("Login failed")?;

    info!("Logged in as {}", username);
    run_status(config)
}

pub async fn run_logout(config: &Config, everywhere: bool) -> Result<()> {
    let client = build_client(config)?;
    if everywhere {
        client
            .sign_out_from_all()
            .await
            .context("Signing out of all sessions failed; the local session was removed")?;
        eprintln!("Signed out everywhere.");
    } else {
        client.logout().await?;
        eprintln!("Logged out.");
    }
    Ok(())
}

pub async fn run_signup(
    config: &Config,
    login: String,
    nickname: String,
    email: String,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => SecretString::new(p.into()),
        None => prompt_password(true)?,
    };
    let registration = Registration {
        login,
        confirm_password: password.clone(),
        password,
        nickname,
        email,
    };

    let client = build_client(config)?;
    let reply = client
        .signup(&registration)
        .await
        .context("Sign-up failed")?;
    print_json(&reply)
}

pub fn run_status(config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let report = match client.status()? {
        SessionStatus::Unauthenticated => json!({ "state": "unauthenticated" }),
        SessionStatus::Authenticated { expires_at } => json!({
            "state": "authenticated",
            "expires_at": expires_at.to_rfc3339(),
        }),
        SessionStatus::Expired { expires_at } => json!({
            "state": "expired",
            "expires_at": expires_at.to_rfc3339(),
        }),
    };
    print_json(&report)
}

pub async fn run_whoami(config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let Some(id) = client.my_id().await else {
        return print_reply(&client, None);
    };
    let Some(nickname) = client.my_nickname().await else {
        return print_reply(&client, None);
    };
    print_json(&json!({ "id": data_of(id), "nickname": data_of(nickname) }))
}

/// The `data` member of a reply, or the whole reply if it has none.
fn data_of(reply: Value) -> Value {
    match reply {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
