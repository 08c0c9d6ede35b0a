//! CLI command implementations.

pub mod invites;
pub mod members;
pub mod messages;
pub mod pools;
pub mod rooms;
pub mod session;

use std::sync::Arc;

use anyhow::{Context, Result};
use santa_client::{ClientError, SantaClient, SessionStatus};
use santa_config::Config;
use serde_json::Value;

use crate::terminal::{LoginHint, StderrNotifier};

/// Build a client that reports to the terminal.
pub fn build_client(config: &Config) -> Result<SantaClient> {
    SantaClient::builder()
        .from_config(config)
        .notifier(Arc::new(StderrNotifier))
        .navigator(Arc::new(LoginHint))
        .build()
        .context("Failed to build client")
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a domain reply, or fail with the reason there is none.
///
/// The user has already been notified; the error only selects the exit code.
pub fn print_reply(client: &SantaClient, reply: Option<Value>) -> Result<()> {
    match reply {
        Some(value) => print_json(&value),
        None => match client.status()? {
            SessionStatus::Unauthenticated => Err(ClientError::LoginRequired.into()),
            _ => Err(anyhow::anyhow!("Request did not complete")),
        },
    }
}
