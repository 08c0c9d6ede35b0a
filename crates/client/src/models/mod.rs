//! Data models for token exchanges and domain request bodies.
//!
//! Response payloads of domain calls are passed through as
//! `serde_json::Value`; only request bodies are typed here.

mod auth;
mod santa;

pub use auth::{Registration, TokenResponse};
pub use santa::{CreateInviteParams, JoinPoolParams, PoolParams, SendMessageParams};
