//! Configuration management for the Mini Santa client.
//!
//! This crate provides types and loaders for the connection, OAuth2 client
//! and session-storage settings, read from defaults, `.env` files and
//! environment variables.

pub mod constants;
mod loader;
mod path;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use path::default_session_path;
pub use types::{AuthConfig, Config, ConnectionConfig};
