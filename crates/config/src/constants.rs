//! Centralized constants for the Mini Santa workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default API server used by a local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default upper bound for a single OAuth2 token exchange in seconds.
///
/// A stalled refresh blocks every request waiting on it, so this is kept
/// shorter than the general request timeout.
pub const DEFAULT_TOKEN_EXCHANGE_TIMEOUT_SECS: u64 = 15;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// OAuth2 Client Defaults
// =============================================================================

/// OAuth2 client identifier registered for the web and CLI front ends.
pub const DEFAULT_CLIENT_ID: &str = "api";

/// Scopes requested on every token exchange.
pub const DEFAULT_SCOPE: &str = "read write";

// =============================================================================
// Storage
// =============================================================================

/// Application name used to derive platform data directories.
pub const APP_NAME: &str = "mini-santa";

/// File name of the persisted session inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.json";
