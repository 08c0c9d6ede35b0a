//! Shared test utilities for santa-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point the session file into a per-test temporary directory.
//!
//! Invariants / Assumptions:
//! - No test ever reads or writes the real platform session file.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A hermetic `santa-cli` invocation with its own session file.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    /// Returns a `santa-cli` command that:
    /// - sets `DOTENV_DISABLED=1` to prevent local `.env` contamination
    /// - clears `SANTA_*` variables inherited from the host
    /// - stores its session inside this sandbox
    pub fn cmd(&self, base_url: &str) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("santa-cli");

        cmd.env("DOTENV_DISABLED", "1");
        cmd.env_remove("SANTA_PASSWORD")
            .env_remove("SANTA_TIMEOUT")
            .env_remove("SANTA_CLIENT_ID")
            .env_remove("SANTA_SCOPE")
            .env_remove("SANTA_TOKEN_TIMEOUT")
            .env_remove("RUST_LOG");
        cmd.env("SANTA_BASE_URL", base_url);
        cmd.env("SANTA_SESSION_PATH", self.session_path());

        cmd
    }

    /// Write a session file that never expires during a test.
    pub fn seed_session(&self, access_token: &str, refresh_token: &str) {
        let body = serde_json::json!({
            "access_token": access_token,
            "refresh_token": refresh_token,
            "expires": "2999-01-01T00:00:00Z",
        });
        std::fs::write(self.session_path(), body.to_string()).unwrap();
    }
}
