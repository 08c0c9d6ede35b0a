//! Path helpers for the persisted session file.
//!
//! Uses the `directories` crate for platform-appropriate locations:
//! - Linux: `~/.local/share/mini-santa/session.json`
//! - macOS: `~/Library/Application Support/mini-santa/session.json`
//! - Windows: `%AppData%\mini-santa\data\session.json`

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, SESSION_FILE_NAME};

/// Returns the default path of the session file.
pub fn default_session_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.data_dir().join(SESSION_FILE_NAME))
}
