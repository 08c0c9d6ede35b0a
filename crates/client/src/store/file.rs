//! JSON file session store.
//!
//! Responsibilities:
//! - Persist the triple under the keys `access_token`, `refresh_token`, `expires`.
//! - Write atomically (temp file + rename) so readers never see half a file.
//! - Back up unreadable files before they are replaced.
//!
//! Invariants:
//! - A missing file loads as an empty session.
//! - A corrupt file is renamed to `<name>.corrupt.<unix-ts>` and loads as empty.
//! - On Unix the file is only readable by its owner (mode 0600).

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::SessionStore;
use crate::error::{ClientError, Result};
use crate::session::{Session, StoredSession};

/// On-disk layout. Each key is optional so damaged files still parse.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires: Option<DateTime<Utc>>,
}

impl From<SessionFile> for StoredSession {
    fn from(file: SessionFile) -> Self {
        Self {
            access_token: file.access_token.map(|t| SecretString::new(t.into())),
            refresh_token: file.refresh_token.map(|t| SecretString::new(t.into())),
            expires_at: file.expires,
        }
    }
}

/// Session store that survives process restarts.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_corrupt(&self) -> Result<PathBuf> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let mut backup_name = self.path.file_name().unwrap_or_default().to_os_string();
        backup_name.push(format!(".corrupt.{}", timestamp));
        let backup_path = self.path.with_file_name(backup_name);
        fs::rename(&self.path, &backup_path)?;
        Ok(backup_path)
    }

    fn write_atomically(&self, content: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<StoredSession> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoredSession::default()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<SessionFile>(&content) {
            Ok(file) => Ok(file.into()),
            Err(e) => {
                let backup = self.backup_corrupt()?;
                warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "Session file is unreadable; moved aside"
                );
                Ok(StoredSession::default())
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let file = SessionFile {
            access_token: Some(session.access_token().expose_secret().to_string()),
            refresh_token: Some(session.refresh_token().expose_secret().to_string()),
            expires: Some(session.expires_at()),
        };
        let content = serde_json::to_vec_pretty(&file)
            .map_err(|e| ClientError::SessionStore(e.to_string()))?;
        self.write_atomically(&content)?;

        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
