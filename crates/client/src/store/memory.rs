//! In-process session store.

use std::sync::{Mutex, MutexGuard};

use super::SessionStore;
use crate::error::Result;
use crate::session::{Session, StoredSession};

/// Session store backed by process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Mutex<StoredSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary record, including partial ones.
    pub fn with_record(record: StoredSession) -> Self {
        Self {
            record: Mutex::new(record),
        }
    }

    fn record(&self) -> MutexGuard<'_, StoredSession> {
        // Writes are single assignments, so a poisoned record is still whole.
        self.record.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<StoredSession> {
        Ok(self.record().clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.record() = StoredSession::from(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.record() = StoredSession::default();
        Ok(())
    }
}
