//! Persistence for the credential triple.
//!
//! Responsibilities:
//! - Define the [`SessionStore`] contract (`load`, `save`, `clear`).
//! - Provide an in-memory store for tests and short-lived tools.
//! - Provide a durable JSON file store for interactive use.
//!
//! Does NOT handle:
//! - Deciding whether a session is usable (see [`crate::TokenManager`]).
//! - Repairing partial records; a store reports exactly what it holds.
//!
//! Invariants:
//! - `save` only accepts a complete [`Session`]; partial writes are unrepresentable.
//! - `clear` removes all three fields together.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use std::fmt::Debug;

use crate::error::Result;
use crate::session::{Session, StoredSession};

/// Persisted key/value holder for the current session.
pub trait SessionStore: Debug + Send + Sync {
    /// Return the stored fields, each absent if never set or cleared.
    fn load(&self) -> Result<StoredSession>;

    /// Persist all three fields of `session`, replacing whatever was stored.
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove all three fields.
    fn clear(&self) -> Result<()>;
}
