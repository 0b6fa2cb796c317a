//! # Storage layer
//!
//! Persistence for the dictionary is deliberately dumb: the whole
//! [`CommandStore`] is loaded at process start and written back in full
//! after a mutating operation. There is no partial write, no append log,
//! and no locking: concurrent processes race with last-writer-wins, an
//! accepted limitation for a personal tool.
//!
//! The [`SnapshotStore`] trait keeps the application logic off the
//! filesystem:
//!
//! - [`fs::FileStore`]: production JSON-on-disk storage
//! - [`memory::MemoryStore`]: in-memory storage for tests
//!
//! The snapshot format is a single JSON object keyed by command name; the
//! main data file and import/export files share it byte-for-byte.

use crate::error::Result;
use crate::model::CommandStore;

pub mod fs;
pub mod memory;

/// Abstract interface for snapshot persistence.
pub trait SnapshotStore {
    /// Load the whole dictionary. A store that has never been written
    /// yields an empty dictionary, not an error.
    fn load(&self) -> Result<CommandStore>;

    /// Persist the whole dictionary, replacing the previous snapshot.
    fn save(&mut self, db: &CommandStore) -> Result<()>;
}
