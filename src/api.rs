//! # API facade
//!
//! [`KvsApi`] is the single entry point for every dictionary operation,
//! regardless of the client driving it. It owns the in-memory
//! [`CommandStore`] and the persistence backend, and encodes the process
//! model: load the whole snapshot once, run one operation, write the whole
//! snapshot back after anything that mutates.
//!
//! The facade dispatches and persists; the logic itself lives in
//! `commands/*.rs`, and nothing from here down writes to stdout/stderr or
//! assumes a terminal.
//!
//! Generic over [`SnapshotStore`], so tests run against
//! `KvsApi<MemoryStore>` with no filesystem involved.

use crate::commands;
use crate::error::Result;
use crate::model::{CommandStore, DeleteTarget};
use crate::store::SnapshotStore;
use std::path::Path;

pub struct KvsApi<S: SnapshotStore> {
    store: S,
    db: CommandStore,
}

impl<S: SnapshotStore> KvsApi<S> {
    /// Load the snapshot from `store` and wrap it.
    pub fn open(store: S) -> Result<Self> {
        let db = store.load()?;
        Ok(Self { store, db })
    }

    pub fn list(&self, cmd: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.db, cmd)
    }

    pub fn add(
        &mut self,
        cmd: &str,
        display_name: Option<&str>,
        usage: &str,
        note: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.db, cmd, display_name, usage, note, tags)?;
        self.store.save(&self.db)?;
        Ok(result)
    }

    pub fn update_name(&mut self, cmd: &str, new_name: &str) -> Result<commands::CmdResult> {
        let result = commands::update::name(&mut self.db, cmd, new_name)?;
        self.store.save(&self.db)?;
        Ok(result)
    }

    pub fn update_tags(&mut self, cmd: &str, new_tags: &[String]) -> Result<commands::CmdResult> {
        let result = commands::update::tags(&mut self.db, cmd, new_tags)?;
        self.store.save(&self.db)?;
        Ok(result)
    }

    pub fn delete(&mut self, cmd: &str, target: &DeleteTarget) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.db, cmd, target)?;
        self.store.save(&self.db)?;
        Ok(result)
    }

    pub fn edit(
        &mut self,
        cmd: &str,
        index: usize,
        new_usage: Option<&str>,
        new_note: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let result = commands::edit::run(&mut self.db, cmd, index, new_usage, new_note)?;
        self.store.save(&self.db)?;
        Ok(result)
    }

    pub fn find(&self, query: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.db, query)
    }

    pub fn copy(&self, cmd: &str, index: usize) -> Result<commands::CmdResult> {
        commands::copy::run(&self.db, cmd, index)
    }

    pub fn import(&mut self, path: &Path, overwrite: bool) -> Result<commands::CmdResult> {
        let result = commands::import::run(&mut self.db, path, overwrite)?;
        self.store.save(&self.db)?;
        Ok(result)
    }

    pub fn export(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.db, path)
    }

    /// Read access to the live dictionary, for clients that need to peek
    /// (the CLI uses this to show what a delete is about to remove).
    pub fn db(&self) -> &CommandStore {
        &self.db
    }
}

pub use crate::commands::{CmdMessage, CmdResult, CommandSummary, MessageLevel, UsageRow};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::SnapshotStore;

    #[test]
    fn mutations_persist_the_snapshot() {
        let mut api = KvsApi::open(MemoryStore::new()).unwrap();
        api.add("git", None, "git status", None, None).unwrap();

        // The store saw the save, not just the in-memory db.
        assert_eq!(api.store.load().unwrap(), *api.db());
        assert!(api.store.load().unwrap().contains("git"));
    }

    #[test]
    fn queries_do_not_persist() {
        let fixture = crate::store::memory::fixtures::StoreFixture::new()
            .with_command("git", "", &[("git status", "")]);
        let api = KvsApi::open(fixture.into_store()).unwrap();

        assert_eq!(api.find("status").unwrap().rows.len(), 1);
        assert_eq!(api.list(None).unwrap().summaries.len(), 1);
        assert_eq!(api.copy("git", 0).unwrap().payload.as_deref(), Some("git status"));
    }
}
