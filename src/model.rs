//! Core data types: [`CommandStore`], [`CommandRecord`], and [`UsageExample`].
//!
//! The store is a plain mapping from main-command name to its record. A
//! record groups the usage examples collected under one shell tool together
//! with a display name and a tag set. Two invariants are maintained by every
//! code path that mutates a store:
//!
//! - a record never exists with zero examples; removing the last example
//!   removes the record itself (see `commands::delete`),
//! - `tags` is always sorted and free of duplicates; it is a set stored as a
//!   sequence, and alphabetical order is the only order it has.
//!
//! Usage indices are positions in `examples` and are only stable between
//! mutations: deleting index `i` shifts every later index down by one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One concrete invocation of a main command, plus an optional note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageExample {
    pub usage: String,
    #[serde(default)]
    pub note: String,
}

impl UsageExample {
    pub fn new(usage: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            usage: usage.into(),
            note: note.into(),
        }
    }
}

/// Everything stored under one main-command name.
///
/// `name` is a human-readable label (often CJK in practice) and never acts
/// as a key. Missing fields in older snapshots deserialize to empty
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub examples: Vec<UsageExample>,
}

impl CommandRecord {
    /// Union `extra` into the tag set, then re-normalize.
    /// Never removes a tag the record already has.
    pub fn merge_tags(&mut self, extra: &[String]) {
        self.tags.extend(extra.iter().cloned());
        self.tags = normalize_tags(std::mem::take(&mut self.tags));
    }

    /// Replace the whole tag set (overwrite, not merge; the counterpart
    /// of `merge_tags`).
    pub fn set_tags(&mut self, tags: &[String]) {
        self.tags = normalize_tags(tags.to_vec());
    }
}

/// Sort and de-duplicate a tag list; blank tags are dropped.
pub fn normalize_tags(mut tags: Vec<String>) -> Vec<String> {
    tags.retain(|t| !t.trim().is_empty());
    tags.sort();
    tags.dedup();
    tags
}

/// How a `delete` call addresses the usage to remove: by position, or by
/// the first case-insensitive substring match on usage/note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Index(usize),
    Keyword(String),
}

impl From<&str> for DeleteTarget {
    fn from(s: &str) -> Self {
        match s.parse::<usize>() {
            Ok(n) => DeleteTarget::Index(n),
            Err(_) => DeleteTarget::Keyword(s.to_string()),
        }
    }
}

/// The whole dictionary: main-command name to record.
///
/// Serialized transparently, so the on-disk snapshot is exactly this
/// mapping: `{"git": {"name": ..., "tags": [...], "examples": [...]}}`.
/// Keys are case-sensitive and unique by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandStore {
    commands: BTreeMap<String, CommandRecord>,
}

impl CommandStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cmd: &str) -> Option<&CommandRecord> {
        self.commands.get(cmd)
    }

    pub fn get_mut(&mut self, cmd: &str) -> Option<&mut CommandRecord> {
        self.commands.get_mut(cmd)
    }

    /// Fetch the record for `cmd`, creating an empty one if absent.
    pub fn entry(&mut self, cmd: &str) -> &mut CommandRecord {
        self.commands.entry(cmd.to_string()).or_default()
    }

    pub fn insert(&mut self, cmd: String, record: CommandRecord) {
        self.commands.insert(cmd, record);
    }

    pub fn remove(&mut self, cmd: &str) -> Option<CommandRecord> {
        self.commands.remove(cmd)
    }

    pub fn contains(&self, cmd: &str) -> bool {
        self.commands.contains_key(cmd)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CommandRecord)> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The examples under `cmd`, or an empty slice if the command is
    /// unknown. Read-only, never fails.
    pub fn examples(&self, cmd: &str) -> &[UsageExample] {
        self.commands
            .get(cmd)
            .map(|r| r.examples.as_slice())
            .unwrap_or(&[])
    }

    pub fn usage_at(&self, cmd: &str, index: usize) -> Option<&UsageExample> {
        self.examples(cmd).get(index)
    }

    /// Consume the store, yielding the underlying mapping. Used by the
    /// import merge to walk an incoming snapshot by value.
    pub fn into_inner(self) -> BTreeMap<String, CommandRecord> {
        self.commands
    }
}
