//! # kvs, a personal command dictionary
//!
//! kvs stores shell command usages under named main commands, each usage
//! carrying a free-text note, and each command a display name and a tag
//! set. The CLI on top offers add/update/delete/edit/find/copy and
//! import/export with styled table output.
//!
//! This crate is a library that happens to ship a CLI, not the other way
//! around. The layering:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI layer (src/cli/, wired by main.rs)                     │
//! │  - Parses arguments, renders tables, talks to the clipboard │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API layer (api.rs)                                         │
//! │  - Facade over commands; owns the load-once/save-after-     │
//! │    mutation process model                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                              │
//! │  - Pure business logic over the in-memory CommandStore      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage layer (store/)                                     │
//! │  - SnapshotStore trait                                      │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two behaviors are asymmetric on purpose and easy to mix up:
//! `add` *merges* provided tags into the record, `update tag` *replaces*
//! the tag set; both normalize to sorted-and-deduplicated afterwards.
//!
//! ## Module overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`model`]: Core data types (`CommandStore`, `CommandRecord`, `UsageExample`)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
