use super::SnapshotStore;
use crate::error::Result;
use crate::model::CommandStore;

/// In-memory persistence for testing and development.
/// Holds the last saved snapshot, nothing touches disk.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: CommandStore,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: CommandStore) -> Self {
        Self { snapshot }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<CommandStore> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, db: &CommandStore) -> Result<()> {
        self.snapshot = db.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{CommandRecord, UsageExample};

    pub struct StoreFixture {
        pub db: CommandStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                db: CommandStore::new(),
            }
        }

        pub fn with_command(mut self, cmd: &str, name: &str, usages: &[(&str, &str)]) -> Self {
            self.db.insert(
                cmd.to_string(),
                CommandRecord {
                    name: name.to_string(),
                    tags: Vec::new(),
                    examples: usages
                        .iter()
                        .map(|(u, n)| UsageExample::new(*u, *n))
                        .collect(),
                },
            );
            self
        }

        pub fn with_tagged_command(
            mut self,
            cmd: &str,
            tags: &[&str],
            usages: &[(&str, &str)],
        ) -> Self {
            self.db.insert(
                cmd.to_string(),
                CommandRecord {
                    name: String::new(),
                    tags: tags.iter().map(|t| t.to_string()).collect(),
                    examples: usages
                        .iter()
                        .map(|(u, n)| UsageExample::new(*u, *n))
                        .collect(),
                },
            );
            self
        }

        pub fn into_store(self) -> MemoryStore {
            MemoryStore::with_snapshot(self.db)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn save_then_load_roundtrips() {
        let mut store = MemoryStore::new();
        let mut db = CommandStore::new();
        add::run(&mut db, "git", None, "git status", None, None).unwrap();

        store.save(&db).unwrap();
        assert_eq!(store.load().unwrap(), db);
    }

    #[test]
    fn fresh_store_loads_empty() {
        assert!(MemoryStore::new().load().unwrap().is_empty());
    }
}
