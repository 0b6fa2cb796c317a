use super::SnapshotStore;
use crate::error::Result;
use crate::model::CommandStore;
use std::fs;
use std::path::PathBuf;

const DATA_FILENAME: &str = "commands.json";

/// JSON snapshot on disk, one file for the whole dictionary.
///
/// Saves go through a temp file in the same directory followed by a
/// rename, so a failed save leaves the previous snapshot in place. A
/// corrupt data file surfaces as a `Format` error instead of being
/// silently replaced by an empty store on the next save.
pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_file: data_dir.join(DATA_FILENAME),
        }
    }

    pub fn data_file(&self) -> &PathBuf {
        &self.data_file
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<CommandStore> {
        if !self.data_file.exists() {
            return Ok(CommandStore::new());
        }
        let raw = fs::read_to_string(&self.data_file)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&mut self, db: &CommandStore) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(db)?;
        let tmp = self.data_file.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.data_file)?;
        Ok(())
    }
}
