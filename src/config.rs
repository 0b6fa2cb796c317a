use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for kvs, stored in config.json next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KvsConfig {
    /// Ask before deleting a usage (the --yes flag overrides per call)
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for KvsConfig {
    fn default() -> Self {
        Self {
            confirm_delete: true,
        }
    }
}

impl KvsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// All known keys with their current values, for `kvs config`.
    pub fn list_all(&self) -> Vec<(String, String)> {
        vec![(
            "confirm-delete".to_string(),
            self.confirm_delete.to_string(),
        )]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "confirm-delete" => Some(self.confirm_delete.to_string()),
            _ => None,
        }
    }

    /// Set a key from its string form. False for unknown keys or
    /// unparsable values.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match key {
            "confirm-delete" => match value.parse() {
                Ok(flag) => {
                    self.confirm_delete = flag;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}
