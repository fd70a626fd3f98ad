//! Configuration loaded from `config.json` in the data directory.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_page_size() -> usize {
    5
}

fn default_contacts_file() -> String {
    "contacts.json".to_string()
}

fn default_notes_file() -> String {
    "notes.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// Records per page in `show` listings.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// File name of the contacts collection, relative to the data directory.
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,
    /// File name of the notes collection, relative to the data directory.
    #[serde(default = "default_notes_file")]
    pub notes_file: String,
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
        }
    }
}

impl RoloConfig {
    /// Reads the config from `dir/config.json`, falling back to defaults when
    /// the file does not exist. Unknown fields are ignored, missing fields
    /// take their defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILE_NAME), raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(config, RoloConfig::default());
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let config = RoloConfig {
            page_size: 10,
            contacts_file: "book.json".to_string(),
            notes_file: "pad.json".to_string(),
        };
        config.save(dir.path()).unwrap();
        assert_eq!(RoloConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"page_size": 3}"#).unwrap();
        let config = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.contacts_file, "contacts.json");
    }
}
