//! Where the store keeps its two data files.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const USERS_FILE_NAME: &str = "users.txt";
pub const ROOMS_FILE_NAME: &str = "rooms.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub users_path: PathBuf,
    pub rooms_path: PathBuf,
}

impl StoreConfig {
    /// Both files side by side in `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            users_path: dir.join(USERS_FILE_NAME),
            rooms_path: dir.join(ROOMS_FILE_NAME),
        }
    }

    /// Load from a JSON file of the form
    /// `{"users_path": "...", "rooms_path": "..."}`.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let config: StoreConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.users_path.as_os_str().is_empty() || self.rooms_path.as_os_str().is_empty() {
            return Err(StoreError::Config("data file paths must not be empty".into()));
        }
        if self.users_path == self.rooms_path {
            return Err(StoreError::Config(format!(
                "users and rooms must be stored in different files, both point at {}",
                self.users_path.display()
            )));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}
