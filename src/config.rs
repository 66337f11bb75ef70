use std::path::PathBuf;

use crate::core::{SAVE_FILE_NAME, SOLUTION_FILE_NAME};

/// Where the level archive lives and where player data is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub archive_path: PathBuf,
    pub storage_root: PathBuf,
}

impl Config {
    pub fn new(archive_path: impl Into<PathBuf>, storage_root: impl Into<PathBuf>) -> Config {
        Config { archive_path: archive_path.into(), storage_root: storage_root.into() }
    }

    pub fn save_file(&self) -> PathBuf {
        self.storage_root.join(SAVE_FILE_NAME)
    }

    pub fn solution_file(&self) -> PathBuf {
        self.storage_root.join(SOLUTION_FILE_NAME)
    }
}
