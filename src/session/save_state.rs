use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Frame, Result, SAVE_MEMBER_NAME};
use crate::storage::{read_compressed, write_compressed};

/// Snapshot of the level being played. The last `undo` entry is the current frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveState {
    #[serde(rename = "packfile")]
    pub pack_file: String,
    #[serde(rename = "levelidx")]
    pub level_index: usize,
    pub curtime: String,
    pub undo: Vec<Frame>,
}

impl SaveState {
    pub fn read(path: &Path) -> Result<Option<SaveState>> {
        match read_compressed(path)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        write_compressed(path, SAVE_MEMBER_NAME, &serde_json::to_string(self)?)
    }
}
