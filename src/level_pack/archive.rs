use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;

use tracing::warn;
use zip::ZipArchive;

use crate::core::{Result, LEVEL_PACK_EXTENSION};
use crate::level_pack::{parse_pack, scan_metadata, LevelPack, PackMetadata};

/// Read-only view of the bundled level packs.
///
/// The archive bytes are shared and immutable; every read opens its own cursor,
/// so one archive can be read from several threads at once.
#[derive(Clone, Debug)]
pub struct LevelArchive {
    bytes: Arc<[u8]>,
    members: Vec<String>,
}

impl LevelArchive {
    pub fn open(path: &Path) -> Result<LevelArchive> {
        LevelArchive::from_bytes(std::fs::read(path)?)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<LevelArchive> {
        let bytes: Arc<[u8]> = bytes.into();
        let mut zip = ZipArchive::new(Cursor::new(&bytes[..]))?;
        let mut members = Vec::new();
        for index in 0..zip.len() {
            let entry = zip.by_index(index)?;
            if entry.is_file() && entry.name().ends_with(LEVEL_PACK_EXTENSION) {
                members.push(entry.name().to_string());
            }
        }
        Ok(LevelArchive { bytes, members })
    }

    /// Pack member names in archive order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn read_member(&self, name: &str) -> Result<String> {
        let mut zip = ZipArchive::new(Cursor::new(&self.bytes[..]))?;
        let mut entry = zip.by_name(name)?;
        let mut raw = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut raw)?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Title and level count of every readable pack. Broken packs are logged and left out.
    pub fn catalog(&self) -> Vec<PackMetadata> {
        self.members
            .iter()
            .filter_map(|member| {
                match self.read_member(member).and_then(|text| scan_metadata(member, &text)) {
                    Ok(metadata) => Some(metadata),
                    Err(err) => {
                        warn!(pack = %member, error = %err, "pack skipped");
                        None
                    }
                }
            })
            .collect()
    }

    pub fn load_pack(&self, member: &str) -> Result<LevelPack> {
        let text = self.read_member(member)?;
        parse_pack(member, &text)
    }
}
