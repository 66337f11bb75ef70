use std::fs;
use std::io::{Cursor, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::core::Result;

/// Writes `contents` as the single deflated member of a zip file.
/// The old file is only replaced once the new one is completely on disk.
pub fn write_compressed(path: &Path, member: &str, contents: &str) -> Result<()> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(member, options)?;
    zip.write_all(contents.as_bytes())?;
    let bytes = zip.finish()?.into_inner();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let temp = temp_path(path);
    {
        let mut file = fs::File::create(&temp)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
    }
    if let Err(err) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(err.into());
    }
    Ok(())
}

/// Reads the first member of a file written by [`write_compressed`].
/// A missing file is `Ok(None)`.
pub fn read_compressed(path: &Path) -> Result<Option<String>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let mut zip = ZipArchive::new(Cursor::new(bytes))?;
    let mut entry = zip.by_index(0)?;
    let mut text = String::new();
    entry.read_to_string(&mut text)?;
    Ok(Some(text))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
