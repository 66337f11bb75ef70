use tracing::{debug, warn};

use crate::core::{decode_row, Cell, Grid, LevelRule, Result, SokobanError};
use crate::level_pack::{Level, LevelPack, PackMetadata};

/// Strips the leading run of `;` and any whitespace after it.
fn section_name(line: &str) -> &str {
    line.trim_start_matches(';').trim()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits off the header line. Everything after it belongs to the levels.
fn split_header<'a>(file: &str, text: &'a str) -> Result<(&'a str, std::iter::Enumerate<std::str::Lines<'a>>)> {
    let mut lines = text.lines().enumerate();
    let header = lines
        .by_ref()
        .map(|(_, line)| line)
        .find(|line| !is_blank(line))
        .ok_or_else(|| malformed(file, "pack is empty"))?;
    if !header.starts_with(';') {
        return Err(malformed(file, "file does not start with ;"));
    }
    Ok((section_name(header), lines))
}

fn malformed(file: &str, reason: &str) -> SokobanError {
    SokobanError::MalformedPack { file: file.to_string(), reason: reason.to_string() }
}

pub fn parse_header(file: &str, text: &str) -> Result<String> {
    split_header(file, text).map(|(title, _)| title.to_string())
}

/// Counts the level sections without decoding any grid.
pub fn scan_metadata(file: &str, text: &str) -> Result<PackMetadata> {
    let (title, lines) = split_header(file, text)?;
    let level_count = lines.filter(|(_, line)| line.trim().starts_with(';')).count();
    Ok(PackMetadata { file: file.to_string(), title: title.to_string(), level_count })
}

pub fn parse_pack(file: &str, text: &str) -> Result<LevelPack> {
    let title = parse_header(file, text)?;
    let levels = parse_levels(file, text)?;
    Ok(LevelPack { file: file.to_string(), title, levels })
}

/// Decodes every level of the pack. A broken level is logged and skipped,
/// it never takes the rest of the pack down with it.
pub fn parse_levels(file: &str, text: &str) -> Result<Vec<Level>> {
    let (_, lines) = split_header(file, text)?;

    let mut levels = Vec::new();
    let mut name = String::new();
    let mut rows: Vec<Vec<Cell>> = Vec::new();

    for (index, line) in lines {
        let line_number = index + 1;
        if is_blank(line) {
            continue;
        }
        if line.starts_with(';') {
            finish_level(file, line_number, &mut name, &mut rows, &mut levels);
            name = section_name(line).to_string();
            continue;
        }
        if name.is_empty() {
            debug!(pack = file, line = line_number, "ignoring row outside of a named level");
            continue;
        }
        match decode_row(line.trim_end(), rows.len()) {
            Ok(row) => rows.push(row),
            Err(err) => {
                warn!(pack = file, line = line_number, level = %name, error = %err, "level dropped");
                name.clear();
                rows.clear();
            }
        }
    }
    finish_level(file, text.lines().count(), &mut name, &mut rows, &mut levels);

    Ok(levels)
}

fn finish_level(file: &str, line: usize, name: &mut String, rows: &mut Vec<Vec<Cell>>, levels: &mut Vec<Level>) {
    let name = std::mem::take(name);
    let rows = std::mem::take(rows);
    if name.is_empty() || rows.is_empty() {
        return;
    }

    let built = Grid::new(rows).and_then(|grid| {
        if grid.is_won() {
            Err(LevelRule::AlreadySolved.into())
        } else {
            Ok(grid)
        }
    });
    match built {
        Ok(grid) => levels.push(Level { name, grid }),
        Err(err) => warn!(pack = file, line, level = %name, error = %err, "level dropped"),
    }
}
