mod archive;
mod parse;

pub use archive::LevelArchive;
pub use parse::{parse_header, parse_levels, parse_pack, scan_metadata};

use crate::core::Grid;

/// A named level template. Play always starts from a copy of `grid`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub name: String,
    pub grid: Grid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelPack {
    pub file: String,
    pub title: String,
    pub levels: Vec<Level>,
}

/// Catalog entry produced without decoding any level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackMetadata {
    pub file: String,
    pub title: String,
    pub level_count: usize,
}
