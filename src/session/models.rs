use crate::core::Direction;
use crate::level_pack::Level;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SessionMode {
    NoLevel,
    Playing,
    Reviewing,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlayAction {
    Move(Direction),
    Undo,
    Restart,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ReviewAction {
    Restart,
    Finish,
    Previous,
    Next,
}

/// One pack of the catalog. `levels` is filled in the first time the pack is loaded.
#[derive(Clone, Debug)]
pub struct PackEntry {
    pub file: String,
    pub title: String,
    pub level_count: usize,
    pub(crate) levels: Option<Vec<Level>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSummary {
    pub index: usize,
    pub name: String,
    pub solved: bool,
    pub best_moves: Option<usize>,
}
