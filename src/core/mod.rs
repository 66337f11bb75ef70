mod consts;
mod error;
mod frame;
mod grid;
mod heuristics;
mod models;
mod update;

pub use consts::*;
pub use error::{LevelRule, Result, SokobanError};
pub use frame::Frame;
pub use grid::Grid;
pub(crate) use grid::decode_row;
pub use models::{Cell, Direction, GameChangeType, SYMBOLS, Vec2};
