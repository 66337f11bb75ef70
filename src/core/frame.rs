use serde::{Deserialize, Serialize};

use crate::core::Grid;

/// One point of a move sequence: the grid and the pushes made to reach it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "(Grid, usize)", into = "(Grid, usize)")]
pub struct Frame {
    pub grid: Grid,
    pub pushes: usize,
}

impl Frame {
    pub fn new(grid: Grid, pushes: usize) -> Frame {
        Frame { grid, pushes }
    }
}

impl From<(Grid, usize)> for Frame {
    fn from((grid, pushes): (Grid, usize)) -> Frame {
        Frame { grid, pushes }
    }
}

impl From<Frame> for (Grid, usize) {
    fn from(frame: Frame) -> (Grid, usize) {
        (frame.grid, frame.pushes)
    }
}
