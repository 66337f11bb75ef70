use serde::{Deserialize, Serialize};

use crate::core::{Direction, Frame, Grid, Result, SokobanError};

/// Compact solution: the starting grid and one direction symbol per move.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "(Grid, String)", into = "(Grid, String)")]
pub struct StepSolution {
    pub initial: Grid,
    pub moves: String,
}

impl StepSolution {
    pub fn move_count(&self) -> usize {
        self.moves.chars().count()
    }
}

impl From<(Grid, String)> for StepSolution {
    fn from((initial, moves): (Grid, String)) -> StepSolution {
        StepSolution { initial, moves }
    }
}

impl From<StepSolution> for (Grid, String) {
    fn from(solution: StepSolution) -> (Grid, String) {
        (solution.initial, solution.moves)
    }
}

/// Reduces a frame stack to its first grid and the player's moves.
///
/// Every transition must move the player by exactly one cell; anything else
/// cannot come out of play and is rejected.
pub fn compress(frames: &[Frame]) -> Result<StepSolution> {
    let first = frames
        .first()
        .ok_or(SokobanError::InvalidFrames { index: 0, reason: "no frames" })?;

    let mut moves = String::with_capacity(frames.len() - 1);
    for (index, pair) in frames.windows(2).enumerate() {
        let old = pair[0].grid.find_player();
        let new = pair[1].grid.find_player();
        let (di, dj) = (new.i - old.i, new.j - old.j);
        if di.abs() + dj.abs() != 1 {
            return Err(SokobanError::InvalidFrames {
                index: index + 1,
                reason: "player did not move exactly one cell",
            });
        }
        if dj < 0 {
            moves.push('<');
        }
        if dj > 0 {
            moves.push('>');
        }
        if di < 0 {
            moves.push('^');
        }
        if di > 0 {
            moves.push('v');
        }
    }

    Ok(StepSolution { initial: first.grid.clone(), moves })
}

/// Replays a solution into the full frame stack, starting with zero pushes.
pub fn expand(solution: &StepSolution) -> Result<Vec<Frame>> {
    let mut grid = solution.initial.clone();
    let mut pushes = 0;
    let mut frames = Vec::with_capacity(solution.moves.len() + 1);
    frames.push(Frame::new(grid.clone(), pushes));

    for (index, step) in solution.moves.chars().enumerate() {
        let change = Direction::from_symbol(step)
            .and_then(|direction| grid.step(direction))
            .ok_or(SokobanError::InvalidSolution { index, step })?;
        pushes += change.pushes();
        frames.push(Frame::new(grid.clone(), pushes));
    }
    Ok(frames)
}
