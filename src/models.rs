use crate::core::Grid;
use crate::session::{Session, SessionMode};

/// Everything the terminal front end draws for one frame.
pub struct GameRenderState {
    pub pack_title: String,
    pub level_name: String,
    pub grid: Grid,
    pub moves: usize,
    pub pushes: usize,
    pub elapsed: String,
    pub won: bool,
    pub deadlock: bool,
    pub review: Option<(usize, usize)>,
    pub message: Option<String>,
}

impl GameRenderState {
    pub fn from_session(session: &Session, message: Option<String>) -> Option<GameRenderState> {
        let grid = session.grid()?.clone();
        let pack_title = session.current_pack().map(|p| p.title.clone()).unwrap_or_default();
        let level_name = session.current_level().map(|l| l.name.clone()).unwrap_or_default();
        let review = session.review_position();
        let moves = match (session.mode(), review) {
            (SessionMode::Reviewing, Some((frame, _))) => frame,
            _ => session.moves(),
        };
        Some(GameRenderState {
            pack_title,
            level_name,
            won: grid.is_won(),
            deadlock: grid.is_deadlock(),
            grid,
            moves,
            pushes: session.pushes(),
            elapsed: session.elapsed_time(),
            review,
            message,
        })
    }
}
