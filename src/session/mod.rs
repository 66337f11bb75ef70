mod clock;
mod models;
mod save_state;

pub use clock::{format_elapsed, parse_elapsed, PlayClock};
pub use models::{LevelSummary, PackEntry, PlayAction, ReviewAction, SessionMode};
pub use save_state::SaveState;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{Frame, Grid, Result, SokobanError, NO_TIME};
use crate::level_pack::{Level, LevelArchive};
use crate::solution::{compress, expand, SolutionStore, StepSolution};

/// Expanded frames of the last reviewed solution.
#[derive(Clone, Debug)]
struct ReviewCache {
    pack: String,
    level: usize,
    frames: Vec<Frame>,
}

/// Everything except the front end: the pack catalog, the level being played,
/// its undo history and clock, and the persisted solutions and save game.
///
/// A session is owned by a single caller. Mode specific calls check the
/// [`SessionMode`] on entry and refuse to run in the wrong one.
pub struct Session {
    config: Config,
    archive: LevelArchive,
    packs: Vec<PackEntry>,
    solutions: SolutionStore,
    mode: SessionMode,
    pack: Option<usize>,
    level: Option<usize>,
    grid: Option<Grid>,
    pushes: usize,
    undo: Vec<Frame>,
    clock: PlayClock,
    review: Option<ReviewCache>,
    review_frame: usize,
}

impl Session {
    /// Opens the archive named by `config` and resumes the saved game, if any.
    pub fn open(config: Config) -> Result<Session> {
        let archive = LevelArchive::open(&config.archive_path)?;
        Ok(Session::with_archive(config, archive))
    }

    pub fn with_archive(config: Config, archive: LevelArchive) -> Session {
        let packs: Vec<PackEntry> = archive
            .catalog()
            .into_iter()
            .map(|meta| PackEntry { file: meta.file, title: meta.title, level_count: meta.level_count, levels: None })
            .collect();
        let solutions = SolutionStore::load(&config.solution_file());
        info!(packs = packs.len(), levels = packs.iter().map(|p| p.level_count).sum::<usize>(), "catalog loaded");

        let mut session = Session {
            config,
            archive,
            packs,
            solutions,
            mode: SessionMode::NoLevel,
            pack: None,
            level: None,
            grid: None,
            pushes: 0,
            undo: Vec::new(),
            clock: PlayClock::new(),
            review: None,
            review_frame: 0,
        };
        session.load_session_state();
        session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn packs(&self) -> &[PackEntry] {
        &self.packs
    }

    /// Level count over all packs, as far as the catalog knows it.
    pub fn total_levels(&self) -> usize {
        self.packs.iter().map(|p| p.level_count).sum()
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn current_pack_index(&self) -> Option<usize> {
        self.pack
    }

    pub fn current_level_index(&self) -> Option<usize> {
        self.level
    }

    pub fn current_pack(&self) -> Result<&PackEntry> {
        self.pack.map(|index| &self.packs[index]).ok_or(SokobanError::NoCurrentPack)
    }

    pub fn current_level(&self) -> Result<&Level> {
        let index = self.level.ok_or(SokobanError::NoCurrentLevel)?;
        self.levels()?.get(index).ok_or(SokobanError::NoCurrentLevel)
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Moves made so far. Every undo entry stands for one move.
    pub fn moves(&self) -> usize {
        self.undo.len()
    }

    pub fn undo_stack(&self) -> &[Frame] {
        &self.undo
    }

    pub fn is_won(&self) -> bool {
        self.grid.as_ref().is_some_and(Grid::is_won)
    }

    pub fn is_deadlock(&self) -> bool {
        self.grid.as_ref().is_some_and(Grid::is_deadlock)
    }

    pub fn elapsed_time(&self) -> String {
        format_elapsed(self.clock.elapsed())
    }

    /// Parses the pack completely and starts its first level.
    pub fn load_pack(&mut self, index: usize) -> Result<()> {
        let len = self.packs.len();
        let entry = self
            .packs
            .get_mut(index)
            .ok_or(SokobanError::IndexOutOfRange { what: "pack", index, len })?;
        if entry.levels.is_none() {
            let pack = self.archive.load_pack(&entry.file)?;
            entry.title = pack.title;
            entry.level_count = pack.levels.len();
            entry.levels = Some(pack.levels);
        }

        self.pack = Some(index);
        self.level = None;
        self.grid = None;
        self.mode = SessionMode::NoLevel;
        self.load_level(0)
    }

    pub fn levels(&self) -> Result<&[Level]> {
        let pack = self.current_pack()?;
        Ok(pack.levels.as_deref().unwrap_or_default())
    }

    /// Names of the current pack's levels with their best known move counts.
    pub fn level_list(&self) -> Result<Vec<LevelSummary>> {
        let file = &self.current_pack()?.file;
        Ok(self
            .levels()?
            .iter()
            .enumerate()
            .map(|(index, level)| {
                let best_moves = self.solutions.get(file, index).map(StepSolution::move_count);
                LevelSummary { index, name: level.name.clone(), solved: best_moves.is_some(), best_moves }
            })
            .collect())
    }

    /// Starts level `index` of the current pack from scratch.
    pub fn load_level(&mut self, index: usize) -> Result<()> {
        let levels = self.levels()?;
        let len = levels.len();
        let template = levels
            .get(index)
            .ok_or(SokobanError::IndexOutOfRange { what: "level", index, len })?
            .grid
            .clone();

        self.level = Some(index);
        self.grid = Some(template);
        self.pushes = 0;
        self.undo.clear();
        self.clock.reset();
        self.review_frame = 0;
        self.mode = SessionMode::Playing;
        Ok(())
    }

    fn require_mode(&self, expected: SessionMode) -> Result<()> {
        match self.mode {
            actual if actual == expected => Ok(()),
            SessionMode::NoLevel => Err(SokobanError::NoCurrentLevel),
            actual => Err(SokobanError::WrongMode { expected, actual }),
        }
    }

    /// Applies one player action and reports whether the level is now solved.
    /// Recording the solution is left to the caller.
    pub fn play(&mut self, action: PlayAction) -> Result<bool> {
        self.require_mode(SessionMode::Playing)?;
        let level = self.level.ok_or(SokobanError::NoCurrentLevel)?;

        match action {
            PlayAction::Restart => self.load_level(level)?,
            PlayAction::Move(direction) => {
                self.clock.run();
                let grid = self.grid.as_mut().ok_or(SokobanError::NoCurrentLevel)?;
                self.undo.push(Frame::new(grid.clone(), self.pushes));
                match grid.step(direction) {
                    Some(change) => self.pushes += change.pushes(),
                    None => {
                        self.undo.pop();
                    }
                }
            }
            PlayAction::Undo => match self.undo.pop() {
                Some(frame) => {
                    self.grid = Some(frame.grid);
                    self.pushes = frame.pushes;
                }
                None => self.load_level(level)?,
            },
        }

        let won = self.is_won();
        if won {
            self.clock.freeze();
        }
        Ok(won)
    }

    pub fn has_solution(&self, level: usize) -> bool {
        self.pack
            .is_some_and(|pack| self.solutions.get(&self.packs[pack].file, level).is_some())
    }

    pub fn solution(&self, level: usize) -> Result<&StepSolution> {
        let file = &self.current_pack()?.file;
        self.solutions.get(file, level).ok_or(SokobanError::NoSolution)
    }

    /// Full frame stack of the stored solution for `level`, expanded once and cached.
    pub fn solution_frames(&mut self, level: usize) -> Result<&[Frame]> {
        let pack = self.current_pack()?.file.clone();
        let cached = matches!(&self.review, Some(cache) if cache.pack == pack && cache.level == level);
        if !cached {
            let frames = expand(self.solution(level)?)?;
            self.review = Some(ReviewCache { pack, level, frames });
        }
        match &self.review {
            Some(cache) => Ok(&cache.frames),
            None => Err(SokobanError::NoSolution),
        }
    }

    /// Restarts the current level and shows the first frame of its stored solution.
    /// Call [`Session::load_level`] to go back to playing.
    pub fn start_review(&mut self) -> Result<()> {
        let level = self.level.ok_or(SokobanError::NoCurrentLevel)?;
        self.solution(level)?;
        self.load_level(level)?;
        self.mode = SessionMode::Reviewing;
        if let Err(err) = self.review(ReviewAction::Restart) {
            self.mode = SessionMode::Playing;
            return Err(err);
        }
        Ok(())
    }

    pub fn review(&mut self, action: ReviewAction) -> Result<()> {
        self.require_mode(SessionMode::Reviewing)?;
        let level = self.level.ok_or(SokobanError::NoCurrentLevel)?;
        let cursor = self.review_frame;

        let frames = self.solution_frames(level)?;
        let last = frames.len() - 1;
        let cursor = match action {
            ReviewAction::Restart => 0,
            ReviewAction::Finish => last,
            ReviewAction::Previous => cursor.saturating_sub(1),
            ReviewAction::Next => (cursor + 1).min(last),
        };
        let frame = frames[cursor].clone();

        self.review_frame = cursor;
        self.grid = Some(frame.grid);
        self.pushes = frame.pushes;
        Ok(())
    }

    /// Current review frame and the number of frames in the solution.
    pub fn review_position(&self) -> Option<(usize, usize)> {
        if self.mode != SessionMode::Reviewing {
            return None;
        }
        self.review.as_ref().map(|cache| (self.review_frame, cache.frames.len()))
    }

    /// Stores the solved run if it takes strictly fewer moves than the known one.
    pub fn record_solution_if_better(&mut self) -> Result<bool> {
        self.require_mode(SessionMode::Playing)?;
        let level = self.level.ok_or(SokobanError::NoCurrentLevel)?;
        let pack = self.current_pack()?.file.clone();
        let grid = self.grid.as_ref().ok_or(SokobanError::NoCurrentLevel)?;
        if !grid.is_won() {
            return Ok(false);
        }
        if let Some(known) = self.solutions.get(&pack, level) {
            if self.undo.len() >= known.move_count() {
                return Ok(false);
            }
        }

        let mut frames = self.undo.clone();
        frames.push(Frame::new(grid.clone(), self.pushes));
        let solution = compress(&frames)?;
        self.solutions.insert(&pack, level, solution);
        self.review = None;
        info!(pack = %pack, level, moves = self.undo.len(), pushes = self.pushes, "solution recorded");

        self.solutions.save(&self.config.solution_file())?;
        Ok(true)
    }

    /// Writes the level in progress so it can be resumed. Does nothing without a level.
    pub fn save_session_state(&self) -> Result<()> {
        let (Some(pack), Some(level), Some(grid)) = (self.pack, self.level, self.grid.as_ref()) else {
            return Ok(());
        };

        let state = if self.mode == SessionMode::Reviewing {
            let template = self.current_level()?.grid.clone();
            SaveState {
                pack_file: self.packs[pack].file.clone(),
                level_index: level,
                curtime: NO_TIME.to_string(),
                undo: vec![Frame::new(template, 0)],
            }
        } else {
            let mut undo = self.undo.clone();
            undo.push(Frame::new(grid.clone(), self.pushes));
            SaveState {
                pack_file: self.packs[pack].file.clone(),
                level_index: level,
                curtime: self.elapsed_time(),
                undo,
            }
        };
        state.write(&self.config.save_file())
    }

    /// Resumes the saved game. Anything unreadable or stale means a fresh start.
    pub fn load_session_state(&mut self) -> bool {
        let path = self.config.save_file();
        let state = match SaveState::read(&path) {
            Ok(Some(state)) => state,
            Ok(None) => return false,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot load last game");
                return false;
            }
        };

        let Some(pack) = self.packs.iter().position(|p| p.file == state.pack_file) else {
            debug!(pack = %state.pack_file, "saved pack no longer present");
            return false;
        };
        if let Err(err) = self.load_pack(pack).and_then(|_| self.load_level(state.level_index)) {
            warn!(pack = %state.pack_file, level = state.level_index, error = %err, "cannot resume last game");
            return false;
        }

        if let Some(played) = parse_elapsed(&state.curtime) {
            self.clock.restore(played);
        }
        let mut undo = state.undo;
        if let Some(current) = undo.pop() {
            self.grid = Some(current.grid);
            self.pushes = current.pushes;
            self.undo = undo;
        }
        true
    }
}
