// Terminal Sokoban on top of the engine library.
// Usage: sokoban [levels.zip] [storage-dir]
// Controls: W/A/S/D or arrow keys, U undo, R restart, N/P next/previous level, V review, Q quit.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokoban_engine::console_interface::ConsoleInput::*;
use sokoban_engine::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use sokoban_engine::core::{Direction, SokobanError};
use sokoban_engine::models::GameRenderState;
use sokoban_engine::session::{PlayAction, ReviewAction, SessionMode};
use sokoban_engine::{Config, Session};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let archive = args.next().unwrap_or_else(|| "levels.zip".to_string());
    let storage = args.next().map(PathBuf::from).unwrap_or_else(default_storage_root);
    let config = Config::new(archive, storage);
    init_tracing(&config)?;

    let mut session = Session::open(config)?;
    println!("Found {} levels in {} packs", session.total_levels(), session.packs().len());
    if session.mode() == SessionMode::NoLevel && !load_first_playable_pack(&mut session) {
        println!("No playable level packs found.");
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut session, &mut terminal);
    cleanup_terminal()?;

    if let Err(err) = session.save_session_state() {
        error!(error = %err, "cannot save game");
    }
    result
}

fn default_storage_root() -> PathBuf {
    std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
}

fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&config.storage_root)?;
    let log_out = OpenOptions::new()
        .append(true)
        .create(true)
        .open(config.storage_root.join("sokoban.log"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_out))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn load_first_playable_pack(session: &mut Session) -> bool {
    for index in 0..session.packs().len() {
        match session.load_pack(index) {
            Ok(()) => return true,
            Err(err) => warn!(pack = index, error = %err, "pack not playable"),
        }
    }
    false
}

fn run_interactive(
    session: &mut Session,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut message: Option<String> = None;

    loop {
        if let Some(state) = GameRenderState::from_session(session, message.clone()) {
            render_game(terminal, &state)?;
        }

        let input = handle_input()?;
        if !matches!(input, Timeout) {
            message = None;
        }
        match (session.mode(), input) {
            (_, Quit) => break,
            (_, NextLevel) => step_level(session, 1)?,
            (_, PreviousLevel) => step_level(session, -1)?,
            (SessionMode::Reviewing, Move(Direction::Left)) => session.review(ReviewAction::Previous)?,
            (SessionMode::Reviewing, Move(Direction::Right)) => session.review(ReviewAction::Next)?,
            (SessionMode::Reviewing, First) => session.review(ReviewAction::Restart)?,
            (SessionMode::Reviewing, Last) => session.review(ReviewAction::Finish)?,
            (SessionMode::Reviewing, ToggleReview) => step_level(session, 0)?,
            (SessionMode::Playing, Move(direction)) => {
                if session.play(PlayAction::Move(direction))? {
                    message = Some(on_solved(session, terminal)?);
                }
            }
            (SessionMode::Playing, Undo) => {
                session.play(PlayAction::Undo)?;
            }
            (SessionMode::Playing, Restart) => {
                session.play(PlayAction::Restart)?;
            }
            (SessionMode::Playing, ToggleReview) => match session.start_review() {
                Err(SokobanError::NoSolution) => message = Some("No solution stored yet".to_string()),
                other => other?,
            },
            _ => {}
        }
    }

    Ok(())
}

/// Records the run, waits for a key and moves on to the next level.
fn on_solved(
    session: &mut Session,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<String, Box<dyn std::error::Error>> {
    let summary = format!("Solved in {} moves, {} pushes, {}", session.moves(), session.pushes(), session.elapsed_time());
    let summary = match session.record_solution_if_better() {
        Ok(true) => format!("{} - new best solution", summary),
        Ok(false) => summary,
        Err(err) => {
            error!(error = %err, "cannot store solution");
            format!("{} - solution not stored", summary)
        }
    };
    info!("{}", summary);

    if let Some(state) = GameRenderState::from_session(session, Some(summary.clone())) {
        render_game(terminal, &state)?;
    }
    // Keep showing the win screen until user inputs
    while let Timeout = handle_input()? {}

    step_level(session, 1)?;
    Ok(summary)
}

fn step_level(session: &mut Session, delta: isize) -> Result<(), Box<dyn std::error::Error>> {
    let Some(current) = session.current_level_index() else {
        return Ok(());
    };
    let count = session.levels()?.len();
    let target = current.saturating_add_signed(delta).min(count.saturating_sub(1));
    session.load_level(target)?;
    Ok(())
}
