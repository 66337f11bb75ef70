use crate::core::{Direction, Grid};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let status = format!(
            "Moves: {}  Pushes: {}  Time: {}{}",
            state.moves,
            state.pushes,
            state.elapsed,
            if state.deadlock && !state.won { "  | Deadlock!" } else { "" }
        );
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title(state.pack_title.as_str()))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[0]);

        // Game area
        let title = match state.review {
            Some((frame, frames)) => format!("{} (review {}/{})", state.level_name, frame, frames - 1),
            None => state.level_name.clone(),
        };
        let game_paragraph = Paragraph::new(render_game_to_string(&state.grid))
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[1]);

        // Instructions
        let instructions = if state.review.is_some() {
            "Review: Left/Right step, Home/End jump, V back to play, Q to quit"
        } else if state.won {
            "Solved! Press any key for the next level."
        } else {
            "WASD/Arrows move, U undo, R restart, N/P level, V review, Q quit"
        };
        let instructions = match &state.message {
            Some(message) => format!("{} | {}", instructions, message),
            None => instructions.to_string(),
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub fn render_game_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        result.push_str(&row);
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    Move(Direction),
    Undo,
    Restart,
    NextLevel,
    PreviousLevel,
    ToggleReview,
    First,
    Last,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => ConsoleInput::Move(Direction::Up),
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => ConsoleInput::Move(Direction::Down),
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => ConsoleInput::Move(Direction::Left),
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => ConsoleInput::Move(Direction::Right),
                KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => ConsoleInput::Undo,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::PageDown => ConsoleInput::NextLevel,
                KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::PageUp => ConsoleInput::PreviousLevel,
                KeyCode::Char('v') | KeyCode::Char('V') => ConsoleInput::ToggleReview,
                KeyCode::Home => ConsoleInput::First,
                KeyCode::End => ConsoleInput::Last,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
