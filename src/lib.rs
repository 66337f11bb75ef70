// Sokoban engine: level packs, move/undo/review sessions, solution and save-game persistence.
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target, '+' player on target, ' ' floor.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod level_pack;
pub mod models;
pub mod session;
pub mod solution;
pub mod storage;

#[cfg(test)]
mod test;

pub use config::Config;
pub use session::Session;
