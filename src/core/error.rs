use thiserror::Error;

use crate::session::SessionMode;

pub type Result<T> = std::result::Result<T, SokobanError>;

/// The structural rule a level broke, with the counts that broke it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelRule {
    #[error("level too small ({width} x {height})")]
    TooSmall { width: usize, height: usize },
    #[error("{0} players")]
    PlayerCount(usize),
    #[error("{crates} crates, {targets} targets")]
    CrateTargetMismatch { crates: usize, targets: usize },
    #[error("no crates at all")]
    NoCrates,
    #[error("illegal cell 0b{bits:04b} at row {row}, column {column}")]
    IllegalCell { row: usize, column: usize, bits: u8 },
    #[error("all crates on their targets, nothing to do")]
    AlreadySolved,
}

#[derive(Debug, Error)]
pub enum SokobanError {
    #[error("level invalid: {0}")]
    InvalidLevel(#[from] LevelRule),
    #[error("malformed pack {file}: {reason}")]
    MalformedPack { file: String, reason: String },
    #[error("cannot decode symbol {symbol:?} in row {row}")]
    Decode { symbol: char, row: usize },
    #[error("no current levelpack")]
    NoCurrentPack,
    #[error("no current level")]
    NoCurrentLevel,
    #[error("no solution for this level yet")]
    NoSolution,
    #[error("operation needs {expected:?} mode, session is {actual:?}")]
    WrongMode { expected: SessionMode, actual: SessionMode },
    #[error("{what} index {index} out of range (have {len})")]
    IndexOutOfRange { what: &'static str, index: usize, len: usize },
    #[error("invalid frame sequence at frame {index}: {reason}")]
    InvalidFrames { index: usize, reason: &'static str },
    #[error("invalid solution step {step:?} at position {index}")]
    InvalidSolution { index: usize, step: char },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}
