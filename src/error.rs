use crate::domain::puzzle::Orientation;
use thiserror::Error;

/// Reasons a puzzle definition cannot be turned into an engine.
///
/// These are the only hard failures the engine knows about. Once an engine
/// exists, every play-time operation is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Grid must have positive dimensions, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("Grid of {rows}x{cols} cells is too large")]
    GridTooLarge { rows: usize, cols: usize },
    #[error("Entry {orientation} ({text}) needs a positive clue number")]
    InvalidNumber {
        orientation: Orientation,
        text: String,
    },
    #[error("Entry {number} {orientation} ({text}) runs outside the {rows}x{cols} grid")]
    OutOfBounds {
        number: u32,
        orientation: Orientation,
        text: String,
        rows: usize,
        cols: usize,
    },
    #[error("Entry {number} {orientation} has an invalid answer {text:?}")]
    InvalidAnswer {
        number: u32,
        orientation: Orientation,
        text: String,
    },
    #[error("Entries disagree at ({row}, {col}): {existing} vs {incoming}")]
    ConflictingEntries {
        row: usize,
        col: usize,
        existing: char,
        incoming: char,
    },
}

#[derive(Error, Debug)]
pub enum CrosswordError {
    #[error("Construction error: {0}")]
    ConstructionError(#[from] ConstructionError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("Player {0} is not allowed to play")]
    Unauthorized(String),
    #[error("Scoreboard error: {0}")]
    ScoreboardError(String),
}

pub type Result<T> = std::result::Result<T, CrosswordError>;
