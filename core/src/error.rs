use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board dimensions {rows}x{cols} with {mines} mines")]
    InvalidDimensions {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Coordinates {0:?} are out of bounds")]
    OutOfBounds(Coord2),
    #[error("Cannot place {requested} mines, only {available} free cells remain")]
    InsufficientSpace {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Malformed board state at line {line}: {defect}")]
    MalformedBoardState { line: usize, defect: BoardStateDefect },
}

/// What was wrong with a persisted board-state line.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardStateDefect {
    #[error("line is missing")]
    MissingLine,
    #[error("expected 4 tokens, found {0}")]
    TokenCount(usize),
    #[error("boolean token did not parse")]
    InvalidBool,
    #[error("adjacent mine count did not parse or exceeds 8")]
    InvalidCount,
    #[error("cell is both flagged and revealed")]
    FlaggedAndRevealed,
    #[error("expected {expected} mines, found {found}")]
    MineCountMismatch {
        expected: CellCount,
        found: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
