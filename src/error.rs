use thiserror::Error;

use crate::tic_tac_toe::{Coordinates, Mark};

/// Errors raised by the board, the players and the move strategies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cell at {0} is not empty! You are not allowed to modify it.")]
    Overwrite(Coordinates),

    #[error("Grid is full, cannot choose an available cell")]
    NoLegalMove,

    #[error("Invalid player mark: {0} (expected 1 or -1)")]
    InvalidPlayerMark(i64),

    #[error("Coordinates ({x}, {y}) are outside the 3x3 grid")]
    OutOfBounds { x: usize, y: usize },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Both players hold the mark {0}")]
    DuplicateMark(Mark),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("The game is over")]
    GameOver,

    #[error("Move history does not match the grid: {0}")]
    InconsistentHistory(String),

    #[error("{last} cannot move twice in a row (turn held by {current})")]
    TurnOrder { last: Mark, current: Mark },
}

pub type Result<T> = std::result::Result<T, Error>;
