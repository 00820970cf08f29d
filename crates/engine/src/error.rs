//! Engine error types

use thiserror::Error;

use crate::types::{Color, Square};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("coordinate ({column}, {row}) is outside the board")]
    OutOfBounds { column: i32, row: i32 },

    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),

    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("no piece on {0}")]
    NoPieceAt(Square),

    #[error("the piece on {square} is {found}, but it is {expected} to move")]
    NotYourTurn {
        square: Square,
        expected: Color,
        found: Color,
    },

    #[error("illegal move: {from}-{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("journal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
