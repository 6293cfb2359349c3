//! Error types for engine operations
//!
//! Every rejected operation returns a discriminated error and leaves the
//! game state untouched. Nothing in this crate panics on malformed input.

use crate::pieces::Square;

/// Errors reported by board mutation, selection, and move attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinates outside [0,7]x[0,7]
    #[error("square ({row}, {col}) is outside the board")]
    InvalidSquare { row: i8, col: i8 },

    /// A move was attempted with nothing selected
    #[error("no piece is selected")]
    NoSelection,

    /// The target square fails move validation
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The board refused to place a piece on an occupied square
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// The board was asked to move a piece off an empty square
    #[error("no piece at square {0}")]
    EmptySquare(Square),
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
