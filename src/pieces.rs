//! Core piece and square types
//!
//! Plain data with no rendering coupling: a piece is its type, its color, and
//! the square the board last placed it on. Legality code dispatches on the
//! closed [`PieceType`] enum with `match` - there is no downcasting anywhere.
//!
//! Coordinates are (row, col) with row 0 the far rank (Black's back rank) and
//! row 7 the near rank; White starts on rows 6-7 and advances toward row 0.
//! A [`Square`] is in bounds by construction: [`Square::new`] rejects
//! anything outside [0,7]x[0,7] instead of clamping.

use crate::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row this color's pawns start on.
    pub fn pawn_home_row(self) -> u8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Farthest rank for this color; a pawn arriving here promotes.
    pub fn promotion_row(self) -> u8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }

    /// Forward direction along rows: White advances toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Unicode symbol for text rendering.
    pub fn symbol(self, color: PieceColor) -> char {
        match (color, self) {
            (PieceColor::White, PieceType::King) => '\u{2654}',
            (PieceColor::White, PieceType::Queen) => '\u{2655}',
            (PieceColor::White, PieceType::Rook) => '\u{2656}',
            (PieceColor::White, PieceType::Bishop) => '\u{2657}',
            (PieceColor::White, PieceType::Knight) => '\u{2658}',
            (PieceColor::White, PieceType::Pawn) => '\u{2659}',
            (PieceColor::Black, PieceType::King) => '\u{265A}',
            (PieceColor::Black, PieceType::Queen) => '\u{265B}',
            (PieceColor::Black, PieceType::Rook) => '\u{265C}',
            (PieceColor::Black, PieceType::Bishop) => '\u{265D}',
            (PieceColor::Black, PieceType::Knight) => '\u{265E}',
            (PieceColor::Black, PieceType::Pawn) => '\u{265F}',
        }
    }
}

/// One cell of the 8x8 board.
///
/// Displays in algebraic notation (`a1`..`h8`); file `a` is column 0 and
/// rank 1 is row 7. Serde goes through the same bounds check as
/// [`Square::new`], so a deserialized square can never be off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i8, i8)", into = "(i8, i8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square from raw coordinates, rejecting out-of-range input.
    pub fn new(row: i8, col: i8) -> GameResult<Self> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(GameError::InvalidSquare { row, col });
        }
        Ok(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Internal constructor for coordinates already known to be in range.
    pub(crate) fn from_coords(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Signed (row, col) delta from `self` to `target`.
    pub fn delta(self, target: Square) -> (i8, i8) {
        (
            target.row as i8 - self.row as i8,
            target.col as i8 - self.col as i8,
        )
    }

    /// Offset by a signed delta; `None` when the result leaves the board.
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        Square::new(self.row as i8 + drow, self.col as i8 + dcol).ok()
    }

    /// Every square on the board, row by row from the far rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = GameError;

    fn try_from((row, col): (i8, i8)) -> GameResult<Self> {
        Square::new(row, col)
    }
}

impl From<Square> for (i8, i8) {
    fn from(square: Square) -> Self {
        (square.row as i8, square.col as i8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

/// A piece on the board.
///
/// `square` is a cached copy of the piece's location, kept in sync by the
/// board whenever the piece is placed or relocated. The board mapping is the
/// source of truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: PieceColor,
    pub square: Square,
}
