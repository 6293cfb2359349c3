//! Board storage and queries
//!
//! The board is a dumb, invariant-preserving 8x8 grid of optional pieces:
//! no capture resolution, no promotion, no turn logic. Callers that relocate
//! a piece onto an occupied square must resolve the capture first via
//! [`Board::remove`].
//!
//! Two invariants hold at every call boundary: a square holds at most one
//! piece, and the square cached on each piece equals its grid coordinates.

use crate::error::{GameError, GameResult};
use crate::pieces::{Piece, PieceColor, PieceType, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Back-rank piece order, shared by both colors.
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard 32-piece starting layout: Black on rows 0-1, White on
    /// rows 6-7, queens on column 3.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, &piece_type) in BACK_ROW.iter().enumerate() {
            let col = col as u8;
            board.put(piece_type, PieceColor::Black, Square::from_coords(0, col));
            board.put(PieceType::Pawn, PieceColor::Black, Square::from_coords(1, col));
            board.put(PieceType::Pawn, PieceColor::White, Square::from_coords(6, col));
            board.put(piece_type, PieceColor::White, Square::from_coords(7, col));
        }
        board
    }

    // Setup-only write, squares known distinct.
    fn put(&mut self, piece_type: PieceType, color: PieceColor, square: Square) {
        self.squares[square.row() as usize][square.col() as usize] = Some(Piece {
            piece_type,
            color,
            square,
        });
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn piece_color_at(&self, square: Square) -> Option<PieceColor> {
        self.piece_at(square).map(|piece| piece.color)
    }

    /// Place a piece on its cached square. Fails with
    /// [`GameError::SquareOccupied`] if the square already holds a piece;
    /// relocating callers must [`Board::remove`] first.
    pub fn place(&mut self, piece: Piece) -> GameResult<()> {
        let square = piece.square;
        if !self.is_empty(square) {
            return Err(GameError::SquareOccupied(square));
        }
        self.squares[square.row() as usize][square.col() as usize] = Some(piece);
        Ok(())
    }

    /// Take the piece off `square`, if any. No-op on an empty square.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Move the piece on `from` to the empty square `to`, updating its
    /// cached square. The caller is responsible for having resolved any
    /// capture at `to` beforehand.
    pub fn relocate(&mut self, from: Square, to: Square) -> GameResult<()> {
        if !self.is_empty(to) {
            return Err(GameError::SquareOccupied(to));
        }
        let mut piece = self.remove(from).ok_or(GameError::EmptySquare(from))?;
        piece.square = to;
        self.squares[to.row() as usize][to.col() as usize] = Some(piece);
        Ok(())
    }

    /// All pieces currently on the board, far rank first.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().filter_map(|slot| *slot)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for (row, rank) in self.squares.iter().enumerate() {
            write!(f, "{} | ", 8 - row)?;
            for slot in rank {
                match slot {
                    Some(piece) => write!(f, "{} ", piece.piece_type.symbol(piece.color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}
