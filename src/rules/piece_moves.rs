//! Per-piece movement rules
//!
//! General legality runs first - a piece never "moves" to its own square and
//! never captures its own color - then each piece type applies its geometry
//! and, for sliding pieces, the path check. Knights are the only pieces that
//! skip it: their move is legal by geometry alone regardless of what sits in
//! between.

use super::path::is_path_blocked;
use crate::board::Board;
use crate::pieces::{Piece, PieceType, Square};

/// Check whether `piece` may move to `target` on `board`.
pub fn is_valid_move(board: &Board, piece: Piece, target: Square) -> bool {
    if target == piece.square {
        return false;
    }
    if board.piece_color_at(target) == Some(piece.color) {
        return false;
    }

    match piece.piece_type {
        PieceType::Pawn => is_valid_pawn_move(board, piece, target),
        PieceType::Rook => is_valid_rook_move(board, piece.square, target),
        PieceType::Knight => is_valid_knight_move(piece.square, target),
        PieceType::Bishop => is_valid_bishop_move(board, piece.square, target),
        PieceType::Queen => is_valid_queen_move(board, piece.square, target),
        PieceType::King => is_valid_king_move(piece.square, target),
    }
}

/// All squares `piece` may legally move to, for highlight rendering.
pub fn legal_destinations(board: &Board, piece: Piece) -> Vec<Square> {
    Square::all()
        .filter(|&target| is_valid_move(board, piece, target))
        .collect()
}

fn is_valid_pawn_move(board: &Board, piece: Piece, target: Square) -> bool {
    let forward = piece.color.forward();
    let (drow, dcol) = piece.square.delta(target);

    // Straight advance, never a capture
    if dcol == 0 && board.is_empty(target) {
        if drow == forward {
            return true;
        }
        // Double step only from the home rank, both squares empty
        if drow == 2 * forward && piece.square.row() == piece.color.pawn_home_row() {
            return !is_path_blocked(board, piece.square, target);
        }
    }

    // Diagonal advance only when capturing; the same-color case was already
    // rejected, so any occupant here is an enemy. No en passant.
    if dcol.abs() == 1 && drow == forward {
        return !board.is_empty(target);
    }

    false
}

fn is_valid_rook_move(board: &Board, from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta(to);
    if drow != 0 && dcol != 0 {
        return false;
    }
    !is_path_blocked(board, from, to)
}

fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta(to);
    matches!((drow.abs(), dcol.abs()), (1, 2) | (2, 1))
}

fn is_valid_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta(to);
    if drow.abs() != dcol.abs() {
        return false;
    }
    !is_path_blocked(board, from, to)
}

fn is_valid_queen_move(board: &Board, from: Square, to: Square) -> bool {
    is_valid_rook_move(board, from, to) || is_valid_bishop_move(board, from, to)
}

// One square in any direction. No path check: there are no intermediate
// squares at this range. Nonzero displacement is guaranteed by the
// same-square reject in `is_valid_move`.
fn is_valid_king_move(from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta(to);
    drow.abs() <= 1 && dcol.abs() <= 1
}
