//! Path blocking for sliding pieces

use crate::board::Board;
use crate::pieces::Square;

/// Whether any square strictly between `from` and `to` is occupied.
///
/// Callers guarantee the two squares are distinct and aligned on a rank,
/// file, or diagonal; knight moves never come through here. The scan steps
/// along the unit direction vector and excludes both endpoints, so adjacent
/// squares are never blocked, and leftward or upward moves block exactly
/// like rightward or downward ones.
pub fn is_path_blocked(board: &Board, from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta(to);
    let (step_row, step_col) = (drow.signum(), dcol.signum());

    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            return false;
        }
        if !board.is_empty(square) {
            return true;
        }
        current = square.offset(step_row, step_col);
    }
    false
}
