//! Move execution
//!
//! Applies a move that already passed validation: capture first, then
//! relocation, then promotion, then the turn flip and selection reset. A
//! move either applies fully or not at all; validation failures never reach
//! this module, and a rejected attempt leaves the state untouched.

use super::state::GameState;
use crate::error::GameResult;
use crate::pieces::{Piece, PieceColor, PieceType, Square};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of a successfully executed move.
///
/// Capture and promotion are independent: a pawn that captures into the far
/// rank reports both. `piece_type` is the type that moved, so a promotion
/// reports `Pawn` here and the queen appears on the board at `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub piece_type: PieceType,
    pub color: PieceColor,
    pub from: Square,
    pub to: Square,
    /// Enemy piece removed from `to`, if any
    pub captured: Option<PieceType>,
    /// Whether the pawn was replaced by a queen at `to`
    pub promoted: bool,
}

impl MoveOutcome {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.promoted
    }
}

/// True when a pawn of `color` arriving on `row` must promote.
pub fn is_promotion_move(piece_type: PieceType, color: PieceColor, row: u8) -> bool {
    piece_type == PieceType::Pawn && row == color.promotion_row()
}

/// Apply a validated move to `state`.
///
/// Resolves the capture before relocating so the target square is free,
/// auto-promotes a pawn reaching the far rank to a queen (no promotion
/// choice), flips the turn, and clears the selection.
pub(crate) fn execute_move(
    state: &mut GameState,
    piece: Piece,
    target: Square,
) -> GameResult<MoveOutcome> {
    let from = piece.square;

    let captured = state.board.remove(target).map(|taken| {
        state.captured.add_capture(taken.color, taken.piece_type);
        taken.piece_type
    });

    state.board.relocate(from, target)?;

    let promoted = is_promotion_move(piece.piece_type, piece.color, target.row());
    if promoted {
        state.board.remove(target);
        state.board.place(Piece {
            piece_type: PieceType::Queen,
            color: piece.color,
            square: target,
        })?;
    }

    state.turn = state.turn.opponent();
    state.selection = None;

    debug!(
        "[MOVE] {:?} {:?} {from} to {target}{}{}",
        piece.color,
        piece.piece_type,
        if captured.is_some() { " (capture)" } else { "" },
        if promoted { " (promotion)" } else { "" },
    );

    Ok(MoveOutcome {
        piece_type: piece.piece_type,
        color: piece.color,
        from,
        to: target,
        captured,
        promoted,
    })
}
