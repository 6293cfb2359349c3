//! Captured pieces tracking
//!
//! Records the pieces each side has taken, in capture order, and computes
//! material advantage from the standard piece values (pawn 1, knight and
//! bishop 3, rook 5, queen 9). Positive advantage favors White. Only move
//! execution writes here; UI collaborators read it to render capture trays.

use crate::pieces::{PieceColor, PieceType};
use serde::{Deserialize, Serialize};

/// Captured pieces for both sides
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Black pieces that White has taken
    pub white_captured: Vec<PieceType>,
    /// White pieces that Black has taken
    pub black_captured: Vec<PieceType>,
}

impl CapturedPieces {
    /// Record a capture; the side opposite `captured_color` gets the credit.
    pub fn add_capture(&mut self, captured_color: PieceColor, piece_type: PieceType) {
        match captured_color {
            PieceColor::White => self.black_captured.push(piece_type),
            PieceColor::Black => self.white_captured.push(piece_type),
        }
    }

    /// Material difference in pawn units; positive means White is ahead.
    pub fn material_advantage(&self) -> i32 {
        let white: i32 = self.white_captured.iter().map(|&p| piece_value(p)).sum();
        let black: i32 = self.black_captured.iter().map(|&p| piece_value(p)).sum();
        white - black
    }

    /// Reset both trays for a new game.
    pub fn clear(&mut self) {
        self.white_captured.clear();
        self.black_captured.clear();
    }
}

/// Standard piece value in pawns. The king cannot be captured.
pub fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 1,
        PieceType::Knight | PieceType::Bishop => 3,
        PieceType::Rook => 5,
        PieceType::Queen => 9,
        PieceType::King => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_credit_goes_to_the_other_side() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceType::Queen);

        assert_eq!(captured.white_captured, vec![PieceType::Queen]);
        assert!(captured.black_captured.is_empty());
    }

    #[test]
    fn test_material_advantage_signs() {
        //! Positive favors White, negative favors Black
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceType::Rook);
        captured.add_capture(PieceColor::Black, PieceType::Pawn);
        captured.add_capture(PieceColor::White, PieceType::Knight);

        assert_eq!(captured.material_advantage(), 5 + 1 - 3);

        captured.clear();
        assert_eq!(captured.material_advantage(), 0);
    }
}
