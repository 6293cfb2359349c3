//! Selection transitions reported to the UI
//!
//! The selection machine has two states, idle and selected, and the UI
//! learns about every transition so it can draw or clear highlights. Legal
//! destination sets ride along with the transitions that create a selection.

use super::execute::MoveOutcome;
use crate::error::GameError;
use crate::pieces::{Piece, Square};

/// How a [`select`](crate::game::GameState::select) call changed the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    /// A piece of the side to move was selected from the idle state
    Selected {
        piece: Piece,
        destinations: Vec<Square>,
    },
    /// The selection moved from one own-color piece to another
    Reselected {
        piece: Piece,
        destinations: Vec<Square>,
    },
    /// The selected piece was clicked again
    Deselected,
    /// The square held nothing selectable; the selection is untouched
    Unchanged,
}

/// Outcome of a unified click (see
/// [`handle_click`](crate::game::GameState::handle_click)).
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// The click landed on an own-color piece and went to the selection
    Selection(SelectionChange),
    /// The selection moved to the clicked square
    Moved(MoveOutcome),
    /// A piece was selected but the clicked square is no legal destination;
    /// the selection stands and nothing changed
    Rejected(GameError),
    /// Nothing selected and nothing selectable clicked
    Ignored,
}
