//! Game state and the click façade
//!
//! [`GameState`] is the single value a UI collaborator threads through the
//! engine: board, side to move, current selection, and capture trays. Every
//! public operation runs to completion synchronously and either applies
//! fully or leaves the state untouched - the engine owns no process-wide
//! mutable state and performs no locking.
//!
//! # Click flow
//!
//! UI click, translated to a [`Square`] by the caller, enters through
//! [`GameState::handle_click`]: own-color squares go to the selection
//! machine, everything else becomes a move attempt against the current
//! selection. [`GameState::select`] and [`GameState::attempt_move`] are the
//! same steps exposed individually.

use super::captured::CapturedPieces;
use super::execute::{self, MoveOutcome};
use super::selection::{ClickOutcome, SelectionChange};
use crate::board::Board;
use crate::error::{GameError, GameResult};
use crate::pieces::{Piece, PieceColor, Square};
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: PieceColor,
    pub(crate) selection: Option<Piece>,
    pub(crate) captured: CapturedPieces,
}

impl GameState {
    /// Standard starting position: 32 pieces, White to move, nothing
    /// selected, empty capture trays.
    pub fn new_standard_game() -> Self {
        GameState {
            board: Board::standard(),
            turn: PieceColor::White,
            selection: None,
            captured: CapturedPieces::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color currently permitted to move.
    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// The selected piece, if any. Always a piece of the side to move.
    pub fn selection(&self) -> Option<Piece> {
        self.selection
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Legal destination squares for `piece`, for highlight rendering.
    pub fn legal_destinations(&self, piece: Piece) -> Vec<Square> {
        rules::legal_destinations(&self.board, piece)
    }

    /// Attempt to select the piece at `square`.
    ///
    /// Only pieces of the side to move are selectable. Clicking the current
    /// selection again deselects it; clicking another own-color piece moves
    /// the selection there. Empty and enemy squares leave the selection
    /// untouched.
    pub fn select(&mut self, square: Square) -> SelectionChange {
        let Some(piece) = self.board.piece_at(square) else {
            return SelectionChange::Unchanged;
        };
        if piece.color != self.turn {
            return SelectionChange::Unchanged;
        }

        if self.selection.map(|selected| selected.square) == Some(square) {
            self.selection = None;
            debug!("[SELECT] {square} deselected");
            return SelectionChange::Deselected;
        }

        let reselect = self.selection.is_some();
        let destinations = self.legal_destinations(piece);
        self.selection = Some(piece);
        debug!(
            "[SELECT] {:?} {:?} at {square}, {} destinations",
            piece.color,
            piece.piece_type,
            destinations.len()
        );

        if reselect {
            SelectionChange::Reselected {
                piece,
                destinations,
            }
        } else {
            SelectionChange::Selected {
                piece,
                destinations,
            }
        }
    }

    /// Attempt to move the current selection to `target`.
    ///
    /// On `Err` the state is untouched: board, turn, selection, and capture
    /// trays all keep their prior values.
    pub fn attempt_move(&mut self, target: Square) -> GameResult<MoveOutcome> {
        let piece = self.selection.ok_or(GameError::NoSelection)?;
        if !rules::is_valid_move(&self.board, piece, target) {
            debug!("[MOVE] rejected {} to {target}", piece.square);
            return Err(GameError::IllegalMove {
                from: piece.square,
                to: target,
            });
        }
        execute::execute_move(self, piece, target)
    }

    /// Unified click entry for UI collaborators.
    ///
    /// Own-color squares go through [`GameState::select`]; any other square
    /// either moves the current selection there or is reported back as
    /// rejected with the selection standing. Clicks with nothing selected
    /// and nothing selectable are ignored.
    pub fn handle_click(&mut self, square: Square) -> ClickOutcome {
        if self.board.piece_color_at(square) == Some(self.turn) {
            return ClickOutcome::Selection(self.select(square));
        }

        if self.selection.is_none() {
            debug!("[CLICK] {square} ignored, nothing selected");
            return ClickOutcome::Ignored;
        }

        match self.attempt_move(square) {
            Ok(outcome) => ClickOutcome::Moved(outcome),
            Err(err) => {
                debug!("[CLICK] {square} rejected, selection stands");
                ClickOutcome::Rejected(err)
            }
        }
    }
}
