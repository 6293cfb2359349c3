//! End-to-end game flow tests through the public API
//!
//! Whole games driven click by click, the way a front-end drives the
//! engine: standard opening exchanges, rejected attempts leaving the state
//! alone, a full march to promotion, and state serialization.

use chess_rules::{ClickOutcome, GameError, GameState, PieceColor, PieceType, Square};

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col).expect("test square in bounds")
}

/// Click `from` then `to` and require that the move executes.
fn play(game: &mut GameState, from: Square, to: Square) -> chess_rules::MoveOutcome {
    match game.handle_click(from) {
        ClickOutcome::Selection(_) => {}
        other => panic!("expected a selection at {from}, got {other:?}"),
    }
    match game.handle_click(to) {
        ClickOutcome::Moved(outcome) => outcome,
        other => panic!("expected a move to {to}, got {other:?}"),
    }
}

// ============================================================================
// Opening Play
// ============================================================================

#[test]
fn test_opening_exchange_fills_capture_tray() {
    //! 1. e4 d5 2. exd5 - the capture lands in White's tray
    let mut game = GameState::new_standard_game();

    play(&mut game, sq(6, 4), sq(4, 4));
    play(&mut game, sq(1, 3), sq(3, 3));
    let capture = play(&mut game, sq(4, 4), sq(3, 3));

    assert_eq!(capture.captured, Some(PieceType::Pawn));
    assert_eq!(game.captured().white_captured, vec![PieceType::Pawn]);
    assert_eq!(game.captured().material_advantage(), 1);
    assert_eq!(game.turn(), PieceColor::Black);
    assert_eq!(game.board().pieces().count(), 31);
}

#[test]
fn test_double_step_and_knight_leap_from_start() {
    let mut game = GameState::new_standard_game();

    let pawn = play(&mut game, sq(6, 0), sq(4, 0));
    assert_eq!(pawn.piece_type, PieceType::Pawn);

    play(&mut game, sq(1, 7), sq(3, 7));

    // The b1 knight clears the pawn wall without a path check.
    let knight = play(&mut game, sq(7, 1), sq(5, 0));
    assert_eq!(knight.piece_type, PieceType::Knight);
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_rejected_attempts_never_advance_the_game() {
    let mut game = GameState::new_standard_game();
    let start = game.clone();

    // Triple pawn step.
    game.handle_click(sq(6, 0));
    assert!(matches!(
        game.handle_click(sq(3, 0)),
        ClickOutcome::Rejected(GameError::IllegalMove { .. })
    ));
    assert_eq!(game.turn(), PieceColor::White);

    // Rook sliding through its own pawn.
    game.handle_click(sq(7, 0));
    assert!(matches!(
        game.handle_click(sq(4, 0)),
        ClickOutcome::Rejected(GameError::IllegalMove { .. })
    ));

    // Clear the selection; everything else must match the fresh game.
    game.handle_click(sq(7, 0));
    assert_eq!(game, start);
}

#[test]
fn test_selection_survives_rejection_then_moves() {
    //! A rejected target does not cost the player their selection
    let mut game = GameState::new_standard_game();

    game.handle_click(sq(6, 4));
    assert!(matches!(
        game.handle_click(sq(3, 4)),
        ClickOutcome::Rejected(_)
    ));
    assert_eq!(game.selection().map(|p| p.square), Some(sq(6, 4)));

    // Same selection, now a legal target.
    assert!(matches!(
        game.handle_click(sq(4, 4)),
        ClickOutcome::Moved(_)
    ));
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn test_pawn_march_to_promotion_with_capture() {
    //! 1. a4 b5 2. axb5 Nc6 3. b6 Nb4 4. bxc7 Na6 5. cxd8=Q
    let mut game = GameState::new_standard_game();

    play(&mut game, sq(6, 0), sq(4, 0));
    play(&mut game, sq(1, 1), sq(3, 1));

    let first = play(&mut game, sq(4, 0), sq(3, 1));
    assert_eq!(first.captured, Some(PieceType::Pawn));

    play(&mut game, sq(0, 1), sq(2, 2));
    play(&mut game, sq(3, 1), sq(2, 1));
    play(&mut game, sq(2, 2), sq(4, 1));

    let second = play(&mut game, sq(2, 1), sq(1, 2));
    assert_eq!(second.captured, Some(PieceType::Pawn));

    play(&mut game, sq(4, 1), sq(2, 0));

    let last = play(&mut game, sq(1, 2), sq(0, 3));
    assert!(last.is_promotion());
    assert_eq!(last.captured, Some(PieceType::Queen));

    let promoted = game.board().piece_at(sq(0, 3)).expect("queen on d8");
    assert_eq!(promoted.piece_type, PieceType::Queen);
    assert_eq!(promoted.color, PieceColor::White);
    assert_eq!(
        game.captured().material_advantage(),
        1 + 1 + 9,
        "two pawns and a queen taken"
    );
    assert_eq!(game.turn(), PieceColor::Black);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_game_state_survives_json_round_trip() {
    //! A mid-game state, capture tray included, reloads identically
    let mut game = GameState::new_standard_game();
    play(&mut game, sq(6, 4), sq(4, 4));
    play(&mut game, sq(1, 3), sq(3, 3));
    play(&mut game, sq(4, 4), sq(3, 3));

    let json = serde_json::to_string(&game).expect("state serializes");
    let restored: GameState = serde_json::from_str(&json).expect("state deserializes");

    assert_eq!(restored, game);
    assert_eq!(restored.turn(), PieceColor::Black);
    assert_eq!(restored.captured().material_advantage(), 1);
}

#[test]
fn test_square_json_rejects_out_of_range() {
    let result: Result<Square, _> = serde_json::from_str("[8, 0]");
    assert!(result.is_err(), "row 8 must not deserialize");

    let square: Square = serde_json::from_str("[6, 4]").expect("e2 deserializes");
    assert_eq!(square, sq(6, 4));
}
