//! Chess move-legality engine
//!
//! Pure board-game logic with no rendering or I/O: board state, per-piece
//! move validation with path blocking, captures with material tracking,
//! pawn promotion, and a click-driven selection machine that enforces turn
//! order. A front-end feeds squares in and renders the outcomes it gets
//! back.
//!
//! # Architecture
//!
//! - `pieces` - piece and color enums, validated `Square` coordinates
//! - `board` - the 8x8 grid and piece placement
//! - `rules` - movement validation and sliding-path blocking
//! - `game` - game state, selection, move execution, captured trays
//!
//! # Example
//!
//! ```
//! use chess_rules::{GameState, Square};
//!
//! let mut game = GameState::new_standard_game();
//!
//! // White opens e2 to e4.
//! let e2 = Square::new(6, 4)?;
//! let e4 = Square::new(4, 4)?;
//! game.select(e2);
//! let outcome = game.attempt_move(e4)?;
//! assert!(!outcome.is_capture());
//! # Ok::<(), chess_rules::GameError>(())
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod pieces;
pub mod rules;

pub use board::Board;
pub use error::{GameError, GameResult};
pub use game::{
    piece_value, CapturedPieces, ClickOutcome, GameState, MoveOutcome, SelectionChange,
};
pub use pieces::{Piece, PieceColor, PieceType, Square};
pub use rules::{is_path_blocked, is_valid_move, legal_destinations};
