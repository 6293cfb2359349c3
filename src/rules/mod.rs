//! Chess rules - pure move legality
//!
//! Pure functions over [`Board`](crate::board::Board) snapshots, no game
//! state and no side effects, so every rule is unit-testable in isolation.
//!
//! - `piece_moves` - per-piece movement rules and destination enumeration
//! - `path` - path blocking for sliding pieces

pub mod path;
pub mod piece_moves;


pub use path::is_path_blocked;
pub use piece_moves::{is_valid_move, legal_destinations};
