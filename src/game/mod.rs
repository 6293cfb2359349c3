//! Game state management - selection, execution, capture tracking
//!
//! - `state` - the [`GameState`] value and the click façade
//! - `selection` - transition types the UI renders highlights from
//! - `execute` - validated-move application and [`MoveOutcome`]
//! - `captured` - capture trays and material advantage

pub mod captured;
pub mod execute;
pub mod selection;
pub mod state;


pub use captured::{piece_value, CapturedPieces};
pub use execute::{is_promotion_move, MoveOutcome};
pub use selection::{ClickOutcome, SelectionChange};
pub use state::GameState;
