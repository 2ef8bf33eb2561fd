//! Tic-tac-toe game state: types, rules, and the session history.

mod position;
mod rules;
mod session;
mod types;

pub use position::Position;
pub use rules::check_winner;
pub use session::{GameSession, GameStatus, PlayError};
pub use types::{Board, Player, Square};

/// Alias for clarity at the UI boundary.
pub type Mark = Player;
