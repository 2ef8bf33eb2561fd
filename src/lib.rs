//! Tic-tac-toe game state with move history and time travel.
//!
//! The library holds the pure state-transition logic: immutable board
//! snapshots, win detection over the eight fixed lines, and a session
//! that records every snapshot so the game can be rewound to any prior
//! move. The terminal front-end lives in the `tictactui` binary and
//! renders from this state.
//!
//! # Example
//!
//! ```
//! use tictactui::{GameSession, Player, Position};
//!
//! let mut session = GameSession::new();
//! session.play(Position::Center)?;
//! session.play(Position::TopLeft)?;
//! assert_eq!(session.to_move(), Player::X);
//!
//! // Rewind one move and branch from there.
//! session.jump_to(1);
//! session.play(Position::BottomRight)?;
//! assert_eq!(session.history().len(), 3);
//! # Ok::<(), tictactui::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;

pub use game::{
    Board, GameSession, GameStatus, Mark, PlayError, Player, Position, Square, check_winner,
};
