//! Game session: the board history, the position pointer, and the
//! transitions that move between them.
//!
//! A session keeps every board snapshot produced since the start of the
//! game. Playing a move appends a snapshot; jumping moves the pointer
//! without touching the snapshots; playing after a jump truncates the
//! abandoned future before appending. The player to move is always
//! recomputed from the pointer's parity, never stored, so position and
//! turn cannot disagree after a jump.

use super::rules::check_winner;
use super::types::{Board, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a play was not applied.
///
/// The terminal front-end discards these silently; they exist so library
/// callers and tests can tell the two rejection causes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The square at the position is already occupied.
    #[display("square {_0} is already occupied")]
    SquareOccupied(Position),

    /// A winner exists; the game accepts no further moves.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for PlayError {}

/// Game status derived from the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner yet; the given player moves next.
    InProgress(Player),
    /// The given player completed a line.
    Won(Player),
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "{player}'s turn to move"),
            GameStatus::Won(player) => write!(f, "Winner: {player}"),
        }
    }
}

/// A single local tic-tac-toe session.
///
/// Invariants: the history always holds at least the initial empty
/// board, the pointer always addresses a history entry, and consecutive
/// entries differ by exactly one square going from empty to occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Board snapshots, index 0 = empty board, index n = board after move n.
    history: Vec<Board>,
    /// Which history entry the game is currently at.
    current: usize,
}

impl GameSession {
    /// Creates a new session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// Returns the board at the current position.
    pub fn board(&self) -> &Board {
        &self.history[self.current]
    }

    /// Returns all board snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the move number the session is currently at.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Returns the player to move, derived from the move number's parity.
    pub fn to_move(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.board())
    }

    /// Returns the status of the current board.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress(self.to_move()),
        }
    }

    /// Plays the current player's mark at the given position.
    ///
    /// Any future beyond the current position is discarded before the new
    /// snapshot is appended, so playing after a jump branches the game
    /// from that point.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::GameOver`] if the current board already has a
    /// winner, or [`PlayError::SquareOccupied`] if the square is taken.
    /// The session is unchanged in either case.
    #[instrument(skip(self), fields(position = %pos, to_move = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<(), PlayError> {
        if self.winner().is_some() {
            return Err(PlayError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(PlayError::SquareOccupied(pos));
        }

        let next = self.board().place(pos, self.to_move());
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        debug!(move_number = self.current, "move accepted");
        Ok(())
    }

    /// Moves the session back (or forward) to the given move number.
    ///
    /// No snapshot is touched; only the pointer changes. The index must
    /// address a history entry — the view only ever offers valid ones.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, n: usize) {
        assert!(n < self.history.len(), "move {n} is not in the history");
        self.current = n;
        debug!(move_number = n, to_move = %self.to_move(), "jumped");
    }

    /// Discards the history and returns to the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history = vec![Board::new()];
        self.current = 0;
        debug!("session reset");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
