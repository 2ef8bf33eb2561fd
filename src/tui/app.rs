//! Application state: the game session plus presentation state.
//!
//! All rule checks live in the session; this layer only routes key
//! presses into session transitions and keeps track of where the
//! keyboard focus is.

use crossterm::event::KeyCode;
use tictactui::{GameSession, Position};
use tracing::debug;

use super::input;

/// Which pane keyboard input is directed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the history selection.
    History,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    /// Move number the history selection points at (1-based; entry 0 has
    /// no jump control, matching the move list this game is played with).
    selected_move: usize,
}

impl App {
    /// Creates a new application at the start of a game.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 1,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the history entry the selection points at.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Handles a key press. Returns `false` when the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c @ '1'..='9') => {
                // Digits address squares directly, whatever the focus.
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.play(pos);
                }
            }
            key => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        true
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.selected_move = self.selected_move.saturating_sub(1).max(1),
            KeyCode::Down => {
                self.selected_move = (self.selected_move + 1).min(self.last_move());
            }
            KeyCode::Enter => {
                self.session.jump_to(self.selected_move);
            }
            _ => {}
        }
    }

    /// Plays at the given position. Illegal moves are dropped; the
    /// session reports why and the status line simply stays as it was.
    fn play(&mut self, pos: Position) {
        match self.session.play(pos) {
            Ok(()) => {
                // The truncated history may no longer contain the selection.
                self.selected_move = self.selected_move.min(self.last_move());
            }
            Err(err) => debug!(%err, "move ignored"),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.focus = Focus::Board;
        self.selected_move = 1;
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            // The history pane only exists once a move has been made.
            Focus::Board if self.last_move() > 0 => {
                self.selected_move = self.selected_move.min(self.last_move());
                Focus::History
            }
            Focus::Board => Focus::Board,
            Focus::History => Focus::Board,
        };
    }

    fn last_move(&self) -> usize {
        self.session.history().len() - 1
    }
}
