//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board snapshots. Rules are separated
//! from board storage so the session layer can derive status wherever
//! it is needed instead of caching it.

pub mod win;

pub use win::check_winner;
