//! Tests for the game session history and transitions.

use tictactui::{Board, GameSession, GameStatus, PlayError, Player, Position};

/// Plays the positions in order, panicking on any rejected move.
fn play_all(session: &mut GameSession, indices: &[usize]) {
    for &i in indices {
        let pos = Position::from_index(i).unwrap();
        session.play(pos).unwrap();
    }
}

#[test]
fn test_accepted_plays_advance_pointer() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 4, 8, 2]);
    assert_eq!(session.current_move(), 4);
    assert_eq!(session.history().len(), 5);
    assert_eq!(session.to_move(), Player::X);
}

#[test]
fn test_winning_game_end_to_end() {
    let mut session = GameSession::new();
    // X: 0, 1, 2 across the top; O: 4, 3.
    play_all(&mut session, &[0, 4, 1, 3, 2]);

    assert_eq!(session.winner(), Some(Player::X));
    assert_eq!(session.status(), GameStatus::Won(Player::X));
    assert_eq!(session.status().to_string(), "Winner: X");

    // No further play is accepted and nothing changes.
    let err = session.play(Position::BottomRight).unwrap_err();
    assert_eq!(err, PlayError::GameOver);
    assert_eq!(session.history().len(), 6);

    // Time travel is still available after the win.
    session.jump_to(2);
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.winner(), None);
    assert_eq!(session.status().to_string(), "X's turn to move");
    assert_eq!(
        session.board().display(),
        "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9"
    );
}

#[test]
fn test_branching_discards_abandoned_future() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 4, 8, 2, 6]);
    assert_eq!(session.history().len(), 6);

    session.jump_to(2);
    session.play(Position::TopCenter).unwrap();

    assert_eq!(session.history().len(), 4);
    assert_eq!(session.current_move(), 3);
    // The branch replays from move 2: entries 3+ of the old game are gone.
    assert!(session.board().is_empty(Position::BottomRight));
}

#[test]
fn test_history_snapshots_are_stable() {
    let mut session = GameSession::new();
    play_all(&mut session, &[4, 0]);

    // Each entry differs from its predecessor by exactly one square.
    let history = session.history();
    assert_eq!(history[0], Board::new());
    for window in history.windows(2) {
        let changed = window[0]
            .squares()
            .iter()
            .zip(window[1].squares().iter())
            .filter(|(before, after)| before != after)
            .count();
        assert_eq!(changed, 1);
    }
}

#[test]
fn test_reset_from_any_point() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 4, 1]);
    session.jump_to(1);
    session.reset();

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.current_move(), 0);
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(*session.board(), Board::new());
}

#[test]
fn test_session_serializes_round_trip() {
    let mut session = GameSession::new();
    play_all(&mut session, &[0, 4, 1]);
    session.jump_to(2);

    let json = serde_json::to_string(&session).unwrap();
    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
    assert_eq!(restored.current_move(), 2);
    assert_eq!(restored.to_move(), Player::X);
}
