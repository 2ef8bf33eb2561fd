//! Stateless rendering of the game view.
//!
//! Everything here is derived per frame from [`App`]; no widget keeps
//! state of its own between draws.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};

/// Draws the full game view: title, board, status, key hints, and the
/// move history pane once at least one move exists.
pub fn draw(frame: &mut Frame, app: &App) {
    let show_history = app.session().history().len() > 1;

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if show_history {
            [Constraint::Min(44), Constraint::Length(26)]
        } else {
            [Constraint::Min(44), Constraint::Length(0)]
        })
        .split(frame.area());

    draw_game(frame, panes[0], app);
    if show_history {
        draw_history(frame, panes[1], app);
    }
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let cursor = match app.focus() {
        Focus::Board => Some(app.cursor()),
        Focus::History => None,
    };
    board::draw_board(frame, chunks[1], app.session().board(), cursor);

    let status = Paragraph::new(app.session().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let hints = Paragraph::new("arrows/1-9 place | tab history | r reset | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[3]);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = (1..app.session().history().len())
        .map(|n| ListItem::new(format!("Reset to move #{n}")))
        .collect();

    let list = List::new(items)
        .block(Block::default().title("Move History").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected_move() - 1));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_fresh_game_view() {
        let app = App::new();
        let text = render(&app);
        assert!(text.contains("Tic-Tac-Toe"));
        assert!(text.contains("X's turn to move"));
        assert!(!text.contains("Move History"));
    }

    #[test]
    fn test_history_pane_appears_after_first_move() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        let text = render(&app);
        assert!(text.contains("Move History"));
        assert!(text.contains("Reset to move #1"));
        assert!(text.contains("O's turn to move"));
    }

    #[test]
    fn test_winner_status() {
        let mut app = App::new();
        // X takes the top row: 1, 2, 3; O answers 5, 4.
        for key in ['1', '5', '2', '4', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let text = render(&app);
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Reset to move #5"));
    }
}
