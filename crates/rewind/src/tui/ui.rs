//! Stateless UI rendering.

use super::app::{App, Focus};
use crate::config::DisplayConfig;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{GameView, Player, Position, Square, rules::winning_line};

const HINTS: &str = "arrows move  enter place/jump  0-8 place  tab history  r reset  q quit";

/// Draws one frame.
pub fn draw(frame: &mut Frame, app: &App, display: &DisplayConfig) {
    let view = app.view();

    let footer = if *display.show_hints() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Title
            Constraint::Min(13),        // Board + history
            Constraint::Length(3),      // Status
            Constraint::Length(footer), // Hints
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(28)])
        .split(chunks[1]);

    let highlight = if *display.highlight_win() {
        winning_line(view.board()).map(|(_, line)| line)
    } else {
        None
    };
    draw_board(frame, body[0], app, &view, highlight);
    draw_history(frame, body[1], app, &view);

    let status_color = if view.status().is_over() {
        Color::Green
    } else {
        Color::Yellow
    };
    let status = Paragraph::new(view.status_line())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if *display.show_hints() {
        let hints = Paragraph::new(HINTS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[3]);
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style)
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    highlight: Option<[Position; 3]>,
) {
    let block = pane_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, view, highlight, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    highlight: Option<[Position; 3]>,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            let winning = highlight.is_some_and(|line| line.contains(&pos));
            draw_cell(frame, cols[col * 2], app, view, pos, winning);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    pos: Position,
    winning: bool,
) {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index()),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if winning {
        style = style.bg(Color::Green);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::History;

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if entry.step() == *view.current_step() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block("History", focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3]).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render_buffer(app: &App) -> Buffer {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw(frame, app, &DisplayConfig::default()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(app: &App) -> String {
        render_buffer(app)
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    /// Foreground color where `text` first appears on screen.
    fn fg_of(buffer: &Buffer, text: &str) -> Option<Color> {
        let len = text.chars().count();
        for y in 0..buffer.area.height {
            let row: Vec<&str> = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            for x in 0..=row.len().saturating_sub(len) {
                if row[x..x + len].concat() == text {
                    return Some(buffer[(x as u16, y)].fg);
                }
            }
        }
        None
    }

    #[test]
    fn test_renders_status_and_history() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('4'));
        let screen = render(&app);
        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #1"));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new();
        for key in ['0', '3', '1', '4', '2'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(render(&app).contains("Winner: X"));
    }

    #[test]
    fn test_status_color_follows_game_over() {
        let mut app = App::new();
        assert_eq!(fg_of(&render_buffer(&app), "Next player: X"), Some(Color::Yellow));

        for key in ['0', '1', '2', '4', '3', '5', '7', '6', '8'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(fg_of(&render_buffer(&app), "Next player: O"), Some(Color::Green));
    }
}
