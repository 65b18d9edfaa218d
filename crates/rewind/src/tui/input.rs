//! Key handling for the terminal view.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the board cursor or history selection.
    Navigate(KeyCode),
    /// Place at the cursor, or jump to the selected step.
    Confirm,
    /// Place directly at a cell typed as a digit.
    PlaceAt(Position),
    /// Switch focus between board and history list.
    ToggleFocus,
    /// Start over with an empty board.
    Reset,
    /// Leave the UI.
    Quit,
}

/// Maps a key code to an action, if it has one.
pub fn action_for(key: KeyCode) -> Option<KeyAction> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(KeyAction::Navigate(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Confirm),
        KeyCode::Tab | KeyCode::BackTab => Some(KeyAction::ToggleFocus),
        KeyCode::Char('r') => Some(KeyAction::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize))
            .map(KeyAction::PlaceAt),
        _ => None,
    }
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Moves a list selection up or down within `0..len`.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down if selected + 1 < len => selected + 1,
        _ => selected,
    }
}
