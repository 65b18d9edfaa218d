//! Application state for the terminal view.
//!
//! The app owns the engine but keeps no game state of its own beyond the
//! board cursor and the highlighted history row. Everything drawn is read
//! back from the engine after each intent.

use super::input::{KeyAction, action_for, move_cursor, move_selection};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameEngine, GameView, Intent, Position};
use tracing::{debug, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates an app around a fresh game.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Read-only snapshot for rendering.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(key) else {
            return;
        };
        debug!(?action, focus = ?self.focus, "Key action");

        match (action, self.focus) {
            (KeyAction::Quit, _) => self.should_quit = true,
            (KeyAction::Reset, _) => {
                self.engine.reset();
                self.focus = Focus::Board;
                self.sync_selection();
            }
            (KeyAction::ToggleFocus, Focus::Board) => {
                self.focus = Focus::History;
                self.sync_selection();
            }
            (KeyAction::ToggleFocus, Focus::History) => self.focus = Focus::Board,
            (KeyAction::Navigate(dir), Focus::Board) => {
                self.cursor = move_cursor(self.cursor, dir);
            }
            (KeyAction::Navigate(dir), Focus::History) => {
                self.selected = move_selection(self.selected, self.engine.history_len(), dir);
            }
            (KeyAction::Confirm, Focus::Board) => self.send(Intent::Move {
                index: self.cursor.to_index(),
            }),
            (KeyAction::Confirm, Focus::History) => self.send(Intent::Jump {
                step: self.selected,
            }),
            (KeyAction::PlaceAt(pos), _) => {
                self.cursor = pos;
                self.send(Intent::Move {
                    index: pos.to_index(),
                });
            }
        }
    }

    fn send(&mut self, intent: Intent) {
        if let Err(e) = self.engine.dispatch(intent) {
            warn!(error = %e, %intent, "Intent rejected");
        }
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        self.selected = self.engine.current_step();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Player, Square};

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.engine().current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_history_jump_and_branch() {
        let mut app = App::new();
        for key in ['0', '1', '2'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.engine().history_len(), 4);

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 3);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().current_step(), 1);
        assert_eq!(app.engine().history_len(), 4);

        app.handle_key(KeyCode::Char('4'));
        assert_eq!(app.engine().history_len(), 3);
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('0'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.engine().history_len(), 1);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
