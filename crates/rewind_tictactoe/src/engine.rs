//! History-tracking game engine.
//!
//! The engine stores every board snapshot since the empty board plus a
//! pointer to the one being viewed. Turn, winner and status are computed from
//! the viewed snapshot on every read and never cached.

use crate::action::{IgnoreReason, Intent, MoveOutcome};
use crate::error::EngineError;
use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, GameStatus, Player};
use crate::view::{GameView, MoveEntry};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine with browsable, branching history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: Vec<Board>,
    pub(crate) current_step: usize,
}

impl GameEngine {
    /// Creates an engine holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
        }
    }

    /// Builds an engine by dispatching `intents` in order from a fresh game.
    ///
    /// Stops at the first jump outside the history.
    #[instrument(skip(intents))]
    pub fn replay(intents: impl IntoIterator<Item = Intent>) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        for intent in intents {
            engine.dispatch(intent)?;
        }
        Ok(engine)
    }

    /// Routes an intent to [`Self::apply_move`] or [`Self::jump_to`].
    ///
    /// Ignored moves are not errors; only an out-of-range jump fails.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), EngineError> {
        match intent {
            Intent::Move { index } => {
                self.apply_move(index);
                Ok(())
            }
            Intent::Jump { step } => self.jump_to(step),
        }
    }

    /// Places the current player's mark at board index `index` (0-8).
    ///
    /// A move on a board that already has a winner, on an occupied cell, or
    /// off the board leaves the engine untouched. Moving from a past step
    /// discards every later entry before appending the new board.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.place(pos),
            None => Self::ignore(IgnoreReason::OutOfBounds(index)),
        }
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        let board = self.current_board();
        if let Some(winner) = check_winner(board) {
            return Self::ignore(IgnoreReason::GameOver(winner));
        }
        if !board.is_empty(pos) {
            return Self::ignore(IgnoreReason::Occupied(pos));
        }

        let player = self.current_turn();
        let next = board.with_mark(pos, player);

        let discarded = self.history.len() - (self.current_step + 1);
        if discarded > 0 {
            info!(discarded, from = self.current_step, "Branching history");
        }
        self.history.truncate(self.current_step + 1);
        self.history.push(next);
        self.current_step = self.history.len() - 1;

        debug!(%player, %pos, step = self.current_step, "Mark placed");
        assert_invariants(self);

        MoveOutcome::Placed {
            step: self.current_step,
        }
    }

    fn ignore(reason: IgnoreReason) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored(reason)
    }

    /// Views the board after `step` moves without discarding later moves.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] when `step` is not in the
    /// history; the current step is left as it was.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Jump outside history rejected");
            return Err(EngineError::StepOutOfRange { step, len });
        }
        self.current_step = step;
        debug!(step, "Jumped");
        assert_invariants(self);
        Ok(())
    }

    /// Discards all history and returns to the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.history.len() - 1, "Resetting game");
        *self = Self::new();
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// The player to move at the current step.
    pub fn current_turn(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// The winner on the current board, if any.
    pub fn current_winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        match check_winner(board) {
            Some(winner) => GameStatus::Won(winner),
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Cells where [`Self::place`] would succeed; empty once the board is won.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.current_winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// One entry per history step, for history navigation.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len()).map(MoveEntry::new).collect()
    }

    /// Every recorded snapshot, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of recorded snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the snapshot being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns true if the latest snapshot is being viewed.
    pub fn is_at_latest(&self) -> bool {
        self.current_step + 1 == self.history.len()
    }

    /// Positions played on the way to the current step, in order.
    #[instrument(skip(self))]
    pub fn played_positions(&self) -> Vec<Position> {
        self.history[..=self.current_step]
            .windows(2)
            .filter_map(|pair| match pair[1].marks_added_since(&pair[0]).as_deref() {
                Some([(pos, _)]) => Some(*pos),
                _ => None,
            })
            .collect()
    }

    /// Owned snapshot of everything a view needs to render.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView::new(
            self.current_board().clone(),
            self.current_step,
            self.current_turn(),
            self.status(),
            self.move_list(),
        )
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn played(indices: &[usize]) -> GameEngine {
        let mut engine = GameEngine::new();
        for &index in indices {
            assert!(engine.apply_move(index).is_placed(), "move {index}");
        }
        engine
    }

    #[test]
    fn test_move_appends_and_advances() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(4), MoveOutcome::Placed { step: 1 });
        assert_eq!(engine.history_len(), 2);
        assert_eq!(
            engine.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(engine.current_turn(), Player::O);
    }

    #[test]
    fn test_off_board_index_ignored() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.apply_move(9),
            MoveOutcome::Ignored(IgnoreReason::OutOfBounds(9))
        );
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_occupied_reason_reported() {
        let mut engine = played(&[0]);
        assert_eq!(
            engine.apply_move(0),
            MoveOutcome::Ignored(IgnoreReason::Occupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_game_over_reason_reported() {
        let mut engine = played(&[0, 3, 1, 4, 2]);
        assert_eq!(
            engine.apply_move(8),
            MoveOutcome::Ignored(IgnoreReason::GameOver(Player::X))
        );
    }

    #[test]
    fn test_legal_moves() {
        assert_eq!(GameEngine::new().legal_moves(), Position::ALL.to_vec());
        let engine = played(&[4, 0]);
        assert_eq!(engine.legal_moves().len(), 7);
        assert!(!engine.legal_moves().contains(&Position::Center));
        assert!(played(&[0, 3, 1, 4, 2]).legal_moves().is_empty());
    }

    #[test]
    fn test_jump_keeps_future() {
        let mut engine = played(&[0, 1, 2]);
        engine.jump_to(1).unwrap();
        assert_eq!(engine.history_len(), 4);
        assert!(!engine.is_at_latest());
        assert_eq!(engine.current_turn(), Player::O);
        engine.jump_to(3).unwrap();
        assert!(engine.is_at_latest());
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut engine = played(&[0, 1]);
        engine.jump_to(1).unwrap();
        assert_eq!(
            engine.jump_to(3),
            Err(EngineError::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(engine.current_step(), 1);
    }

    #[test]
    fn test_win_is_seen_only_at_won_step() {
        let mut engine = played(&[0, 3, 1, 4, 2]);
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
        engine.jump_to(4).unwrap();
        assert_eq!(engine.current_winner(), None);
        assert_eq!(engine.status(), GameStatus::InProgress);
        // From the step before the win, play continues on a new branch.
        assert!(engine.apply_move(8).is_placed());
        assert_eq!(engine.history_len(), 6);
        assert_eq!(engine.current_winner(), None);
    }

    #[test]
    fn test_played_positions_follow_current_step() {
        let mut engine = played(&[4, 0, 8]);
        assert_eq!(
            engine.played_positions(),
            vec![Position::Center, Position::TopLeft, Position::BottomRight]
        );
        engine.jump_to(1).unwrap();
        assert_eq!(engine.played_positions(), vec![Position::Center]);
    }

    #[test]
    fn test_dispatch_and_replay() {
        let intents = [
            Intent::Move { index: 0 },
            Intent::Move { index: 1 },
            Intent::Jump { step: 1 },
            Intent::Move { index: 4 },
        ];
        let engine = GameEngine::replay(intents).unwrap();
        assert_eq!(engine.history_len(), 3);
        assert_eq!(
            engine.played_positions(),
            vec![Position::TopLeft, Position::Center]
        );
    }

    #[test]
    fn test_replay_stops_on_bad_jump() {
        let result = GameEngine::replay([Intent::Move { index: 0 }, Intent::Jump { step: 5 }]);
        assert_eq!(result, Err(EngineError::StepOutOfRange { step: 5, len: 2 }));
    }

    #[test]
    fn test_reset() {
        let mut engine = played(&[0, 1, 2]);
        engine.reset();
        assert_eq!(engine, GameEngine::new());
    }
}
