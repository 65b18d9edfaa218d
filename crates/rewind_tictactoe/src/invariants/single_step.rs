//! Consecutive history entries differ by exactly one legal placement.

use super::Invariant;
use crate::engine::GameEngine;
use crate::rules::check_winner;
use crate::types::Player;

/// Invariant: each entry adds exactly one mark to its predecessor.
///
/// Entry `k` must add the mark of the player who moves at step `k - 1`
/// (X for odd `k`), and no entry may follow a board that already had a
/// winner.
pub struct SingleStepHistoryInvariant;

impl Invariant<GameEngine> for SingleStepHistoryInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                if check_winner(before).is_some() {
                    return false;
                }
                match after.marks_added_since(before).as_deref() {
                    Some([(_, player)]) => *player == Player::for_step(step),
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each history entry adds one mark for the player on turn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_played_game_holds() {
        let mut engine = GameEngine::new();
        for index in [4, 0, 8, 2] {
            engine.apply_move(index);
        }
        assert!(SingleStepHistoryInvariant::holds(&engine));
    }

    #[test]
    fn test_wrong_player_violates() {
        let mut engine = GameEngine::new();
        engine
            .history
            .push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!SingleStepHistoryInvariant::holds(&engine));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut engine = GameEngine::new();
        let board = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        engine.history.push(board);
        assert!(!SingleStepHistoryInvariant::holds(&engine));
    }

    #[test]
    fn test_unchanged_step_violates() {
        let mut engine = GameEngine::new();
        engine.history.push(Board::new());
        assert!(!SingleStepHistoryInvariant::holds(&engine));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index);
        }
        let after_win = engine
            .current_board()
            .with_mark(Position::BottomRight, Player::O);
        engine.history.push(after_win);
        assert!(!SingleStepHistoryInvariant::holds(&engine));
    }
}
