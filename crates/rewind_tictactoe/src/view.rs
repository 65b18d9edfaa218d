//! Read-only snapshots handed to a view layer.

use crate::types::{Board, GameStatus, Player};
use derive_getters::Getters;
use serde::Serialize;

/// One row of the history navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoveEntry {
    step: usize,
    is_start: bool,
}

impl MoveEntry {
    /// Entry for history step `step`.
    pub fn new(step: usize) -> Self {
        Self {
            step,
            is_start: step == 0,
        }
    }

    /// History step this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// True only for the empty starting board.
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// Button text for this entry.
    pub fn label(&self) -> String {
        if self.is_start {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

/// Everything needed to draw one frame, detached from the engine.
///
/// Step numbers in `moves` are reused after a branch, so a view keying rows
/// by step must not assume a step always names the same board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Step being viewed.
    current_step: usize,
    /// Player to move at the current step.
    next_player: Player,
    /// Status of the current board.
    status: GameStatus,
    /// History navigation entries.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Status line: `Winner: X` on a won board, `Next player: O` otherwise.
    ///
    /// A drawn board still names the player on turn; use [`Self::status`]
    /// to tell it apart.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::Won(winner) => format!("Winner: {winner}"),
            GameStatus::Draw | GameStatus::InProgress => {
                format!("Next player: {}", self.next_player)
            }
        }
    }
}

impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "{}", self.status_line())?;
        for entry in &self.moves {
            let marker = if entry.step == self.current_step { '>' } else { ' ' };
            writeln!(f, "{marker} {}. {}", entry.step, entry.label())?;
        }
        Ok(())
    }
}
