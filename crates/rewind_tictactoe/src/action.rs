//! Intents sent by a view layer, and the outcome of a move.
//!
//! A view never calls back into closures over board state; it sends one of
//! these messages and re-reads the engine afterwards.

use crate::error::EngineError;
use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user intent routed into [`crate::GameEngine::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    /// Place the current player's mark on a cell (0-8).
    Move {
        /// Board index, row-major.
        index: usize,
    },
    /// View the board as it was after `step` moves.
    Jump {
        /// History step.
        step: usize,
    },
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Move { index } => write!(f, "move:{index}"),
            Intent::Jump { step } => write!(f, "jump:{step}"),
        }
    }
}

impl FromStr for Intent {
    type Err = EngineError;

    /// Accepts `move:4`, `move 4`, `m4`, `jump:1`, `jump=1` or `j1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidIntent {
            input: s.to_string(),
        };

        let text = s.trim().to_ascii_lowercase();
        let split = text.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (kind, value) = text.split_at(split);
        let value: usize = value.parse().map_err(|_| invalid())?;

        match kind.trim_end_matches([':', '=', ' ']) {
            "m" | "move" => Ok(Intent::Move { index: value }),
            "j" | "jump" => Ok(Intent::Jump { step: value }),
            _ => Err(invalid()),
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// Index is not a board cell.
    #[display("index {_0} is off the board")]
    OutOfBounds(usize),
    /// Cell already holds a mark.
    #[display("{_0} is already occupied")]
    Occupied(Position),
    /// The viewed board already has a winner.
    #[display("{_0} has already won")]
    GameOver(Player),
}

/// Result of [`crate::GameEngine::apply_move`].
///
/// Ignored moves are a normal outcome, so callers are free to drop this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed; `step` is the new current step.
    Placed {
        /// Index of the appended history entry.
        step: usize,
    },
    /// State is unchanged.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_placed(self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}
