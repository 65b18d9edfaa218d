//! Every history begins with the empty board.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Board;

/// Invariant: `history[0]` is the all-empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameEngine> for StartsEmptyInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
