//! The current step always points into the history.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: `current_step < history.len()`.
pub struct StepInRangeInvariant;

impl Invariant<GameEngine> for StepInRangeInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_step() < engine.history_len()
    }

    fn description() -> &'static str {
        "Current step points into the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_moves_and_jumps() {
        let mut engine = GameEngine::new();
        engine.apply_move(4);
        engine.apply_move(0);
        assert!(StepInRangeInvariant::holds(&engine));
        engine.jump_to(0).unwrap();
        assert!(StepInRangeInvariant::holds(&engine));
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut engine = GameEngine::new();
        engine.current_step = 1;
        assert!(!StepInRangeInvariant::holds(&engine));
    }
}
