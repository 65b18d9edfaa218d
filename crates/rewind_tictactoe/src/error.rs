//! Engine error types.

use derive_more::{Display, Error};

/// Errors surfaced across the engine boundary.
///
/// Illegal moves are not errors; see [`crate::MoveOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A jump targeted a step that is not in the history.
    #[display("Step {step} is outside the history (0..{len})")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// Text could not be parsed as an intent.
    #[display("Invalid intent {input:?}: expected move:<0-8> or jump:<step>")]
    InvalidIntent {
        /// The rejected input.
        input: String,
    },
}
