//! First-class invariants for the history engine.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and serve as documentation of system
//! guarantees.

use crate::engine::GameEngine;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_new::new)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[new(into)]
    pub description: String,
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

pub mod single_step;
pub mod starts_empty;
pub mod step_in_range;

pub use single_step::SingleStepHistoryInvariant;
pub use starts_empty::StartsEmptyInvariant;
pub use step_in_range::StepInRangeInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    StartsEmptyInvariant,
    SingleStepHistoryInvariant,
    StepInRangeInvariant,
);

/// Asserts that all engine invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions)
        && let Err(violations) = EngineInvariants::check_all(engine)
    {
        for violation in &violations {
            warn!(%violation, "Engine invariant violated");
        }
        debug_assert!(false, "Engine invariants violated: {violations:?}");
    }
}
