//! First-class invariants for Santorini.
//!
//! Invariants are properties every committed [`GameState`] must satisfy.
//! The engine checks the full set after each accepted action; each one can
//! also be tested on its own.

use super::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod heights_in_range;
pub mod occupancy_consistent;
pub mod strategy_derived;
pub mod terminal_consistent;
pub mod worker_count;

pub use heights_in_range::HeightsInRangeInvariant;
pub use occupancy_consistent::OccupancyConsistentInvariant;
pub use strategy_derived::StrategyDerivedInvariant;
pub use terminal_consistent::TerminalConsistentInvariant;
pub use worker_count::WorkerCountInvariant;

/// All Santorini invariants as a composable set.
pub type SantoriniInvariants = (
    HeightsInRangeInvariant,
    OccupancyConsistentInvariant,
    WorkerCountInvariant,
    TerminalConsistentInvariant,
    StrategyDerivedInvariant,
);

/// Invariants about the board and outcome alone, without the derived flags.
///
/// A snapshot must pass these before its strategy flags can be derived.
pub type StructuralInvariants = (
    HeightsInRangeInvariant,
    OccupancyConsistentInvariant,
    WorkerCountInvariant,
    TerminalConsistentInvariant,
);

/// Checks the full set and joins the violations into one message.
pub(crate) fn check_state(state: &GameState) -> Result<(), String> {
    describe::<SantoriniInvariants>(state)
}

/// Checks [`StructuralInvariants`] and joins the violations into one message.
pub(crate) fn check_structure(state: &GameState) -> Result<(), String> {
    describe::<StructuralInvariants>(state)
}

fn describe<I: InvariantSet<GameState>>(state: &GameState) -> Result<(), String> {
    I::check_all(state).map_err(|violations| {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}
