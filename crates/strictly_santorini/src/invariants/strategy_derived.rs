//! Strategy invariant: the flags are a pure function of the rest of the state.

use super::super::{GameState, StrategyState};
use super::Invariant;

/// Invariant: the stored [`StrategyState`] equals a fresh derivation.
pub struct StrategyDerivedInvariant;

impl Invariant<GameState> for StrategyDerivedInvariant {
    fn holds(state: &GameState) -> bool {
        *state.strategy() == StrategyState::derive(state)
    }

    fn description() -> &'static str {
        "Strategy flags match the state they were derived from"
    }
}
