//! Height invariant: every tower is between ground and dome.

use super::super::{DOME_HEIGHT, GameState};
use super::Invariant;

/// Invariant: every cell height is in `0..=4`.
pub struct HeightsInRangeInvariant;

impl Invariant<GameState> for HeightsInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .board()
            .heights()
            .iter()
            .flatten()
            .all(|h| *h <= DOME_HEIGHT)
    }

    fn description() -> &'static str {
        "Every cell height is between 0 and 4"
    }
}
