//! Atlas: domes at any level.

use super::{AfterBuild, BuildRequest, GodRules};
use crate::action::ActionError;
use crate::{BuildKind, GameState, GodPower, TurnPhase};

/// Atlas's rules.
pub struct Atlas;

impl GodRules for Atlas {
    fn power(&self) -> GodPower {
        GodPower::Atlas
    }

    fn check_build(&self, request: &BuildRequest<'_>) -> Result<BuildKind, ActionError> {
        Ok(if request.dome {
            BuildKind::Dome
        } else {
            BuildKind::Block
        })
    }

    /// Offers to cap the cell just built unless it is already a dome.
    fn after_build(&self, state: &GameState) -> AfterBuild {
        match state.turn().first_build() {
            Some(cell) if !state.board().cell(cell).is_dome() => {
                AfterBuild::Enter(TurnPhase::DomeDecision)
            }
            _ => AfterBuild::EndTurn,
        }
    }
}
