//! Demeter: a second build on a different cell.

use super::{AfterBuild, BuildRequest, GodRules, can_extra_build, standard_build};
use crate::action::ActionError;
use crate::{BuildKind, GameState, GodPower, TurnPhase};

/// Demeter's rules.
pub struct Demeter;

impl GodRules for Demeter {
    fn power(&self) -> GodPower {
        GodPower::Demeter
    }

    fn check_build(&self, request: &BuildRequest<'_>) -> Result<BuildKind, ActionError> {
        let turn = request.state.turn();
        if turn.extra_build() && turn.first_build() == Some(request.target) {
            return Err(ActionError::PowerRestriction {
                power: GodPower::Demeter,
                reason: "second build must be on a different cell",
            });
        }
        standard_build(GodPower::Demeter, request)
    }

    fn after_build(&self, state: &GameState) -> AfterBuild {
        if can_extra_build(state) {
            AfterBuild::Enter(TurnPhase::ExtraBuildDecision)
        } else {
            AfterBuild::EndTurn
        }
    }
}
