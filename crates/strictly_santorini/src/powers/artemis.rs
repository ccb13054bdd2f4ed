//! Artemis: a second move, but not back to where the worker started.

use super::{GodRules, MovePlan, MoveRequest, can_extra_move, standard_move};
use crate::action::ActionError;
use crate::rules::MoveStep;
use crate::{GameState, GodPower, TurnPhase};

/// Artemis's rules.
pub struct Artemis;

impl GodRules for Artemis {
    fn power(&self) -> GodPower {
        GodPower::Artemis
    }

    fn check_move(&self, request: &MoveRequest<'_>) -> Result<MovePlan, ActionError> {
        let turn = request.state.turn();
        if turn.moves_made() > 0 && turn.start() == Some(request.to) {
            return Err(ActionError::PowerRestriction {
                power: GodPower::Artemis,
                reason: "cannot move back to the starting cell",
            });
        }
        standard_move(request)
    }

    fn after_move(&self, state: &GameState, _step: &MoveStep) -> TurnPhase {
        if can_extra_move(state) {
            TurnPhase::ExtraMoveDecision
        } else {
            TurnPhase::Build
        }
    }
}
