//! Hermes: any number of level moves, possibly none, then a build.

use super::{GodRules, MovePlan, MoveRequest, standard_move};
use crate::action::ActionError;
use crate::rules::MoveStep;
use crate::{GameState, GodPower, TurnPhase};

/// Hermes's rules.
///
/// The first move of a turn follows the normal rules. If it stayed level the
/// worker remains in the move phase, where only level moves are allowed
/// until `EndMove`.
pub struct Hermes;

impl GodRules for Hermes {
    fn power(&self) -> GodPower {
        GodPower::Hermes
    }

    fn check_move(&self, request: &MoveRequest<'_>) -> Result<MovePlan, ActionError> {
        let plan = standard_move(request)?;
        let board = request.state.board();
        if request.state.turn().moves_made() > 0
            && board.height_at(request.from) != board.height_at(request.to)
        {
            return Err(ActionError::PowerRestriction {
                power: GodPower::Hermes,
                reason: "further moves must stay on the same level",
            });
        }
        Ok(plan)
    }

    fn after_move(&self, _state: &GameState, step: &MoveStep) -> TurnPhase {
        if step.is_level() {
            TurnPhase::Move
        } else {
            TurnPhase::Build
        }
    }

    fn builds_without_moving(&self) -> bool {
        true
    }
}
