//! Apollo: move onto an opponent and swap places.

use super::{Displacement, GodRules, MovePlan, MoveRequest, standard_move};
use crate::action::ActionError;
use crate::GodPower;

/// Apollo's rules.
pub struct Apollo;

impl GodRules for Apollo {
    fn power(&self) -> GodPower {
        GodPower::Apollo
    }

    fn check_move(&self, request: &MoveRequest<'_>) -> Result<MovePlan, ActionError> {
        let board = request.state.board();
        let Some(occupant) = board.occupant_at(request.to) else {
            return standard_move(request);
        };
        if occupant.player == request.worker.player {
            return Err(ActionError::CellOccupied(request.to));
        }

        let from = board.height_at(request.from);
        let to = board.height_at(request.to);
        if to > from.saturating_add(1) {
            return Err(ActionError::HeightViolation { from, to });
        }
        Ok(MovePlan {
            worker: request.worker,
            to: request.to,
            displacement: Displacement::Swap { worker: occupant },
        })
    }
}
