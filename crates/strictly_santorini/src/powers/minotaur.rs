//! Minotaur: push an opponent one cell straight back.

use super::{Displacement, GodRules, MovePlan, MoveRequest, standard_move};
use crate::action::ActionError;
use crate::{GodPower, Position};

/// Minotaur's rules.
///
/// The cell beyond the opponent, in the direction of the move, must be on
/// the board, free and not domed. Its height does not matter.
pub struct Minotaur;

impl GodRules for Minotaur {
    fn power(&self) -> GodPower {
        GodPower::Minotaur
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

        let (dx, dy) = request.from.delta_to(request.to);
        let beyond = Position::new(
            i32::from(request.to.x()) + dx,
            i32::from(request.to.y()) + dy,
        )?;
        let cell = board.cell(beyond);
        if cell.is_occupied() {
            return Err(ActionError::CellOccupied(beyond));
        }
        if cell.is_dome() {
            return Err(ActionError::HeightViolation {
                from: to,
                to: cell.height(),
            });
        }

        Ok(MovePlan {
            worker: request.worker,
            to: request.to,
            displacement: Displacement::Push {
                worker: occupant,
                to: beyond,
            },
        })
    }
}
