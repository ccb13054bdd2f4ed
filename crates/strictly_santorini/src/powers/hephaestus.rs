//! Hephaestus: one more block on the same cell.

use super::{AfterBuild, BuildRequest, GodRules, can_extra_build, standard_build};
use crate::action::ActionError;
use crate::{BuildKind, DOME_HEIGHT, GameState, GodPower, TurnPhase};

/// Hephaestus's rules.
///
/// The second block may not complete a dome, so it is only on offer while
/// the first build left the cell below level 3.
pub struct Hephaestus;

impl GodRules for Hephaestus {
    fn power(&self) -> GodPower {
        GodPower::Hephaestus
    }

    fn check_build(&self, request: &BuildRequest<'_>) -> Result<BuildKind, ActionError> {
        let turn = request.state.turn();
        if turn.extra_build() {
            if turn.first_build() != Some(request.target) {
                return Err(ActionError::PowerRestriction {
                    power: GodPower::Hephaestus,
                    reason: "second build must be on the same cell",
                });
            }
            let height = request.state.board().height_at(request.target);
            if height.saturating_add(1) >= DOME_HEIGHT {
                return Err(ActionError::HeightViolation {
                    from: height,
                    to: height.saturating_add(1),
                });
            }
        }
        standard_build(GodPower::Hephaestus, request)
    }

    fn after_build(&self, state: &GameState) -> AfterBuild {
        if can_extra_build(state) {
            AfterBuild::Enter(TurnPhase::ExtraBuildDecision)
        } else {
            AfterBuild::EndTurn
        }
    }
}
