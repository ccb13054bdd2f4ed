//! Loss by having no legal move.

use super::super::{GameState, Victory, WorkerId};
use crate::powers::{build_targets, move_targets, rules_for};
use tracing::{debug, instrument};

/// Checks whether the player to act is stuck at the start of a move phase.
///
/// Only the committed worker counts once one exists (after a Prometheus
/// pre-move build). A power that may build without moving is stuck only if
/// it can neither move nor build.
///
/// Returns the opponent's victory reason when the player to act has lost.
#[instrument(skip(state), fields(player = %state.current_player()))]
pub fn check_stalemate(state: &GameState) -> Option<Victory> {
    let candidates: Vec<WorkerId> = match state.turn().worker() {
        Some(worker) => vec![worker],
        None => state
            .board()
            .workers_of(state.current_player())
            .map(|w| w.id())
            .collect(),
    };

    if candidates
        .iter()
        .any(|w| !move_targets(state, *w).is_empty())
    {
        return None;
    }

    let rules = rules_for(state.active_god());
    if rules.builds_without_moving()
        && candidates
            .iter()
            .any(|w| !build_targets(state, *w).is_empty())
    {
        return None;
    }

    debug!(candidates = candidates.len(), "No legal move available");
    Some(Victory::OpponentCannotMove)
}
