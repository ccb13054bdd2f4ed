//! Worker count invariant.

use super::super::{GameState, Player, TurnPhase, WORKERS_PER_PLAYER};
use super::Invariant;

/// Invariant: no player has more than two workers, worker indices are in
/// range, and after placement each player has exactly two.
pub struct WorkerCountInvariant;

impl Invariant<GameState> for WorkerCountInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let indices_ok = board
            .workers()
            .iter()
            .all(|w| usize::from(w.id().index) < WORKERS_PER_PLAYER);

        let placing = state.phase() == TurnPhase::Placement;
        let counts_ok = [Player::A, Player::B].into_iter().all(|player| {
            let count = board.worker_count(player);
            if placing {
                count <= WORKERS_PER_PLAYER
            } else {
                count == WORKERS_PER_PLAYER
            }
        });
        indices_ok && counts_ok
    }

    fn description() -> &'static str {
        "Each player has at most two workers, exactly two after placement"
    }
}
