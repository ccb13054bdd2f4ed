//! Occupancy invariant: workers and cell back-references agree.

use super::super::{GameState, Position};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: each worker stands on a distinct, undomed cell whose occupant
/// is that worker, and no cell names a worker that is not there.
pub struct OccupancyConsistentInvariant;

impl Invariant<GameState> for OccupancyConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let mut seen = HashSet::new();
        let workers_ok = board.workers().iter().all(|w| {
            let cell = board.cell(w.position());
            seen.insert(w.position()) && cell.occupant() == Some(w.id()) && !cell.is_dome()
        });

        let occupied = Position::all()
            .filter(|pos| board.occupant_at(*pos).is_some())
            .count();
        workers_ok && occupied == board.workers().len()
    }

    fn description() -> &'static str {
        "Worker positions are unique and match cell occupants"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Game, GodPower};

    #[test]
    fn test_holds_after_apollo_swap() {
        let mut game = Game::new(GodPower::Apollo, GodPower::Mortal);
        for (x, y) in [(0, 0), (4, 4), (1, 0), (4, 0)] {
            game.submit_action(Action::PlaceWorker { x, y }).unwrap();
        }
        let state = game
            .submit_action(Action::Move {
                worker_index: 0,
                x: 1,
                y: 0,
            })
            .unwrap();
        assert!(OccupancyConsistentInvariant::holds(&state));
    }
}
