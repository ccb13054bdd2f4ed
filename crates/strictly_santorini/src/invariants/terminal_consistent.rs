//! Terminal state invariant.

use super::super::{GameState, TurnPhase};
use super::Invariant;

/// Invariant: the game-over flag, the `GameOver` phase, the winner and the
/// victory reason are all set together or not at all.
pub struct TerminalConsistentInvariant;

impl Invariant<GameState> for TerminalConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let ended = state.game_ended();
        (state.phase() == TurnPhase::GameOver) == ended
            && state.winner().is_some() == ended
            && state.victory().is_some() == ended
    }

    fn description() -> &'static str {
        "Game over flag, phase, winner and victory agree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        assert!(TerminalConsistentInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_flag_without_winner_fails() {
        let mut state = GameState::default();
        state.game_ended = true;
        state.phase = TurnPhase::GameOver;
        assert!(!TerminalConsistentInvariant::holds(&state));
    }
}
