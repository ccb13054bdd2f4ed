//! The complete, serializable game snapshot.
//!
//! [`GameState`] holds everything needed to resume a match: the board, whose
//! turn it is, the phase, per-turn bookkeeping and the derived strategy flags.

use super::{Board, GodAssignment, GodPower, Player, Position, TurnPhase, Victory, WorkerId};
use super::{WORKERS_PER_PLAYER, powers};
use crate::action::ActionError;
use serde::{Deserialize, Serialize};

/// What has happened so far in the current turn. Cleared at every turn end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnProgress {
    pub(crate) worker: Option<WorkerId>,
    pub(crate) start: Option<Position>,
    pub(crate) moves_made: u8,
    pub(crate) moved_up: bool,
    pub(crate) first_build: Option<Position>,
    pub(crate) builds_made: u8,
    pub(crate) built_before_move: bool,
    pub(crate) extra_move: bool,
    pub(crate) extra_build: bool,
}

impl TurnProgress {
    /// The worker committed to this turn, once one has acted.
    pub fn worker(&self) -> Option<WorkerId> {
        self.worker
    }

    /// Where the committed worker stood when the turn began.
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    /// Moves made this turn.
    pub fn moves_made(&self) -> u8 {
        self.moves_made
    }

    /// True once any chosen move this turn went up a level.
    pub fn moved_up(&self) -> bool {
        self.moved_up
    }

    /// Cell of the first build after moving.
    pub fn first_build(&self) -> Option<Position> {
        self.first_build
    }

    /// Builds made after moving.
    pub fn builds_made(&self) -> u8 {
        self.builds_made
    }

    /// True if Prometheus built before moving.
    pub fn built_before_move(&self) -> bool {
        self.built_before_move
    }

    /// True if an extra move was accepted.
    pub fn extra_move(&self) -> bool {
        self.extra_move
    }

    /// True if an extra build was accepted.
    pub fn extra_build(&self) -> bool {
        self.extra_build
    }

    /// Commits `worker` to the turn, remembering where it started.
    pub(crate) fn commit(&mut self, worker: WorkerId, start: Position) {
        if self.worker.is_none() {
            self.worker = Some(worker);
            self.start = Some(start);
        }
    }
}

/// Flags describing what the active player may do right now.
///
/// Always recomputed from the rest of the state with [`StrategyState::derive`];
/// never set on their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyState {
    can_extra_move: bool,
    can_extra_build: bool,
    can_build_dome: bool,
    can_build_before_move: bool,
    can_end_move: bool,
    move_up_blocked: bool,
    must_not_move_up: bool,
}

impl StrategyState {
    /// Recomputes every flag from `state`.
    pub fn derive(state: &GameState) -> Self {
        if state.game_ended {
            return Self::default();
        }
        let move_up_blocked = powers::move_up_blocked(state);
        Self {
            can_extra_move: powers::can_extra_move(state),
            can_extra_build: powers::can_extra_build(state),
            can_build_dome: powers::can_build_dome(state),
            can_build_before_move: powers::can_build_before_move(state),
            can_end_move: powers::can_end_move(state),
            move_up_blocked,
            must_not_move_up: move_up_blocked || state.turn.built_before_move,
        }
    }

    /// Artemis may take (or has been offered) a second move.
    pub fn can_extra_move(&self) -> bool {
        self.can_extra_move
    }

    /// Demeter or Hephaestus may take (or has been offered) a second build.
    pub fn can_extra_build(&self) -> bool {
        self.can_extra_build
    }

    /// Atlas may place a dome.
    pub fn can_build_dome(&self) -> bool {
        self.can_build_dome
    }

    /// Prometheus may build before moving.
    pub fn can_build_before_move(&self) -> bool {
        self.can_build_before_move
    }

    /// Hermes may stop moving and build.
    pub fn can_end_move(&self) -> bool {
        self.can_end_move
    }

    /// Athena blocked the active player from moving up this turn.
    pub fn move_up_blocked(&self) -> bool {
        self.move_up_blocked
    }

    /// The active worker may not move up, for any reason.
    pub fn must_not_move_up(&self) -> bool {
        self.must_not_move_up
    }
}

/// Full game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) phase: TurnPhase,
    pub(crate) strategy: StrategyState,
    pub(crate) gods: GodAssignment,
    pub(crate) turn: TurnProgress,
    pub(crate) move_up_blocked_for: Option<Player>,
    pub(crate) game_ended: bool,
    pub(crate) winner: Option<Player>,
    pub(crate) victory: Option<Victory>,
}

impl GameState {
    /// A fresh game: empty board, placement phase, player A to act.
    pub fn new(gods: GodAssignment) -> Self {
        let mut state = Self {
            board: Board::new(),
            current_player: Player::A,
            phase: TurnPhase::Placement,
            strategy: StrategyState::default(),
            gods,
            turn: TurnProgress::default(),
            move_up_blocked_for: None,
            game_ended: false,
            winner: None,
            victory: None,
        };
        state.strategy = StrategyState::derive(&state);
        state
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player expected to act.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Current phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Derived strategy flags.
    pub fn strategy(&self) -> &StrategyState {
        &self.strategy
    }

    /// God assignment for both players.
    pub fn gods(&self) -> GodAssignment {
        self.gods
    }

    /// Power held by the player expected to act.
    pub fn active_god(&self) -> GodPower {
        self.gods.of(self.current_player)
    }

    /// Bookkeeping for the turn in progress.
    pub fn turn(&self) -> &TurnProgress {
        &self.turn
    }

    /// Player who may not move up this turn (Athena).
    pub fn move_up_blocked_for(&self) -> Option<Player> {
        self.move_up_blocked_for
    }

    /// True once the game is over.
    pub fn game_ended(&self) -> bool {
        self.game_ended
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Why the game ended.
    pub fn victory(&self) -> Option<Victory> {
        self.victory
    }

    /// Resolves a worker index of the current player.
    ///
    /// Fails with `NoWorkerSelected` if no such worker stands on the board and
    /// with `NotOwnWorker` if another worker is already committed this turn.
    pub(crate) fn select_worker(&self, index: usize) -> Result<WorkerId, ActionError> {
        let id = u8::try_from(index)
            .ok()
            .filter(|_| index < WORKERS_PER_PLAYER)
            .map(|index| WorkerId::new(self.current_player, index))
            .filter(|id| self.board.worker(*id).is_some())
            .ok_or(ActionError::NoWorkerSelected)?;
        match self.turn.worker {
            Some(committed) if committed != id => Err(ActionError::NotOwnWorker { index }),
            _ => Ok(id),
        }
    }

    /// Position of a worker that is known to be on the board.
    pub(crate) fn position_of(&self, id: WorkerId) -> Result<Position, ActionError> {
        self.board
            .worker(id)
            .map(|w| w.position())
            .ok_or(ActionError::NoWorkerSelected)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GodAssignment::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_in_placement() {
        let state = GameState::default();
        assert_eq!(state.phase(), TurnPhase::Placement);
        assert_eq!(state.current_player(), Player::A);
        assert!(!state.game_ended());
        assert_eq!(state.winner(), None);
        assert!(state.board().workers().is_empty());
    }

    #[test]
    fn test_select_worker_requires_placed_worker() {
        let mut state = GameState::default();
        assert_eq!(state.select_worker(0), Err(ActionError::NoWorkerSelected));

        let pos = Position::new(0, 0).unwrap();
        state
            .board
            .place_worker(pos, WorkerId::new(Player::A, 0))
            .unwrap();
        assert_eq!(state.select_worker(0), Ok(WorkerId::new(Player::A, 0)));
        assert_eq!(state.select_worker(7), Err(ActionError::NoWorkerSelected));
    }

    #[test]
    fn test_select_worker_respects_commitment() {
        let mut state = GameState::default();
        state
            .board
            .place_worker(Position::new(0, 0).unwrap(), WorkerId::new(Player::A, 0))
            .unwrap();
        state
            .board
            .place_worker(Position::new(4, 4).unwrap(), WorkerId::new(Player::A, 1))
            .unwrap();
        state
            .turn
            .commit(WorkerId::new(Player::A, 0), Position::new(0, 0).unwrap());

        assert_eq!(
            state.select_worker(1),
            Err(ActionError::NotOwnWorker { index: 1 })
        );
    }
}
