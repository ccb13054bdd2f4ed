//! Strictly Santorini - authoritative rules engine for Santorini.
//!
//! Two players place two workers each on a 5x5 grid, then alternate turns of
//! one move followed by one build. Each player may carry a god power that
//! bends part of the turn: extra moves, extra builds, domes at any level,
//! pushing or swapping opponents, or alternative win conditions.
//!
//! # Architecture
//!
//! - **Board**: cell heights plus the worker registry, updated atomically
//! - **Geometry**: pure adjacency and height-difference predicates
//! - **Powers**: one [`GodRules`] implementation per [`GodPower`]
//! - **Turn state machine**: phase transitions driven by [`Action`]s
//! - **Rules**: win conditions and stalemate detection
//! - **Contracts/invariants**: preconditions and postconditions around every action
//!
//! # Example
//!
//! ```
//! use strictly_santorini::{Action, Game, GodPower, TurnPhase};
//!
//! let mut game = Game::new(GodPower::Apollo, GodPower::Pan);
//! for (x, y) in [(0, 0), (4, 4), (0, 4), (4, 0)] {
//!     game.submit_action(Action::PlaceWorker { x, y }).expect("free cell");
//! }
//! assert_eq!(game.query_game_state().phase(), TurnPhase::Move);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod engine;
mod geometry;
mod god;
mod invariants;
mod phases;
mod position;
mod powers;
mod rules;
mod state;
mod turn;
mod types;

pub use action::{Action, ActionError, Rejection, SelectionKind};
pub use board::{Board, BuildKind};
pub use contracts::{ActionContract, Contract, GameNotOver, LegalAction, PhaseAllows};
pub use engine::Game;
pub use geometry::{
    check_build_target, check_move_target, is_valid_build_target, is_valid_move_target,
    neighbors8,
};
pub use god::{GodAssignment, GodPower};
pub use invariants::{
    HeightsInRangeInvariant, Invariant, InvariantSet, InvariantViolation,
    OccupancyConsistentInvariant, SantoriniInvariants, StrategyDerivedInvariant,
    StructuralInvariants, TerminalConsistentInvariant, WorkerCountInvariant,
};
pub use phases::{TurnPhase, Victory};
pub use position::{BOARD_SIZE, Position};
pub use powers::{
    AfterBuild, BuildRequest, Displacement, GodRules, MovePlan, MoveRequest,
    can_build_before_move, can_build_dome, can_end_move, can_extra_build, can_extra_move,
    legal_builds, legal_moves, move_up_blocked, rules_for,
};
pub use rules::{MoveStep, check_stalemate, evaluate_move};
pub use state::{GameState, StrategyState, TurnProgress};
pub use types::{Cell, DOME_HEIGHT, Player, WORKERS_PER_PLAYER, Worker, WorkerId};
