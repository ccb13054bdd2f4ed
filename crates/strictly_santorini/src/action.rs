//! First-class action types for Santorini.
//!
//! Actions are requests, not side effects: the engine validates them against
//! the current phase and the active god power before anything changes.

use super::{GameState, GodPower, Position, TurnPhase};
use serde::{Deserialize, Serialize};

/// A request submitted by the player whose turn it is.
///
/// Coordinates are raw `i32`s so that out-of-range input surfaces as
/// [`ActionError::OutOfBounds`] instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    /// Place the next worker during placement.
    PlaceWorker {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// Move one of the current player's workers.
    Move {
        /// Which of the current player's workers (placement order).
        worker_index: usize,
        /// Target column.
        x: i32,
        /// Target row.
        y: i32,
    },
    /// Build with the worker acting this turn.
    Build {
        /// Target column.
        x: i32,
        /// Target row.
        y: i32,
        /// Place a dome regardless of height (Atlas only).
        #[serde(default)]
        build_dome: bool,
    },
    /// Prometheus: build with this worker before moving it.
    BuildBeforeMove {
        /// Which of the current player's workers will build and then move.
        worker_index: usize,
    },
    /// Hermes: stop moving and go on to build.
    EndMove {
        /// Builder, required only when no worker has moved yet this turn.
        #[serde(default)]
        worker_index: Option<usize>,
    },
    /// Forgo the optional action on offer and end the turn.
    EndTurn,
    /// Accept the optional action on offer.
    Accept,
    /// Decline the optional action on offer.
    Decline,
}

impl Action {
    /// Short verb used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Action::PlaceWorker { .. } => "place a worker",
            Action::Move { .. } => "move",
            Action::Build { .. } => "build",
            Action::BuildBeforeMove { .. } => "build before moving",
            Action::EndMove { .. } => "end the move",
            Action::EndTurn => "end the turn",
            Action::Accept => "accept",
            Action::Decline => "decline",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaceWorker { x, y } => write!(f, "place worker at ({x}, {y})"),
            Action::Move { worker_index, x, y } => {
                write!(f, "move worker {worker_index} to ({x}, {y})")
            }
            Action::Build { x, y, build_dome } if *build_dome => {
                write!(f, "build dome at ({x}, {y})")
            }
            Action::Build { x, y, .. } => write!(f, "build at ({x}, {y})"),
            Action::BuildBeforeMove { worker_index } => {
                write!(f, "build before moving with worker {worker_index}")
            }
            Action::EndMove { .. } | Action::EndTurn | Action::Accept | Action::Decline => {
                write!(f, "{}", self.name())
            }
        }
    }
}

/// Which kind of target a selection query asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionKind {
    /// Cells the worker may move to.
    Move,
    /// Cells the acting worker may build on.
    Build,
}

/// Error that can occur when validating or applying an action.
///
/// Every error leaves the game state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// Coordinates outside the 5x5 board.
    #[display("Position ({x}, {y}) is off the board")]
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
    },

    /// The action is not valid in the current phase.
    #[display("Cannot {action} during the {phase} phase")]
    WrongPhase {
        /// What was attempted.
        action: &'static str,
        /// The phase the game is in.
        phase: TurnPhase,
    },

    /// The indexed worker is not the one acting this turn.
    #[display("Worker {index} is not the worker acting this turn")]
    NotOwnWorker {
        /// The index that was submitted.
        index: usize,
    },

    /// The target cell holds a worker.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Position),

    /// Climbing more than one level, entering a dome, or moving up while blocked.
    #[display("Cannot go from height {from} to height {to}")]
    HeightViolation {
        /// Height being left.
        from: u8,
        /// Height being entered.
        to: u8,
    },

    /// The target cell is already domed.
    #[display("Cell {_0} already holds a dome")]
    DomeCap(Position),

    /// The target is not one of the eight surrounding cells.
    #[display("Cell {to} is not adjacent to {from}")]
    NotAdjacent {
        /// Worker position.
        from: Position,
        /// Requested target.
        to: Position,
    },

    /// No worker is committed to this turn, or the index names no worker.
    #[display("No worker selected")]
    NoWorkerSelected,

    /// Accept or decline submitted while no decision is pending.
    #[display("No decision is pending during the {_0} phase")]
    InvalidDecision(TurnPhase),

    /// A god-specific rule forbids the action.
    #[display("{power}: {reason}")]
    PowerRestriction {
        /// The power whose rule applies.
        power: GodPower,
        /// What the rule forbids.
        reason: &'static str,
    },

    /// The game is over; only a new game can be started.
    #[display("Game has already ended")]
    GameAlreadyEnded,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for ActionError {}

/// A rejected action: the reason plus the unchanged state.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
#[display("{error}")]
pub struct Rejection {
    /// Why the action was refused.
    pub error: ActionError,
    /// The state as it was before (and still is after) the attempt.
    pub state: Box<GameState>,
}

impl Rejection {
    /// Pairs an error with the state it left untouched.
    pub fn new(error: ActionError, state: GameState) -> Self {
        Self {
            error,
            state: Box::new(state),
        }
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
