//! Core domain types for Santorini.

use super::Position;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Height of a dome. Domed cells accept neither workers nor further building.
pub const DOME_HEIGHT: u8 = 4;

/// Number of workers each player places.
pub const WORKERS_PER_PLAYER: usize = 2;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// Player A (places and moves first).
    A,
    /// Player B.
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// Identity of a worker: its owner and its placement order for that owner.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    new,
    derive_more::Display,
)]
#[display("{player}{index}")]
pub struct WorkerId {
    /// Owning player.
    pub player: Player,
    /// Placement order (0 or 1); actions address workers by this index.
    pub index: u8,
}

/// A worker standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Worker {
    id: WorkerId,
    position: Position,
}

impl Worker {
    /// Returns the worker's identity.
    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// Returns the owning player.
    pub fn player(&self) -> Player {
        self.id.player
    }

    /// Returns the cell the worker stands on.
    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

/// A single cell: a tower height and an optional occupant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    height: u8,
    occupant: Option<WorkerId>,
}

impl Cell {
    /// Tower height, 0 to 4 (4 is a dome).
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Worker standing on this cell, if any.
    pub fn occupant(&self) -> Option<WorkerId> {
        self.occupant
    }

    /// True if the cell is capped by a dome.
    pub fn is_dome(&self) -> bool {
        self.height >= DOME_HEIGHT
    }

    /// True if a worker stands here.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub(crate) fn set_height(&mut self, height: u8) {
        self.height = height;
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<WorkerId>) {
        self.occupant = occupant;
    }
}
