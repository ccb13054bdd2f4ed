//! The 5x5 board: tower heights plus the worker registry.
//!
//! Cells and workers live in one struct so that a worker's position and the
//! occupant back-reference of its cell are always updated together.

use super::{BOARD_SIZE, Cell, DOME_HEIGHT, Player, Position, Worker, WorkerId};
use crate::action::ActionError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const SIZE: usize = BOARD_SIZE as usize;

/// What a build adds to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildKind {
    /// One more level (level 3 + block = dome).
    Block,
    /// A dome placed directly, whatever the current height.
    Dome,
}

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[x][y]`.
    cells: [[Cell; SIZE]; SIZE],
    /// Workers in placement order.
    workers: Vec<Worker>,
}

impl Board {
    /// Creates an empty board at ground level.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::default(); SIZE]; SIZE],
            workers: Vec::new(),
        }
    }

    /// Returns the cell at `pos`.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[usize::from(pos.x())][usize::from(pos.y())]
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[usize::from(pos.x())][usize::from(pos.y())]
    }

    /// Tower height at `pos`.
    pub fn height_at(&self, pos: Position) -> u8 {
        self.cell(pos).height()
    }

    /// Worker standing at `pos`, if any.
    pub fn occupant_at(&self, pos: Position) -> Option<WorkerId> {
        self.cell(pos).occupant()
    }

    /// All workers in placement order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Looks up a worker by identity.
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id() == id)
    }

    fn worker_mut(&mut self, id: WorkerId) -> Result<&mut Worker, ActionError> {
        self.workers
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or(ActionError::NoWorkerSelected)
    }

    /// Workers owned by `player`.
    pub fn workers_of(&self, player: Player) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(move |w| w.player() == player)
    }

    /// Number of workers `player` has on the board.
    pub fn worker_count(&self, player: Player) -> usize {
        self.workers_of(player).count()
    }

    /// Places a new worker on an empty cell.
    #[instrument(skip(self))]
    pub fn place_worker(&mut self, pos: Position, id: WorkerId) -> Result<(), ActionError> {
        let cell = self.cell(pos);
        if cell.is_occupied() {
            return Err(ActionError::CellOccupied(pos));
        }
        if cell.is_dome() {
            return Err(ActionError::DomeCap(pos));
        }
        if self.worker(id).is_some() {
            return Err(ActionError::InvariantViolation(format!(
                "worker {id} is already on the board"
            )));
        }

        self.cell_mut(pos).set_occupant(Some(id));
        self.workers.push(Worker::new(id, pos));
        debug!(%id, %pos, "Worker placed");
        Ok(())
    }

    /// Moves a worker onto a free, non-domed cell and returns where it came from.
    ///
    /// Only occupancy and domes are checked here; adjacency and climbing
    /// limits belong to the move rules.
    #[instrument(skip(self))]
    pub fn move_worker(&mut self, id: WorkerId, to: Position) -> Result<Position, ActionError> {
        let from = self
            .worker(id)
            .map(|w| w.position())
            .ok_or(ActionError::NoWorkerSelected)?;
        let target = self.cell(to);
        if target.is_occupied() {
            return Err(ActionError::CellOccupied(to));
        }
        if target.is_dome() {
            return Err(ActionError::HeightViolation {
                from: self.height_at(from),
                to: target.height(),
            });
        }

        self.worker_mut(id)?.set_position(to);
        self.cell_mut(from).set_occupant(None);
        self.cell_mut(to).set_occupant(Some(id));
        debug!(%id, %from, %to, "Worker moved");
        Ok(from)
    }

    /// Exchanges the cells of two workers.
    #[instrument(skip(self))]
    pub fn swap_workers(&mut self, a: WorkerId, b: WorkerId) -> Result<(), ActionError> {
        let pos_a = self
            .worker(a)
            .map(|w| w.position())
            .ok_or(ActionError::NoWorkerSelected)?;
        let pos_b = self
            .worker(b)
            .map(|w| w.position())
            .ok_or(ActionError::NoWorkerSelected)?;

        self.worker_mut(a)?.set_position(pos_b);
        self.worker_mut(b)?.set_position(pos_a);
        self.cell_mut(pos_a).set_occupant(Some(b));
        self.cell_mut(pos_b).set_occupant(Some(a));
        debug!(%a, %b, "Workers swapped");
        Ok(())
    }

    /// Builds on an unoccupied cell and returns its new height.
    #[instrument(skip(self))]
    pub fn build(&mut self, pos: Position, kind: BuildKind) -> Result<u8, ActionError> {
        let cell = self.cell(pos);
        if cell.is_dome() {
            return Err(ActionError::DomeCap(pos));
        }
        if cell.is_occupied() {
            return Err(ActionError::CellOccupied(pos));
        }

        let height = match kind {
            BuildKind::Block => cell.height() + 1,
            BuildKind::Dome => DOME_HEIGHT,
        };
        self.cell_mut(pos).set_height(height);
        debug!(%pos, height, ?kind, "Built");
        Ok(height)
    }

    /// Snapshot of every tower height, indexed `[x][y]`.
    pub fn heights(&self) -> [[u8; SIZE]; SIZE] {
        self.cells.map(|column| column.map(|cell| cell.height()))
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Each cell shows its height followed by the occupant's player letter
    /// (`.` when empty); domes are drawn as `^^`.
    pub fn display(&self) -> String {
        let mut result = String::from("   y0 y1 y2 y3 y4\n");
        for x in 0..BOARD_SIZE {
            result.push_str(&format!("x{x} "));
            for y in 0..BOARD_SIZE {
                let cell = self.cells[usize::from(x)][usize::from(y)];
                let symbol = if cell.is_dome() {
                    "^^".to_string()
                } else {
                    let occupant = cell
                        .occupant()
                        .map_or(".".to_string(), |id| id.player.to_string());
                    format!("{}{}", cell.height(), occupant)
                };
                result.push_str(&symbol);
                if y + 1 < BOARD_SIZE {
                    result.push(' ');
                }
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
