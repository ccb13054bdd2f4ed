//! Coordinates on the 5x5 Santorini board.

use crate::action::ActionError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 5;

/// A cell coordinate on the board.
///
/// A `Position` is always in bounds: the only ways to build one are
/// [`Position::new`], which rejects out-of-range coordinates, and
/// [`Position::offset`], which returns `None` when stepping off the board.
/// Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    x: u8,
    y: u8,
}

/// Unchecked wire form of a position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPosition {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a position from raw caller coordinates.
    #[instrument]
    pub fn new(x: i32, y: i32) -> Result<Self, ActionError> {
        let size = i32::from(BOARD_SIZE);
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(ActionError::OutOfBounds { x, y })
        }
    }

    /// Column coordinate.
    pub fn x(self) -> u8 {
        self.x
    }

    /// Row coordinate.
    pub fn y(self) -> u8 {
        self.y
    }

    /// Steps by `(dx, dy)`, or `None` if that leaves the board.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::new(i32::from(self.x) + dx, i32::from(self.y) + dy).ok()
    }

    /// Signed step from `self` towards `other`.
    pub fn delta_to(self, other: Self) -> (i32, i32) {
        (
            i32::from(other.x) - i32::from(self.x),
            i32::from(other.y) - i32::from(self.y),
        )
    }

    /// True if `other` is one of the eight cells surrounding `self`.
    pub fn is_adjacent(self, other: Self) -> bool {
        let (dx, dy) = self.delta_to(other);
        dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0)
    }

    /// Every cell of the board, column by column.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Self { x, y }))
    }
}

impl TryFrom<RawPosition> for Position {
    type Error = ActionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y)
    }
}

impl From<Position> for RawPosition {
    fn from(pos: Position) -> Self {
        Self {
            x: i32::from(pos.x),
            y: i32::from(pos.y),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
