//! Shared error and shot outcome types.

use crate::bitboard::BitBoardError;
use crate::ship::Orientation;

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// The cell held a segment of the ship with this identifier.
    Hit(u8),
    /// The cell was empty, or its segment had already been destroyed.
    Miss,
}

impl GuessResult {
    /// Identifier of the ship that was hit, or `0` for a miss.
    pub fn ship_id(self) -> u8 {
        match self {
            GuessResult::Hit(id) => id,
            GuessResult::Miss => 0,
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(self, GuessResult::Hit(_))
    }
}

/// Errors returned by grid, game and simulation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Ship identifier is not part of the catalog.
    UnknownShip(u8),
    /// Placement leaves the board or overlaps an occupied cell.
    IllegalPlacement {
        ship: u8,
        row: usize,
        col: usize,
        orientation: Orientation,
    },
    /// Capped random placement gave up.
    PlacementExhausted { ship: u8, attempts: usize },
    /// A simulation was asked to run zero trials.
    NoTrials,
}

impl From<BitBoardError> for GridError {
    fn from(err: BitBoardError) -> Self {
        let BitBoardError::IndexOutOfBounds { row, col } = err;
        GridError::OutOfBounds { row, col }
    }
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is out of bounds", row, col)
            }
            GridError::UnknownShip(id) => write!(f, "unknown ship identifier {}", id),
            GridError::IllegalPlacement {
                ship,
                row,
                col,
                orientation,
            } => write!(
                f,
                "ship {} cannot be placed at ({}, {}) {:?}",
                ship, row, col, orientation
            ),
            GridError::PlacementExhausted { ship, attempts } => write!(
                f,
                "no legal placement found for ship {} after {} attempts",
                ship, attempts
            ),
            GridError::NoTrials => write!(f, "number of trials must be positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
