//! Ship types and candidate placements.

use crate::common::GridError;
use crate::config::{CellSet, GRID_SIZE};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells advance column-wise from the anchor.
    Horizontal,
    /// Cells advance row-wise from the anchor.
    Vertical,
}

impl Orientation {
    /// Scan order used by every exhaustive loop in the crate.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Row/column step between consecutive cells of a ship.
    #[inline]
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Catalog entry: identifier, name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    id: u8,
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(id: u8, name: &'static str, length: usize) -> Self {
        Self { id, name, length }
    }

    /// Value written into occupied grid cells.
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A candidate assignment of one ship onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub ship: ShipType,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(ship: ShipType, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            ship,
            row,
            col,
            orientation,
        }
    }

    /// The `length` cells covered by this placement, starting at the anchor.
    /// Cells past the board edge are still yielded; callers check bounds.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.orientation.step();
        let (row, col) = (self.row, self.col);
        (0..self.ship.length()).map(move |k| (row + k * dr, col + k * dc))
    }

    /// `true` when every covered cell lies on the board.
    pub fn in_bounds(&self) -> bool {
        let (dr, dc) = self.orientation.step();
        let last = self.ship.length().saturating_sub(1);
        self.row + last * dr < GRID_SIZE && self.col + last * dc < GRID_SIZE
    }

    /// Occupancy set of an in-bounds placement.
    pub fn mask(&self) -> Result<CellSet, GridError> {
        Ok(CellSet::from_cells(self.cells())?)
    }

    /// Every anchor and orientation for `ship`, in row-major order with
    /// horizontal tried before vertical at each anchor. Includes placements
    /// that fall off the board.
    pub fn all(ship: ShipType) -> impl Iterator<Item = Placement> {
        (0..GRID_SIZE).flat_map(move |row| {
            (0..GRID_SIZE).flat_map(move |col| {
                Orientation::ALL
                    .into_iter()
                    .map(move |o| Placement::new(ship, row, col, o))
            })
        })
    }
}
