//! The 10×10 fleet grid and its placement rules.

use core::fmt;

use log::trace;
use rand::Rng;

use crate::common::GridError;
use crate::config::{ship_type, CellSet, GRID_SIZE, SHIPS};
use crate::ship::{Orientation, Placement};

/// Square grid of cell values. `0` is empty; any other value is the
/// identifier of the ship occupying the cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from raw cell values. Every non-zero value must be a
    /// catalog ship identifier.
    pub fn from_rows(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        for &v in cells.iter().flatten() {
            if v != 0 {
                ship_type(v)?;
            }
        }
        Ok(Self { cells })
    }

    /// Value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(GridError::OutOfBounds { row, col })
    }

    /// Overwrite the value at `(row, col)`.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u8) -> Result<(), GridError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GridError::OutOfBounds { row, col })?;
        *cell = value;
        Ok(())
    }

    /// Raw row-major view of the cells.
    pub fn rows(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Occupied cells as a set.
    pub fn occupied(&self) -> Result<CellSet, GridError> {
        let cells = self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(c, _)| (r, c))
        });
        Ok(CellSet::from_cells(cells)?)
    }

    /// `true` when no cell is occupied.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v == 0)
    }

    /// Whether `placement` stays on the board and covers only empty cells.
    pub fn fits(&self, placement: &Placement) -> bool {
        placement
            .cells()
            .all(|(r, c)| matches!(self.get(r, c), Ok(0)))
    }

    /// Whether ship `ship_id` can be anchored at `(row, col)` with
    /// `orientation`. Unknown identifiers cannot be placed.
    pub fn can_place(&self, ship_id: u8, row: usize, col: usize, orientation: Orientation) -> bool {
        match ship_type(ship_id) {
            Ok(ship) => self.fits(&Placement::new(ship, row, col, orientation)),
            Err(_) => false,
        }
    }

    /// Write ship `ship_id` onto the grid. Fails without modifying the grid
    /// if the placement is not legal.
    pub fn place(
        &mut self,
        ship_id: u8,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GridError> {
        let ship = ship_type(ship_id)?;
        self.place_at(&Placement::new(ship, row, col, orientation))
    }

    /// Write a placement onto the grid after checking it fits.
    pub fn place_at(&mut self, placement: &Placement) -> Result<(), GridError> {
        if !self.fits(placement) {
            return Err(GridError::IllegalPlacement {
                ship: placement.ship.id(),
                row: placement.row,
                col: placement.col,
                orientation: placement.orientation,
            });
        }
        for (r, c) in placement.cells() {
            self.cells[r][c] = placement.ship.id();
        }
        Ok(())
    }

    /// Copy of this grid with `placement` written onto it.
    pub fn with_placement(&self, placement: &Placement) -> Result<Grid, GridError> {
        let mut next = *self;
        next.place_at(placement)?;
        Ok(next)
    }

    /// Draw uniformly random anchors and orientations until one fits, then
    /// place the ship there.
    ///
    /// There is no retry cap: a ship that can never fit makes this loop
    /// forever. Use [`Grid::place_random_capped`] when the grid may be full.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        ship_id: u8,
        rng: &mut R,
    ) -> Result<Placement, GridError> {
        let ship = ship_type(ship_id)?;
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let candidate = random_candidate(ship_id, rng)?;
            if self.fits(&candidate) {
                trace!("ship {} placed after {} draws", ship.id(), attempts);
                self.place_at(&candidate)?;
                return Ok(candidate);
            }
        }
    }

    /// Like [`Grid::place_random`] but gives up after `max_attempts` draws.
    pub fn place_random_capped<R: Rng + ?Sized>(
        &mut self,
        ship_id: u8,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Placement, GridError> {
        for _ in 0..max_attempts {
            let candidate = random_candidate(ship_id, rng)?;
            if self.fits(&candidate) {
                self.place_at(&candidate)?;
                return Ok(candidate);
            }
        }
        Err(GridError::PlacementExhausted {
            ship: ship_id,
            attempts: max_attempts,
        })
    }

    /// A fresh grid with the whole fleet placed at random, ships placed in
    /// increasing identifier order.
    pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Grid, GridError> {
        let mut grid = Grid::new();
        for ship in SHIPS.iter() {
            grid.place_random(ship.id(), rng)?;
        }
        Ok(grid)
    }
}

/// Uniform anchor anywhere on the board and a fair coin for orientation.
fn random_candidate<R: Rng + ?Sized>(ship_id: u8, rng: &mut R) -> Result<Placement, GridError> {
    let ship = ship_type(ship_id)?;
    let row = rng.random_range(0..GRID_SIZE);
    let col = rng.random_range(0..GRID_SIZE);
    let orientation = if rng.random() {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    Ok(Placement::new(ship, row, col, orientation))
}

/// Count how many random fleets are generated until one equals `target`.
/// Returns `None` if no match is found within `max_attempts` generations.
pub fn generations_until_match<R: Rng + ?Sized>(
    target: &Grid,
    max_attempts: u64,
    rng: &mut R,
) -> Result<Option<u64>, GridError> {
    for attempt in 1..=max_attempts {
        if Grid::random_fleet(rng)? == *target {
            return Ok(Some(attempt));
        }
    }
    Ok(None)
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        writeln!(f, "{}", self)?;
        write!(f, "}}")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for &v in row.iter() {
                if v == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", v)?;
                }
            }
            if r + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
