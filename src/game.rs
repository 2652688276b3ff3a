use log::trace;
use rand::Rng;

use crate::{
    common::{GridError, GuessResult},
    config::CellSet,
    grid::Grid,
};

/// One single-player game: a hidden fleet and the shots fired at it.
///
/// Hit cells are cleared on the grid, so the game is won once the grid is
/// empty. Strategies borrow the game mutably for the duration of a play and
/// interact with it only through [`Game::fire`] and [`Game::is_won`].
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    shots: CellSet,
    shots_fired: usize,
}

impl Game {
    /// Start a game against a freshly generated random fleet.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::random_fleet(rng)?))
    }

    /// Start a game against a known layout.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            shots: CellSet::new(),
            shots_fired: 0,
        }
    }

    /// Fire at `(row, col)`. A hit clears the cell and reports the ship
    /// identifier; firing at an empty or already cleared cell is a miss.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<GuessResult, GridError> {
        let value = self.grid.get(row, col)?;
        self.shots.insert(row, col)?;
        self.shots_fired += 1;
        if value == 0 {
            trace!("miss at ({}, {})", row, col);
            return Ok(GuessResult::Miss);
        }
        self.grid.set(row, col, 0)?;
        trace!("hit ship {} at ({}, {})", value, row, col);
        Ok(GuessResult::Hit(value))
    }

    /// `true` once every ship cell has been hit.
    pub fn is_won(&self) -> bool {
        self.grid.is_clear()
    }

    /// Replace the fleet with a new random one and forget all shots. The
    /// current game does not have to be finished.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GridError> {
        *self = Self::new(rng)?;
        Ok(())
    }

    /// Current state of the hidden grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Distinct cells fired at since the last reset.
    pub fn shots(&self) -> CellSet {
        self.shots
    }

    /// Total `fire` calls since the last reset, repeats included.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Ship cells not yet hit.
    pub fn remaining_cells(&self) -> usize {
        self.grid.occupied_count()
    }
}
