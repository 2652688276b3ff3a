//! Directional probing shared by the hunt and probability strategies.
//!
//! After a hit the strategy walks outward from the hit cell along one axis
//! direction at a time, firing at each consecutive cell until it misses or
//! runs off the board.

use log::trace;

use crate::{
    common::{GridError, GuessResult},
    config::{CellSet, GRID_SIZE},
    game::Game,
};

/// Axis directions, in the order used for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// The adjacent cell in this direction, or `None` at the board edge.
    pub fn neighbor(self, (row, col): (usize, usize)) -> Option<(usize, usize)> {
        match self {
            Direction::Right if col + 1 < GRID_SIZE => Some((row, col + 1)),
            Direction::Down if row + 1 < GRID_SIZE => Some((row + 1, col)),
            Direction::Left if col > 0 => Some((row, col - 1)),
            Direction::Up if row > 0 => Some((row - 1, col)),
            _ => None,
        }
    }
}

/// Shots fired by a strategy during one game, and which of them hit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShotLog {
    pub shots: CellSet,
    pub hits: CellSet,
}

impl ShotLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a shot at `(row, col)`.
    pub fn record(&mut self, row: usize, col: usize, result: GuessResult) -> Result<(), GridError> {
        self.shots.insert(row, col)?;
        if result.is_hit() {
            self.hits.insert(row, col)?;
        }
        Ok(())
    }

    pub fn fired(&self, row: usize, col: usize) -> bool {
        self.shots.contains(row, col)
    }

    /// Cells known to be empty: fired at without a hit.
    pub fn misses(&self) -> CellSet {
        self.shots - self.hits
    }
}

/// Fire consecutively from `origin` in `direction` until a miss or the
/// board edge. Cells already fired at are fired again and end the ray as a
/// miss. Returns the number of shots taken.
pub fn fire_ray(
    game: &mut Game,
    log: &mut ShotLog,
    origin: (usize, usize),
    direction: Direction,
) -> Result<usize, GridError> {
    let mut taken = 0;
    let mut next = direction.neighbor(origin);
    while let Some((row, col)) = next {
        taken += 1;
        let result = game.fire(row, col)?;
        log.record(row, col, result)?;
        if !result.is_hit() {
            break;
        }
        next = direction.neighbor((row, col));
    }
    trace!("probe {:?} from {:?} took {} shots", direction, origin, taken);
    Ok(taken)
}
