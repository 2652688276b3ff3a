//! Counting ship arrangements: exact backtracking and a Monte Carlo estimate
//! of how often independently drawn ships avoid each other.

use log::debug;
use rand::Rng;

use crate::common::GridError;
use crate::config::{ship_type, CellSet, GRID_SIZE, SHIPS};
use crate::grid::Grid;
use crate::ship::{Orientation, Placement, ShipType};

/// Number of legal placements of ship `ship_id` on `grid`, found by trying
/// every anchor in both orientations.
pub fn count_single(ship_id: u8, grid: &Grid) -> Result<u64, GridError> {
    let ship = ship_type(ship_id)?;
    Ok(Placement::all(ship).filter(|p| grid.fits(p)).count() as u64)
}

/// Number of ways to place every ship in `ship_ids`, in order, onto `grid`
/// without overlap.
///
/// Each branch works on its own copy of the grid, so sibling subtrees never
/// see each other's ships. The search is exhaustive and grows quickly with
/// fleet size; the full five-ship fleet is very expensive.
pub fn count_fleet(ship_ids: &[u8], grid: &Grid) -> Result<u64, GridError> {
    match ship_ids {
        [] => Ok(1),
        [only] => count_single(*only, grid),
        [first, rest @ ..] => {
            let ship = ship_type(*first)?;
            let mut total = 0u64;
            for placement in Placement::all(ship) {
                if grid.fits(&placement) {
                    let branch = grid.with_placement(&placement)?;
                    total += count_fleet(rest, &branch)?;
                }
            }
            Ok(total)
        }
    }
}

/// Fraction of `trials` in which five independently drawn in-bounds ships
/// are pairwise disjoint.
///
/// Each ship gets a fair-coin orientation and an anchor whose free axis is
/// redrawn until the ship fits on the board. No grid is consulted; overlap
/// is detected by intersecting the accumulated occupancy set.
pub fn estimate_validity_ratio<R: Rng + ?Sized>(
    trials: usize,
    rng: &mut R,
) -> Result<f64, GridError> {
    if trials == 0 {
        return Err(GridError::NoTrials);
    }
    let mut valid = 0usize;
    for _ in 0..trials {
        let mut occupied = CellSet::new();
        let mut disjoint = true;
        for ship in SHIPS.iter() {
            let placement = bounded_candidate(*ship, rng);
            let mask = placement.mask()?;
            if occupied.intersects(&mask) {
                disjoint = false;
            }
            occupied |= mask;
        }
        if disjoint {
            valid += 1;
        }
    }
    let ratio = valid as f64 / trials as f64;
    debug!("validity ratio {} over {} trials", ratio, trials);
    Ok(ratio)
}

fn bounded_candidate<R: Rng + ?Sized>(ship: ShipType, rng: &mut R) -> Placement {
    let horizontal = rng.random_range(0..2) == 0;
    let mut row = rng.random_range(0..GRID_SIZE);
    let mut col = rng.random_range(0..GRID_SIZE);
    let last = ship.length() - 1;
    if horizontal {
        while col + last >= GRID_SIZE {
            col = rng.random_range(0..GRID_SIZE);
        }
        Placement::new(ship, row, col, Orientation::Horizontal)
    } else {
        while row + last >= GRID_SIZE {
            row = rng.random_range(0..GRID_SIZE);
        }
        Placement::new(ship, row, col, Orientation::Vertical)
    }
}
