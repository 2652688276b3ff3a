use log::debug;
use rand::rngs::SmallRng;

use super::{
    probe::{fire_ray, Direction, ShotLog},
    Strategy,
};
use crate::{
    common::GridError,
    config::{CellSet, GRID_SIZE, SHIPS},
    game::Game,
    ship::Placement,
};

/// Per-cell count of legal ship placements covering that cell.
pub type ProbabilityMap = [[f64; GRID_SIZE]; GRID_SIZE];

/// Build the placement-count map for the whole catalog.
///
/// Missed cells block placements; hit cells do not, so placements running
/// through a confirmed hit still add weight to their other cells. Every
/// fired cell, hit or miss, is zeroed at the end so it is never selected.
pub fn probability_map(log: &ShotLog) -> ProbabilityMap {
    let blocked = log.misses();
    let mut map = [[0.0f64; GRID_SIZE]; GRID_SIZE];
    for ship in SHIPS.iter() {
        for placement in Placement::all(*ship) {
            if blocked.contains(placement.row, placement.col) || !placement.in_bounds() {
                continue;
            }
            if placement.cells().any(|(r, c)| blocked.contains(r, c)) {
                continue;
            }
            for (r, c) in placement.cells() {
                map[r][c] += 1.0;
            }
        }
    }
    for (r, c) in log.shots.iter() {
        map[r][c] = 0.0;
    }
    map
}

/// The highest-weighted cell not in `shots`, first in row-major order on
/// ties. Returns `None` when every cell has been fired at.
pub fn best_cell(map: &ProbabilityMap, shots: &CellSet) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), f64)> = None;
    for (r, row) in map.iter().enumerate() {
        for (c, &weight) in row.iter().enumerate() {
            if shots.contains(r, c) {
                continue;
            }
            match best {
                Some((_, top)) if weight <= top => {}
                _ => best = Some(((r, c), weight)),
            }
        }
    }
    best.map(|(cell, _)| cell)
}

/// Fires at the most likely cell under the placement-count map, rebuilding
/// the map before every hunting shot, and probes outward from each hit in
/// decreasing order of the neighbors' weight.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProbabilityStrategy;

/// Index of the highest positive score, first in direction order on ties.
pub(crate) fn strongest(scores: &[f64; 4]) -> Option<usize> {
    let mut pick: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        if score > 0.0 && pick.map_or(true, |p| score > scores[p]) {
            pick = Some(i);
        }
    }
    pick
}

impl ProbabilityStrategy {
    /// Probe around a fresh hit. Direction scores are read once from `map`;
    /// an edge or an already-fired neighbor scores zero and is never probed.
    pub(crate) fn target(
        game: &mut Game,
        log: &mut ShotLog,
        origin: (usize, usize),
        map: &ProbabilityMap,
    ) -> Result<usize, GridError> {
        let mut scores = Direction::ALL.map(|d| match d.neighbor(origin) {
            Some((r, c)) => map[r][c],
            None => 0.0,
        });
        let mut taken = 0;
        while let Some(pick) = strongest(&scores) {
            taken += fire_ray(game, log, origin, Direction::ALL[pick])?;
            scores[pick] = 0.0;
        }
        Ok(taken)
    }
}

impl Strategy for ProbabilityStrategy {
    fn name(&self) -> &'static str {
        "probability"
    }

    fn play(&mut self, game: &mut Game, _rng: &mut SmallRng) -> Result<usize, GridError> {
        let mut log = ShotLog::new();
        let mut count = 0;
        while !game.is_won() {
            let map = probability_map(&log);
            let Some((row, col)) = best_cell(&map, &log.shots) else {
                break;
            };
            let result = game.fire(row, col)?;
            log.record(row, col, result)?;
            count += 1;
            if result.is_hit() {
                count += Self::target(game, &mut log, (row, col), &map)?;
            }
        }
        debug!("probability strategy won in {} shots", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Grid, ship::Orientation};

    fn opened_on_submarine() -> (Game, ShotLog) {
        let mut grid = Grid::new();
        grid.place(2, 5, 4, Orientation::Horizontal).unwrap();
        let mut game = Game::from_grid(grid);
        let mut log = ShotLog::new();
        let miss = game.fire(4, 5).unwrap();
        log.record(4, 5, miss).unwrap();
        let hit = game.fire(5, 5).unwrap();
        log.record(5, 5, hit).unwrap();
        (game, log)
    }

    #[test]
    fn strongest_breaks_ties_in_direction_order() {
        let mut scores = [7.0, 3.0, 7.0, 1.0];
        assert_eq!(strongest(&scores), Some(0));
        scores[0] = 0.0;
        assert_eq!(strongest(&scores), Some(2));
        assert_eq!(strongest(&[2.0, 5.0, 5.0, 5.0]), Some(1));
        assert_eq!(strongest(&[1.0, 1.0, 1.0, 4.0]), Some(3));
    }

    #[test]
    fn strongest_never_picks_zero() {
        assert_eq!(strongest(&[0.0; 4]), None);
        assert_eq!(strongest(&[0.0, 0.0, 0.5, 0.0]), Some(2));
    }

    #[test]
    fn target_skips_fired_neighbor() {
        let (mut game, mut log) = opened_on_submarine();
        let mut map = [[1.0; GRID_SIZE]; GRID_SIZE];
        map[4][5] = 0.0;
        let taken = ProbabilityStrategy::target(&mut game, &mut log, (5, 5), &map).unwrap();
        // right: (5,6) hit, (5,7) miss; down: (6,5) miss; left: (5,4) hit, (5,3) miss
        assert_eq!(taken, 5);
        assert_eq!(game.shots_fired(), 7);
        assert!(game.is_won());
        assert!(!log.fired(3, 5));
    }

    #[test]
    fn target_leaves_unfired_zero_neighbor_alone() {
        let (mut game, mut log) = opened_on_submarine();
        let mut map = [[1.0; GRID_SIZE]; GRID_SIZE];
        map[4][5] = 0.0;
        map[6][5] = 0.0;
        let taken = ProbabilityStrategy::target(&mut game, &mut log, (5, 5), &map).unwrap();
        assert_eq!(taken, 4);
        assert!(!log.fired(6, 5));
        assert!(!game.shots().contains(6, 5));
    }

    #[test]
    fn target_fires_only_weighted_directions() {
        let (mut game, mut log) = opened_on_submarine();
        let mut map = [[0.0; GRID_SIZE]; GRID_SIZE];
        map[5][6] = 3.0;
        let taken = ProbabilityStrategy::target(&mut game, &mut log, (5, 5), &map).unwrap();
        assert_eq!(taken, 2);
        assert!(log.fired(5, 7));
        assert!(!log.fired(5, 4));
        assert!(!log.fired(6, 5));
        assert_eq!(game.remaining_cells(), 1);
    }
}
