use log::debug;
use rand::{rngs::SmallRng, Rng};

use super::{
    probe::{fire_ray, Direction, ShotLog},
    random_unfired, Strategy,
};
use crate::{common::GridError, game::Game};

/// Hunt/target: random shots until a hit, then sweep outward from the hit
/// along every open direction, picking the next direction at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct HuntStrategy;

/// Directions worth probing from `origin`: the neighbor must be on the
/// board and not yet fired at.
pub(crate) fn open_directions(origin: (usize, usize), log: &ShotLog) -> [bool; 4] {
    Direction::ALL.map(|d| match d.neighbor(origin) {
        Some((r, c)) => !log.fired(r, c),
        None => false,
    })
}

impl HuntStrategy {
    /// Probe every open direction around a fresh hit, in random order.
    pub(crate) fn target(
        game: &mut Game,
        log: &mut ShotLog,
        origin: (usize, usize),
        rng: &mut SmallRng,
    ) -> Result<usize, GridError> {
        let mut open = open_directions(origin, log);
        let mut taken = 0;
        while open.iter().any(|&o| o) {
            let mut pick = rng.random_range(0..open.len());
            while !open[pick] {
                pick = rng.random_range(0..open.len());
            }
            taken += fire_ray(game, log, origin, Direction::ALL[pick])?;
            open[pick] = false;
        }
        Ok(taken)
    }
}

impl Strategy for HuntStrategy {
    fn name(&self) -> &'static str {
        "hunt"
    }

    fn play(&mut self, game: &mut Game, rng: &mut SmallRng) -> Result<usize, GridError> {
        let mut log = ShotLog::new();
        let mut count = 0;
        while !game.is_won() {
            let Some((row, col)) = random_unfired(rng, &log.shots) else {
                break;
            };
            let result = game.fire(row, col)?;
            log.record(row, col, result)?;
            count += 1;
            if result.is_hit() {
                count += Self::target(game, &mut log, (row, col), rng)?;
            }
        }
        debug!("hunt strategy won in {} shots", count);
        Ok(count)
    }
}
