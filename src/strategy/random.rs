use log::debug;
use rand::rngs::SmallRng;

use super::{random_unfired, Strategy};
use crate::{common::GridError, config::CellSet, game::Game};

/// Fires at uniformly random cells it has not fired at before.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn play(&mut self, game: &mut Game, rng: &mut SmallRng) -> Result<usize, GridError> {
        let mut shots = CellSet::new();
        let mut count = 0;
        while !game.is_won() {
            let Some((row, col)) = random_unfired(rng, &shots) else {
                break;
            };
            game.fire(row, col)?;
            shots.insert(row, col)?;
            count += 1;
        }
        debug!("random strategy won in {} shots", count);
        Ok(count)
    }
}
