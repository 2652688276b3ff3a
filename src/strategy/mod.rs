//! Targeting strategies.
//!
//! Every strategy plays one full game: it keeps firing through
//! [`Game::fire`] until [`Game::is_won`] and reports how many shots that took.
//! - [`RandomStrategy`]: uniform random shots at unfired cells
//! - [`HuntStrategy`]: random hunting, then probing outward from each hit
//! - [`ProbabilityStrategy`]: fires at the cell covered by the most legal
//!   ship placements, then probes outward from each hit

use alloc::boxed::Box;

use rand::{rngs::SmallRng, Rng};

use crate::{
    common::GridError,
    config::{CellSet, GRID_SIZE},
    game::Game,
};

pub mod hunt;
pub mod probability;
pub mod probe;
pub mod random;

pub use hunt::HuntStrategy;
pub use probability::{best_cell, probability_map, ProbabilityMap, ProbabilityStrategy};
pub use probe::{Direction, ShotLog};
pub use random::RandomStrategy;

/// A way of sinking a whole fleet.
pub trait Strategy {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// Play `game` until it is won and return the number of shots fired.
    /// Shot bookkeeping is local to this call.
    fn play(&mut self, game: &mut Game, rng: &mut SmallRng) -> Result<usize, GridError>;
}

/// Selector for the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum StrategyKind {
    Random,
    Hunt,
    Probability,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Random,
        StrategyKind::Hunt,
        StrategyKind::Probability,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => RandomStrategy.name(),
            StrategyKind::Hunt => HuntStrategy.name(),
            StrategyKind::Probability => ProbabilityStrategy.name(),
        }
    }

    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy),
            StrategyKind::Hunt => Box::new(HuntStrategy),
            StrategyKind::Probability => Box::new(ProbabilityStrategy),
        }
    }
}

/// Draw uniformly random cells until one outside `shots` comes up.
/// Returns `None` only when every cell has been fired at.
pub(crate) fn random_unfired<R: Rng + ?Sized>(
    rng: &mut R,
    shots: &CellSet,
) -> Option<(usize, usize)> {
    if shots.is_full() {
        return None;
    }
    loop {
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        if !shots.contains(row, col) {
            return Some((row, col));
        }
    }
}
