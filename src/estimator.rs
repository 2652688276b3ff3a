//! Monte Carlo estimation of how many shots a strategy needs.

use alloc::collections::BTreeMap;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{common::GridError, game::Game, strategy::Strategy};

/// Frequency table of shot counts over a batch of trials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution {
    frequencies: BTreeMap<usize, usize>,
    trials: usize,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one trial that took `shots` shots.
    pub fn record(&mut self, shots: usize) {
        *self.frequencies.entry(shots).or_insert(0) += 1;
        self.trials += 1;
    }

    /// Shot count to number of trials that needed exactly that many shots.
    pub fn frequencies(&self) -> &BTreeMap<usize, usize> {
        &self.frequencies
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Sum of all frequencies; equals [`Distribution::trials`].
    pub fn total_occurrences(&self) -> usize {
        self.frequencies.values().sum()
    }

    /// Sample mean of the shot counts, `0.0` when empty.
    pub fn mean(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let sum: usize = self.frequencies.iter().map(|(shots, n)| shots * n).sum();
        sum as f64 / self.trials as f64
    }

    /// Population standard deviation of the shot counts.
    pub fn std_dev(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .frequencies
            .iter()
            .map(|(&shots, &n)| {
                let d = shots as f64 - mean;
                n as f64 * d * d
            })
            .sum::<f64>()
            / self.trials as f64;
        libm::sqrt(variance)
    }

    pub fn min(&self) -> Option<usize> {
        self.frequencies.keys().next().copied()
    }

    pub fn max(&self) -> Option<usize> {
        self.frequencies.keys().next_back().copied()
    }
}

/// Receives the finished frequency table, e.g. to draw a histogram.
pub trait DistributionSink {
    fn render(&mut self, strategy: &str, distribution: &Distribution);
}

/// Sink that discards the table.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl DistributionSink for Silent {
    fn render(&mut self, _strategy: &str, _distribution: &Distribution) {}
}

/// Play `trials` independent games with `strategy`, resetting a single
/// game instance to a new random fleet after each one.
pub fn run_trials(
    trials: usize,
    strategy: &mut dyn Strategy,
    rng: &mut SmallRng,
) -> Result<Distribution, GridError> {
    if trials == 0 {
        return Err(GridError::NoTrials);
    }
    let mut game = Game::new(rng)?;
    let mut distribution = Distribution::new();
    for trial in 0..trials {
        let shots = strategy.play(&mut game, rng)?;
        debug!("{} trial {}: {} shots", strategy.name(), trial, shots);
        distribution.record(shots);
        game.reset(rng)?;
    }
    Ok(distribution)
}

/// Run `trials` games, hand the frequency table to `sink` and return the
/// mean number of shots.
pub fn estimate_distribution(
    trials: usize,
    strategy: &mut dyn Strategy,
    rng: &mut SmallRng,
    sink: &mut dyn DistributionSink,
) -> Result<f64, GridError> {
    let distribution = run_trials(trials, strategy, rng)?;
    sink.render(strategy.name(), &distribution);
    let mean = distribution.mean();
    info!(
        "{}: mean {:.2} shots over {} trials",
        strategy.name(),
        mean,
        trials
    );
    Ok(mean)
}
