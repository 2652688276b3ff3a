#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    config::GRID_SIZE,
    estimator::{Distribution, DistributionSink},
    strategy::ProbabilityMap,
};

/// Width in characters of the longest histogram bar.
const BAR_WIDTH: usize = 50;

/// Horizontal bar chart of a shot-count distribution, one line per count.
pub fn render_histogram(title: &str, distribution: &Distribution) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Shots needed by {} over {} simulations",
        title,
        distribution.trials()
    );
    let peak = distribution
        .frequencies()
        .values()
        .copied()
        .max()
        .unwrap_or(0);
    for (&shots, &n) in distribution.frequencies() {
        let len = if peak == 0 { 0 } else { (n * BAR_WIDTH).div_ceil(peak) };
        let _ = writeln!(out, "{:>4} | {:<width$} {}", shots, "#".repeat(len), n, width = BAR_WIDTH);
    }
    let _ = write!(
        out,
        "mean {:.2}, std dev {:.2}",
        distribution.mean(),
        distribution.std_dev()
    );
    out
}

/// Placement-count map as a table, each cell normalized to a share of the
/// whole map.
pub fn render_probability_map(map: &ProbabilityMap) -> String {
    let total: f64 = map.iter().flatten().sum();
    let mut out = String::from("   ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {:>4}", (b'A' + c as u8) as char);
    }
    for (r, row) in map.iter().enumerate() {
        let _ = write!(out, "\n{:2} ", r + 1);
        for &v in row.iter() {
            let share = if total > 0.0 { v / total } else { 0.0 };
            let _ = write!(out, " {:4.2}", share);
        }
    }
    out
}

/// Prints each finished distribution to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextHistogram;

impl DistributionSink for TextHistogram {
    fn render(&mut self, strategy: &str, distribution: &Distribution) {
        println!("{}", render_histogram(strategy, distribution));
    }
}
