#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod common;
mod config;
pub mod enumerate;
pub mod estimator;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod ship;
pub mod strategy;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use enumerate::{count_fleet, count_single, estimate_validity_ratio};
pub use estimator::{estimate_distribution, run_trials, Distribution, DistributionSink, Silent};
pub use game::Game;
pub use grid::{generations_until_match, Grid};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use strategy::{
    HuntStrategy, ProbabilityStrategy, RandomStrategy, Strategy, StrategyKind,
};
#[cfg(feature = "std")]
pub use ui::{render_histogram, render_probability_map, TextHistogram};
