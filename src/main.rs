#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use fleet_odds::{
    count_fleet, count_single, estimate_distribution, estimate_validity_ratio, init_logging,
    strategy::{probability_map, ShotLog},
    render_probability_map, ship_type, Grid, StrategyKind, TextHistogram,
};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about = "Battleship placement counts and targeting statistics", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, global = true, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Count the placements of one ship on an empty grid.
    CountShip {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        ship: u8,
    },
    /// Count the non-overlapping placements of a list of ships on an empty grid.
    CountFleet {
        #[arg(required = true, num_args = 1.., value_parser = clap::value_parser!(u8).range(1..=5))]
        ships: Vec<u8>,
    },
    /// Estimate how often five independently drawn ships do not overlap.
    ValidityRatio {
        #[arg(long, default_value_t = 100_000, value_parser = clap::value_parser!(u64).range(1..))]
        trials: u64,
    },
    /// Average shots needed by one strategy to sink a random fleet.
    Simulate {
        #[arg(long, value_enum, default_value_t = StrategyKind::Probability)]
        strategy: StrategyKind,
        #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
        trials: u64,
    },
    /// Run every strategy on the same number of games and compare means.
    Compare {
        #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
        trials: u64,
    },
    /// Show the opening probability map of the probability strategy.
    Map,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (results will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let empty = Grid::new();

    match cli.command {
        Commands::CountShip { ship } => {
            let count = count_single(ship, &empty).map_err(|e| anyhow::anyhow!(e))?;
            println!("Placements for ship {}: {}", ship, count);
        }
        Commands::CountFleet { ships } => {
            let names = ships
                .iter()
                .map(|&id| ship_type(id).map(|s| s.name()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| anyhow::anyhow!(e))?;
            let count = count_fleet(&ships, &empty).map_err(|e| anyhow::anyhow!(e))?;
            println!("Placements for {}: {}", names.join(", "), count);
        }
        Commands::ValidityRatio { trials } => {
            let ratio = estimate_validity_ratio(trials as usize, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("Validity ratio over {} trials: {:.6}", trials, ratio);
        }
        Commands::Simulate { strategy, trials } => {
            let mut player = strategy.build();
            let mean = estimate_distribution(
                trials as usize,
                player.as_mut(),
                &mut rng,
                &mut TextHistogram,
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            println!("Average shots ({}): {:.2}", strategy.name(), mean);
        }
        Commands::Compare { trials } => {
            for kind in StrategyKind::ALL {
                let mut player = kind.build();
                let mean = estimate_distribution(
                    trials as usize,
                    player.as_mut(),
                    &mut rng,
                    &mut TextHistogram,
                )
                .map_err(|e| anyhow::anyhow!(e))?;
                println!("Average shots ({}): {:.2}\n", kind.name(), mean);
            }
        }
        Commands::Map => {
            let map = probability_map(&ShotLog::new());
            println!("{}", render_probability_map(&map));
        }
    }
    Ok(())
}
