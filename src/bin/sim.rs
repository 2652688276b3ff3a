//! Plays every strategy from the same seed and prints a JSON summary.
//!
//! Usage: `sim <seed> <trials>`

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use fleet_odds::{init_logging, run_trials, StrategyKind};
    use rand::{rngs::SmallRng, SeedableRng};
    use serde_json::json;

    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <trials>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let trials: usize = args[2].parse()?;

    let mut results = serde_json::Map::new();
    for kind in StrategyKind::ALL {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut player = kind.build();
        let dist = run_trials(trials, player.as_mut(), &mut rng).map_err(|e| anyhow::anyhow!(e))?;
        results.insert(
            kind.name().to_string(),
            json!({
                "mean": dist.mean(),
                "std_dev": dist.std_dev(),
                "min": dist.min(),
                "max": dist.max(),
                "frequencies": dist.frequencies(),
            }),
        );
    }

    let best = results
        .iter()
        .filter_map(|(name, v)| v["mean"].as_f64().map(|m| (name.clone(), m)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name);

    let summary = json!({
        "seed": seed,
        "trials": trials,
        "strategies": results,
        "best": best,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
