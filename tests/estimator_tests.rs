use fleet_odds::{
    estimate_distribution, run_trials, Distribution, DistributionSink, GridError, HuntStrategy,
    RandomStrategy, StrategyKind,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Default)]
struct Capture {
    calls: Vec<(String, Distribution)>,
}

impl DistributionSink for Capture {
    fn render(&mut self, strategy: &str, distribution: &Distribution) {
        self.calls.push((strategy.to_string(), distribution.clone()));
    }
}

#[test]
fn test_frequencies_sum_to_trials() {
    for kind in StrategyKind::ALL {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut strategy = kind.build();
        let dist = run_trials(40, strategy.as_mut(), &mut rng).unwrap();
        assert_eq!(dist.trials(), 40);
        assert_eq!(dist.total_occurrences(), 40);
    }
}

#[test]
fn test_estimate_reports_mean_and_calls_sink() {
    let mut sink = Capture::default();
    let mut rng = SmallRng::seed_from_u64(9);
    let mean = estimate_distribution(30, &mut HuntStrategy, &mut rng, &mut sink).unwrap();

    assert_eq!(sink.calls.len(), 1);
    let (name, dist) = &sink.calls[0];
    assert_eq!(name, "hunt");
    assert_eq!(dist.total_occurrences(), 30);
    assert_eq!(mean, dist.mean());
}

#[test]
fn test_same_seed_same_distribution() {
    let a = run_trials(25, &mut RandomStrategy, &mut SmallRng::seed_from_u64(12)).unwrap();
    let b = run_trials(25, &mut RandomStrategy, &mut SmallRng::seed_from_u64(12)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zero_trials_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        run_trials(0, &mut RandomStrategy, &mut rng).unwrap_err(),
        GridError::NoTrials
    );
}

#[test]
fn test_distribution_statistics() {
    let mut dist = Distribution::new();
    assert_eq!(dist.mean(), 0.0);
    assert_eq!(dist.min(), None);
    for shots in [40, 60, 60, 80] {
        dist.record(shots);
    }
    assert_eq!(dist.trials(), 4);
    assert_eq!(dist.frequencies().get(&60), Some(&2));
    assert_eq!(dist.mean(), 60.0);
    assert!((dist.std_dev() - 200f64.sqrt()).abs() < 1e-9);
    assert_eq!(dist.min(), Some(40));
    assert_eq!(dist.max(), Some(80));
}

#[test]
fn test_histogram_lists_every_count() {
    let mut dist = Distribution::new();
    for shots in [50, 50, 70] {
        dist.record(shots);
    }
    let text = fleet_odds::render_histogram("random", &dist);
    assert!(text.contains("random over 3 simulations"));
    assert!(text.lines().any(|l| l.trim_start().starts_with("50 |")));
    assert!(text.lines().any(|l| l.trim_start().starts_with("70 |")));
    assert!(text.ends_with("mean 56.67, std dev 9.43"));
}
