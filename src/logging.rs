#![cfg(feature = "std")]

//! Stderr logger for the binaries. Lines carry the time since
//! [`init_logging`] and only records from this crate are printed, so
//! dependency chatter stays out of simulation output.

use log::{Level, LevelFilter, Metadata, Record};
use std::{
    env, fmt,
    sync::OnceLock,
    time::{Duration, Instant},
};

const CRATE_TARGET: &str = "fleet_odds";

static STARTED: OnceLock<Instant> = OnceLock::new();

struct SimpleLogger;

/// Records whose target is this crate or one of its modules.
fn accepts(target: &str) -> bool {
    target
        .strip_prefix(CRATE_TARGET)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

fn format_line(elapsed: Duration, level: Level, target: &str, args: fmt::Arguments<'_>) -> String {
    format!(
        "{:>4}.{:03}s {:<5} [{}] {}",
        elapsed.as_secs(),
        elapsed.subsec_millis(),
        level,
        target,
        args
    )
}

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && accepts(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let elapsed = STARTED.get_or_init(Instant::now).elapsed();
            eprintln!(
                "{}",
                format_line(elapsed, record.level(), record.target(), *record.args())
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Install the stderr logger with a level taken from `FLEET_ODDS_LOG`.
/// Defaults to `info` if the variable is unset or invalid. Calling this
/// more than once is harmless.
pub fn init_logging() {
    STARTED.get_or_init(Instant::now);
    let level = env::var("FLEET_ODDS_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_crate_targets_pass() {
        assert!(accepts("fleet_odds"));
        assert!(accepts("fleet_odds::strategy::hunt"));
        assert!(!accepts("fleet_odds_extra"));
        assert!(!accepts("rand::rngs"));
        assert!(!accepts("sim"));
    }

    #[test]
    fn line_has_elapsed_level_and_target() {
        let line = format_line(
            Duration::from_millis(2_045),
            Level::Info,
            "fleet_odds::estimator",
            format_args!("mean {}", 56),
        );
        assert_eq!(line, "   2.045s INFO  [fleet_odds::estimator] mean 56");
    }
}
