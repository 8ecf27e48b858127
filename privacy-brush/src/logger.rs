// privacy-brush/src/logger.rs
//! Logger setup for the CLI. All log output goes to stderr so that stdout
//! only ever carries masked text.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// With `Some(level)` that level is forced for every module. With `None` the
/// level comes from `RUST_LOG`, falling back to `warn`. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .ok();
}

/// Picks the forced level from the `--verbose` and `--quiet` flags. Quiet wins.
pub fn level_for(verbose: bool, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if verbose {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
