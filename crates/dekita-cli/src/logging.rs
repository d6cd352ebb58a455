//! Logger setup for the binary.

use log::LevelFilter;

/// Log level for a `-v` count. Warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` overrides the `-v` level.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();
    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
