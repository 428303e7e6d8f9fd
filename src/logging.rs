//! Diagnostic logging
//!
//! Console output for users goes through `ui`; this is the `log` facade
//! backed by `env_logger`, written to stderr. `RUST_LOG` wins over `-v`.

use log::LevelFilter;

/// Log level for a `-v` count
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Calling it twice is harmless.
pub fn init(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(level_for(verbose).as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
