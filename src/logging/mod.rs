//! Logging setup for the `log` facade used throughout the crate.

use env_logger::Env;

/// Initialize the process-wide logger.
///
/// `RUST_LOG` overrides the default `info` filter. Returns an error if a
/// logger was already installed.
pub fn init() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init()
}
