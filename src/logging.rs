//! Logger setup

use crate::config::LoggingConfig;

/// Install `env_logger` as the `log` backend.
///
/// `RUST_LOG` wins over the configured level. Calling this more than once
/// leaves the first logger in place.
pub fn init(config: &LoggingConfig) {
    let env = env_logger::Env::default().default_filter_or(config.level.as_str());
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        log::debug!("env_logger already initialized: {}", e);
    }
}
