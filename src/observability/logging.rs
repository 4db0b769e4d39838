//! Log subscriber setup.

use crate::config::Config;
use crate::error::LoggingError;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to the configured log level.
///
/// # Errors
///
/// Returns `LoggingError::Install` if a global subscriber is already set.
pub fn init_logging(config: &Config) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_only_once() {
        let config = Config::default();
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
