use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const FALLBACK_LEVEL: &str = "info";

/// Installs the global subscriber. `RUST_LOG` wins over the configured level;
/// output goes to stderr so it never interleaves with screen text.
pub fn init(config: &LogConfig) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(&config.level)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)
}

fn configured_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}
