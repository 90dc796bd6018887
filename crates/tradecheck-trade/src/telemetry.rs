//! Logging setup for processes that host the engine.

use tracing_subscriber::{EnvFilter, fmt};
use tradecheck_types::constants;

use crate::{LogFormat, LoggingConfig};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = match config.format {
        LogFormat::Json => fmt().json().with_env_filter(filter).try_init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).try_init(),
    };
    if installed.is_err() {
        return false;
    }
    tracing::info!(
        engine = constants::ENGINE_NAME,
        version = constants::VERSION,
        format = ?config.format,
        "Logging initialized"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_a_no_op() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        assert!(!init_logging(&config));
    }

    #[test]
    fn startup_event_identifies_the_engine() {
        assert_eq!(constants::ENGINE_NAME, "tradecheck");
        assert_eq!(constants::VERSION, env!("CARGO_PKG_VERSION"));
    }
}
