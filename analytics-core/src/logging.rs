//! Subscriber setup for the `tracing` events emitted by the helpers.

use tracing_subscriber::EnvFilter;

use crate::config::GeneralConfig;

/// Install a formatting subscriber for this process.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Returns `false`
/// when a global subscriber was already installed.
///
/// # Errors
/// Returns `UtilError::Config` if the configured level is not a valid filter.
pub fn init(config: &GeneralConfig) -> crate::error::Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|e| crate::UtilError::Config(format!("log_level: {e}")))?,
    };

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok())
}
