//! Subscriber setup for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter.
pub const ENV_VAR: &str = "FORMA_LOG";

/// The filter from `FORMA_LOG` if set and valid, `default` otherwise.
pub fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs a compact fmt subscriber as the global default.
///
/// Returns `false` if a global subscriber was already installed, which makes
/// repeated calls harmless.
pub fn init(default: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default))
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
