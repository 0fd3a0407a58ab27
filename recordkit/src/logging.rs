//! Logging setup.
//!
//! Library code only emits `tracing` events. Nothing is printed until a
//! subscriber is installed, which binaries do once at startup with [`init`].

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding the filter directives for the binary.
pub const LOG_ENV_VAR: &str = "RECORDKIT_LOG";

/// Level used when the environment variable is not set.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Builds a filter from the directives in `env_var`, falling back to [`DEFAULT_LEVEL`].
///
/// Directives that fail to parse are skipped rather than rejected.
pub fn filter_from_env(env_var: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .with_env_var(env_var)
        .from_env_lossy()
}

/// Installs a formatting subscriber on stderr filtered by `env_var`.
///
/// Returns `false` if a global subscriber was already installed, in which case
/// the existing one is kept.
pub fn init(env_var: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env(env_var))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
