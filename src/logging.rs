//! Logging setup for the CLI.
//!
//! Events go to stderr so stdout stays machine-readable. The filter is read
//! from `EXPLORE_LOG` using `tracing-subscriber`'s `EnvFilter` syntax
//! (e.g. `EXPLORE_LOG=debug` or `EXPLORE_LOG=explore_host=trace`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "EXPLORE_LOG";

/// Filter used when `EXPLORE_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `EXPLORE_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::info!("logging initialized twice");
    }
}
