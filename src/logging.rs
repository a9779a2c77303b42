//! Tracing subscriber setup for the command-line driver.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary (or to the embedding application).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that turns on JSON log output when set to `1`/`true`.
pub const LOG_JSON_ENV: &str = "KNAPSACK_EVO_LOG_JSON";

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides `default_level` when set (e.g.
/// `RUST_LOG=knapsack_evo=trace` to see every generation).
///
/// Does nothing if a global subscriber is already installed.
pub fn setup_logging(json: bool, default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_target(false))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Check if JSON logging is requested via [`LOG_JSON_ENV`].
pub fn should_use_json() -> bool {
    std::env::var(LOG_JSON_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_twice_does_not_panic() {
        setup_logging(false, "warn");
        setup_logging(true, "warn");
    }
}
