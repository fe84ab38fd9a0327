//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use pseudo_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted for the log filter before the config.
pub const LOG_ENV_VAR: &str = "PSEUDO_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber from config.
///
/// See [`filter_directive`] for how the filter is chosen. Idempotent: only
/// the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::new(filter_directive(config));

        if config.json_logs {
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .json(),
                )
                .with(filter)
                .try_init();
        } else {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Filter directive in effect: `PSEUDO_LOG` when set and parseable,
/// otherwise `config.log_level`.
pub fn filter_directive(config: &ObservabilityConfig) -> String {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .filter(|directive| EnvFilter::try_new(directive).is_ok())
        .unwrap_or_else(|| config.log_level.clone())
}
