//! Tracing setup, span macros and structured events.

use std::sync::Mutex;

use pseudo_core::config::ObservabilityConfig;
use pseudo_core::errors::StatsError;
use pseudo_core::models::{OutputType, PoolExhaustionNotice};
use pseudo_observability::tracing_setup::{
    events, filter_directive, init_tracing, spans, LOG_ENV_VAR,
};

/// Serializes tests that touch the log env var.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_tracing_honours_env_override() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "pseudo_engine=debug,warn");
    init_tracing(&ObservabilityConfig::default());
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn env_var_wins_over_configured_level() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    let config = ObservabilityConfig {
        log_level: "warn".into(),
        ..Default::default()
    };

    std::env::remove_var(LOG_ENV_VAR);
    assert_eq!(filter_directive(&config), "warn");

    std::env::set_var(LOG_ENV_VAR, "pseudo_engine=trace");
    assert_eq!(filter_directive(&config), "pseudo_engine=trace");

    std::env::set_var(LOG_ENV_VAR, "pseudo_engine=notalevel");
    assert_eq!(filter_directive(&config), "warn");
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    let config = ObservabilityConfig {
        json_logs: true,
        ..Default::default()
    };
    init_tracing(&config);
    init_tracing(&config);
    init_tracing(&ObservabilityConfig::default());
}

#[test]
fn span_macros_use_the_published_names() {
    let doc_id = "doc-1";
    let document = pseudo_observability::document_span!(doc_id, 3usize);
    let resolve = pseudo_observability::resolve_span!(5usize);
    let render = pseudo_observability::render_span!(0usize, 2usize);
    let pipeline = pseudo_observability::pipeline_span!(OutputType::Tagged);

    for (span, name) in [
        (document, spans::names::DOCUMENT),
        (resolve, spans::names::RESOLVE),
        (render, spans::names::RENDER),
        (pipeline, spans::names::PIPELINE),
    ] {
        // Disabled spans carry no metadata when no subscriber wants them.
        if let Some(meta) = span.metadata() {
            assert_eq!(meta.name(), name);
        }
    }
}

#[test]
fn events_do_not_panic_without_subscriber() {
    events::document_processed(2, 3, 2, 1.5);
    events::identity_merged("Dupond", "Dupont", 1);
    events::pool_wrapped(&PoolExhaustionNotice {
        pool_size: 2,
        allocated: 3,
    });
    events::span_text_mismatch(0, "Jean  Dupont", "Jean Dupont");
    events::stats_updated(1, 1.5);
    events::stats_update_discarded(&StatsError::InvalidElapsed { elapsed_ms: f64::NAN });
    events::stats_lock_recovered();
}
