//! # pseudo-observability
//!
//! Process-wide running statistics and logging for the pseudonymization
//! engine: the incremental [`update_stats`] fold, the mutex-guarded
//! [`StatsRecorder`], and `tracing` setup with span/event helpers.

pub mod aggregator;
pub mod recorder;
pub mod tracing_setup;

pub use aggregator::{incremental_mean, update_stats};
pub use recorder::StatsRecorder;
