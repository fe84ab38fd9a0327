//! [`StatsRecorder`]: the single shared mutable resource of the engine.
//!
//! Every read-modify-write of [`RunningStats`] happens under one mutex, so
//! two documents finishing together can never fold into a stale
//! `(old_n, old_avg)` pair. Recording never fails the caller: invalid
//! summaries are logged and dropped. A lock poisoned by a panicking holder is
//! logged and recovered; the stored value is only ever replaced whole.

use std::sync::{Mutex, MutexGuard};

use pseudo_core::errors::{PseudoResult, StatsError};
use pseudo_core::models::{DocSummary, OutputType, RunningStats};

use crate::aggregator::update_stats;
use crate::tracing_setup::events;

/// Mutex-guarded running statistics.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    stats: Mutex<RunningStats>,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously persisted statistics.
    pub fn with_stats(stats: RunningStats) -> Self {
        Self {
            stats: Mutex::new(stats),
        }
    }

    /// Fold one completed document in. Failures are logged and discarded;
    /// the return value only tells the caller whether the update landed.
    pub fn record(&self, summary: &DocSummary, output_type: OutputType) -> bool {
        match self.try_record(summary, output_type) {
            Ok(()) => true,
            Err(e) => {
                events::stats_update_discarded(&e);
                false
            }
        }
    }

    /// Fold one completed document in, surfacing failures.
    pub fn try_record(
        &self,
        summary: &DocSummary,
        output_type: OutputType,
    ) -> Result<(), StatsError> {
        let mut guard = self.lock();
        let next = update_stats(&guard, summary, output_type)?;
        *guard = next;
        events::stats_updated(guard.doc_count, guard.avg_time_per_doc);
        Ok(())
    }

    /// Copy of the current statistics.
    pub fn snapshot(&self) -> RunningStats {
        self.lock().clone()
    }

    /// Current statistics as JSON.
    pub fn snapshot_json(&self) -> PseudoResult<serde_json::Value> {
        Ok(serde_json::to_value(self.snapshot())?)
    }

    /// Operator reset.
    pub fn reset(&self) {
        *self.lock() = RunningStats::default();
        tracing::info!(event = "stats_reset", "running statistics reset");
    }

    fn lock(&self) -> MutexGuard<'_, RunningStats> {
        self.stats.lock().unwrap_or_else(|poisoned| {
            events::stats_lock_recovered();
            self.stats.clear_poison();
            poisoned.into_inner()
        })
    }
}
