//! Incremental fold of per-document summaries into [`RunningStats`].
//!
//! Means are updated as `(old_avg * old_n + value) / (old_n + k)`; no
//! per-document history is ever stored.

use std::collections::BTreeMap;

use pseudo_core::errors::StatsError;
use pseudo_core::models::{DocSummary, OutputType, RunningStats};

/// Fold `weight` new observations whose sum is `value_sum` into a mean over
/// `old_n` observations. Returns `old_avg` unchanged when `weight` is zero.
pub fn incremental_mean(old_avg: f64, old_n: u64, value_sum: f64, weight: u64) -> f64 {
    if weight == 0 {
        return old_avg;
    }
    let total = old_n + weight;
    // Same as (old_avg * old_n + value_sum) / total.
    old_avg + (value_sum - old_avg * weight as f64) / total as f64
}

/// Produce the statistics that follow `current` once `summary` is folded in.
///
/// - per-document time is averaged over the document count
/// - per-sentence time is averaged over the cumulative sentence count
/// - category and output-type frequencies are summed key-wise
pub fn update_stats(
    current: &RunningStats,
    summary: &DocSummary,
    output_type: OutputType,
) -> Result<RunningStats, StatsError> {
    if !summary.elapsed_ms.is_finite() || summary.elapsed_ms < 0.0 {
        return Err(StatsError::InvalidElapsed {
            elapsed_ms: summary.elapsed_ms,
        });
    }

    let mut next = current.clone();
    next.avg_time_per_doc =
        incremental_mean(current.avg_time_per_doc, current.doc_count, summary.elapsed_ms, 1);
    next.avg_time_per_sentence = incremental_mean(
        current.avg_time_per_sentence,
        current.sentence_count,
        summary.elapsed_ms,
        summary.sentence_count,
    );
    next.doc_count += 1;
    next.sentence_count += summary.sentence_count;

    merge_counts(&mut next.entity_category_freq, &summary.entity_category_freq);
    *next
        .output_type_freq
        .entry(output_type.label().to_string())
        .or_insert(0) += 1;

    if summary.pool_wrapped {
        next.pool_wrap_count += 1;
    }
    next.updated_at = Some(chrono::Utc::now());
    Ok(next)
}

fn merge_counts(into: &mut BTreeMap<String, u64>, from: &BTreeMap<String, u64>) {
    for (key, count) in from {
        *into.entry(key.clone()).or_insert(0) += count;
    }
}
