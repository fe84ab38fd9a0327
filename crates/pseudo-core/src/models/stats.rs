use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityCategory;

/// Process-wide running statistics. No per-document history is kept; means
/// are maintained incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunningStats {
    pub doc_count: u64,
    pub sentence_count: u64,
    /// Keyed by category label (`PER`, `ORG`, `LOC`).
    pub entity_category_freq: BTreeMap<String, u64>,
    /// Milliseconds.
    pub avg_time_per_doc: f64,
    /// Milliseconds.
    pub avg_time_per_sentence: f64,
    /// Keyed by output type label.
    pub output_type_freq: BTreeMap<String, u64>,
    /// Documents whose token allocation wrapped around the pool.
    pub pool_wrap_count: u64,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Per-document figures folded into [`RunningStats`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocSummary {
    pub sentence_count: u64,
    pub entity_category_freq: BTreeMap<String, u64>,
    pub elapsed_ms: f64,
    pub pool_wrapped: bool,
}

impl DocSummary {
    /// Count one entity mention.
    pub fn count_entity(&mut self, category: EntityCategory) {
        *self
            .entity_category_freq
            .entry(category.label().to_string())
            .or_insert(0) += 1;
    }

    pub fn entity_count(&self) -> u64 {
        self.entity_category_freq.values().sum()
    }
}
