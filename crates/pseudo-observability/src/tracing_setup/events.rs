//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use pseudo_core::errors::StatsError;
use pseudo_core::models::PoolExhaustionNotice;

/// Log a completed document.
pub fn document_processed(sentences: usize, entities: usize, identities: usize, elapsed_ms: f64) {
    tracing::info!(
        event = "document_processed",
        sentences = sentences,
        entities = entities,
        identities = identities,
        elapsed_ms = elapsed_ms,
        "document processed"
    );
}

/// Log a fuzzy identity merge.
pub fn identity_merged(surface: &str, canonical: &str, distance: usize) {
    tracing::debug!(
        event = "identity_merged",
        surface = %surface,
        canonical = %canonical,
        distance = distance,
        "identity merged"
    );
}

/// Log a replacement pool wraparound.
pub fn pool_wrapped(notice: &PoolExhaustionNotice) {
    tracing::warn!(
        event = "pool_wrapped",
        pool_size = notice.pool_size,
        allocated = notice.allocated,
        reused = notice.reused(),
        "replacement pool wrapped; distinct entities may share a token"
    );
}

/// Log a recognizer span whose text disagrees with the plain text.
pub fn span_text_mismatch(sentence: usize, recognizer_text: &str, plain_text: &str) {
    tracing::debug!(
        event = "span_text_mismatch",
        sentence = sentence,
        recognizer_text = %recognizer_text,
        plain_text = %plain_text,
        "recognizer span text differs from plain text; using plain text"
    );
}

/// Log a successful statistics update.
pub fn stats_updated(doc_count: u64, avg_time_per_doc: f64) {
    tracing::debug!(
        event = "stats_updated",
        doc_count = doc_count,
        avg_time_per_doc = avg_time_per_doc,
        "running statistics updated"
    );
}

/// Log a statistics update that was dropped.
pub fn stats_update_discarded(error: &StatsError) {
    tracing::warn!(
        event = "stats_update_discarded",
        error = %error,
        "statistics update discarded"
    );
}

/// Log recovery from a statistics lock poisoned by a panicking holder.
pub fn stats_lock_recovered() {
    tracing::warn!(
        event = "stats_lock_recovered",
        "statistics lock was poisoned; recovered last stored value"
    );
}
