/// Statistics update failures. Logged and discarded by the recorder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("elapsed time must be finite and non-negative, got {elapsed_ms}")]
    InvalidElapsed { elapsed_ms: f64 },
}
