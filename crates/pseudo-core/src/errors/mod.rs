mod span_error;
mod stats_error;

pub use span_error::SpanError;
pub use stats_error::StatsError;

/// Top-level error for the pseudonymization engine.
#[derive(Debug, thiserror::Error)]
pub enum PseudoError {
    #[error("invalid span in sentence {sentence}: {source}")]
    InvalidSpan {
        sentence: usize,
        #[source]
        source: SpanError,
    },

    #[error("no replacement token planned for {category} entity '{surface}'")]
    UnplannedEntity { surface: String, category: String },

    #[error("tagger failed on sentence {sentence}: {reason}")]
    Tagger { sentence: usize, reason: String },

    #[error(transparent)]
    StatsError(#[from] StatsError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PseudoError {
    /// Attach the sentence index to a span error.
    pub fn invalid_span(sentence: usize, source: SpanError) -> Self {
        Self::InvalidSpan { sentence, source }
    }
}

/// Result alias used across the workspace.
pub type PseudoResult<T> = Result<T, PseudoError>;
