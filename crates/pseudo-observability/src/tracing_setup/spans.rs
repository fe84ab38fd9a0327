//! Span definitions per operation: document, resolution, render, pipeline.

/// Create a document span.
#[macro_export]
macro_rules! document_span {
    ($doc_id:expr, $sentence_count:expr) => {
        tracing::info_span!("pseudo.document", doc_id = %$doc_id, sentences = $sentence_count)
    };
}

/// Create an identity-resolution span.
#[macro_export]
macro_rules! resolve_span {
    ($entity_count:expr) => {
        tracing::debug_span!("pseudo.resolve", entities = $entity_count)
    };
}

/// Create a sentence render span.
#[macro_export]
macro_rules! render_span {
    ($sentence_index:expr, $span_count:expr) => {
        tracing::debug_span!("pseudo.render", sentence = $sentence_index, spans = $span_count)
    };
}

/// Create a text pipeline span.
#[macro_export]
macro_rules! pipeline_span {
    ($output_type:expr) => {
        tracing::info_span!("pseudo.pipeline", output_type = %$output_type)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DOCUMENT: &str = "pseudo.document";
    pub const RESOLVE: &str = "pseudo.resolve";
    pub const RENDER: &str = "pseudo.render";
    pub const PIPELINE: &str = "pseudo.pipeline";
}
