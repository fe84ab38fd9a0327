use crate::errors::PseudoResult;
use crate::models::RawSpan;

/// External named-entity recognizer.
///
/// Implementations return spans with character offsets into exactly the
/// `sentence` string they were given. Spans of any category may be
/// returned; filtering happens downstream.
pub trait IEntityTagger: Send + Sync {
    fn tag(&self, sentence: &str) -> PseudoResult<Vec<RawSpan>>;
}
