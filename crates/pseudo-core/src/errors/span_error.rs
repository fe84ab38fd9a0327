/// Structural problems with recognizer spans. Never recovered locally: the
/// document is aborted rather than rendered with shifted offsets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("span {start}..{end} exceeds sentence length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("span {start}..{end} is empty or reversed")]
    Empty { start: usize, end: usize },

    #[error("span {start}..{end} overlaps previous span ending at {previous_end}")]
    Overlapping {
        start: usize,
        end: usize,
        previous_end: usize,
    },

    #[error("byte offset {offset} is not on a char boundary")]
    NotCharBoundary { offset: usize },
}
