//! Span normalizer: raw recognizer spans → validated, sorted [`EntitySpan`]s.
//!
//! Substrings always come from the sentence's plain text. Recognizers that
//! re-join tokens with whitespace report text that can drift from the real
//! offsets, so their `text` field is only compared, never used.

use pseudo_core::errors::{PseudoError, PseudoResult, SpanError};
use pseudo_core::models::{EntitySpan, RawSpan, SentenceRecord};
use pseudo_observability::tracing_setup::events;

/// Normalize one sentence. `sentence` is the index reported in errors.
///
/// Spans outside {PERSON, ORG, LOCATION} are dropped before validation, so
/// an `Other` span overlapping a person never fails the document.
pub fn normalize_sentence<'a>(
    sentence: usize,
    plain_text: &'a str,
    raw: &[RawSpan],
) -> PseudoResult<SentenceRecord<'a>> {
    let offsets = CharOffsets::new(plain_text);

    let mut spans = Vec::with_capacity(raw.len());
    for span in raw.iter().filter(|s| s.category.is_pseudonymized()) {
        let entity = offsets
            .entity(plain_text, span)
            .map_err(|e| PseudoError::invalid_span(sentence, e))?;
        if entity.text != span.text {
            events::span_text_mismatch(sentence, &span.text, &entity.text);
        }
        spans.push(entity);
    }

    spans.sort_by_key(|s| (s.start, s.end));
    check_non_overlapping(&spans).map_err(|e| PseudoError::invalid_span(sentence, e))?;

    Ok(SentenceRecord { plain_text, spans })
}

fn check_non_overlapping(sorted: &[EntitySpan]) -> Result<(), SpanError> {
    for pair in sorted.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(SpanError::Overlapping {
                start: pair[1].start,
                end: pair[1].end,
                previous_end: pair[0].end,
            });
        }
    }
    Ok(())
}

/// Char-offset → byte-offset table for one sentence.
struct CharOffsets {
    /// Byte offset of every char, plus the text length as a final entry.
    bytes: Vec<usize>,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        let bytes = text
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(text.len()))
            .collect();
        Self { bytes }
    }

    fn char_len(&self) -> usize {
        self.bytes.len() - 1
    }

    fn entity(&self, text: &str, span: &RawSpan) -> Result<EntitySpan, SpanError> {
        if span.start >= span.end {
            return Err(SpanError::Empty {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > self.char_len() {
            return Err(SpanError::OutOfRange {
                start: span.start,
                end: span.end,
                len: self.char_len(),
            });
        }
        let byte_start = self.bytes[span.start];
        let byte_end = self.bytes[span.end];
        Ok(EntitySpan {
            start: span.start,
            end: span.end,
            byte_start,
            byte_end,
            category: span.category,
            text: text[byte_start..byte_end].to_string(),
        })
    }
}
