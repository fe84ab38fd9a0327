use serde::{Deserialize, Serialize};

use super::{EntitySpan, RawSpan};

/// One sentence handed to the engine: its plain text and the recognizer's
/// raw spans for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceInput {
    pub plain_text: String,
    pub spans: Vec<RawSpan>,
}

impl SentenceInput {
    pub fn new(plain_text: impl Into<String>, spans: Vec<RawSpan>) -> Self {
        Self {
            plain_text: plain_text.into(),
            spans,
        }
    }

    /// A sentence the recognizer found nothing in.
    pub fn plain(plain_text: impl Into<String>) -> Self {
        Self::new(plain_text, Vec::new())
    }

    pub fn is_blank(&self) -> bool {
        self.plain_text.trim().is_empty()
    }
}

/// A normalized sentence: borrowed plain text plus spans sorted by start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord<'a> {
    pub plain_text: &'a str,
    pub spans: Vec<EntitySpan>,
}

impl SentenceRecord<'_> {
    pub fn has_entities(&self) -> bool {
        !self.spans.is_empty()
    }
}
