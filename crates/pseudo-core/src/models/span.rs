use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::EntityCategory;

/// One span as produced by the external recognizer.
///
/// Offsets are half-open character offsets into the sentence's plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpan {
    pub start: usize,
    pub end: usize,
    pub category: EntityCategory,
    pub text: String,
}

impl RawSpan {
    pub fn new(start: usize, end: usize, category: EntityCategory, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            category,
            text: text.into(),
        }
    }
}

/// A validated, pseudonymizable span.
///
/// `start`/`end` are character offsets (the recognizer's coordinate system);
/// `byte_start`/`byte_end` index the same range in the UTF-8 plain text.
/// `text` is always taken from the plain text, never from the recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub byte_start: usize,
    pub byte_end: usize,
    pub category: EntityCategory,
    pub text: String,
}

impl EntitySpan {
    /// Byte range into the sentence plain text.
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_end
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}
