//! Planned, non-overlapping byte-range replacements applied in one pass.
//!
//! All ranges refer to the ORIGINAL text. Edits must be pushed in ascending
//! order; application walks the text once, copying untouched segments and
//! splicing replacements, so no offset ever needs correcting.

use std::borrow::Cow;
use std::ops::Range;

use pseudo_core::errors::SpanError;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Edit {
    range: Range<usize>,
    replacement: String,
}

/// Ordered set of replacements over one text.
#[derive(Debug, Clone)]
pub struct EditPlan<'a> {
    text: &'a str,
    edits: Vec<Edit>,
}

impl<'a> EditPlan<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            edits: Vec::new(),
        }
    }

    /// Queue a replacement of `range` (byte offsets into the original text).
    ///
    /// Fails when the range is empty, out of bounds, not on char boundaries,
    /// or starts before the end of the previously queued edit.
    pub fn push(&mut self, range: Range<usize>, replacement: impl Into<String>) -> Result<(), SpanError> {
        if range.start >= range.end {
            return Err(SpanError::Empty {
                start: range.start,
                end: range.end,
            });
        }
        if range.end > self.text.len() {
            return Err(SpanError::OutOfRange {
                start: range.start,
                end: range.end,
                len: self.text.len(),
            });
        }
        for offset in [range.start, range.end] {
            if !self.text.is_char_boundary(offset) {
                return Err(SpanError::NotCharBoundary { offset });
            }
        }
        if let Some(previous) = self.edits.last() {
            if range.start < previous.range.end {
                return Err(SpanError::Overlapping {
                    start: range.start,
                    end: range.end,
                    previous_end: previous.range.end,
                });
            }
        }
        self.edits.push(Edit {
            range,
            replacement: replacement.into(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply every edit, copying untouched text verbatim.
    pub fn apply(&self) -> String {
        self.apply_with(Cow::Borrowed)
    }

    /// Apply every edit, passing each untouched segment through `segment`.
    pub fn apply_with<F>(&self, mut segment: F) -> String
    where
        F: FnMut(&'a str) -> Cow<'a, str>,
    {
        let replaced: usize = self.edits.iter().map(|e| e.replacement.len()).sum();
        let removed: usize = self.edits.iter().map(|e| e.range.len()).sum();
        let mut out = String::with_capacity(self.text.len() - removed + replaced);

        let text: &'a str = self.text;
        let mut cursor = 0;
        for edit in &self.edits {
            if cursor < edit.range.start {
                out.push_str(&segment(&text[cursor..edit.range.start]));
            }
            out.push_str(&edit.replacement);
            cursor = edit.range.end;
        }
        if cursor < text.len() {
            out.push_str(&segment(&text[cursor..]));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacements_of_different_lengths_keep_alignment() {
        let text = "Jean Dupont habite à Paris.";
        let mut plan = EditPlan::new(text);
        plan.push(0..11, "A...").unwrap();
        plan.push(22..27, "B...").unwrap();
        assert_eq!(plan.apply(), "A... habite à B....");
    }

    #[test]
    fn adjacent_edits_and_text_edges() {
        let mut plan = EditPlan::new("abcdef");
        plan.push(0..2, "X").unwrap();
        plan.push(2..6, "YYYYYY").unwrap();
        assert_eq!(plan.apply(), "XYYYYYY");
    }

    #[test]
    fn empty_plan_returns_text() {
        assert_eq!(EditPlan::new("inchangé").apply(), "inchangé");
    }

    #[test]
    fn rejects_out_of_order_and_overlap() {
        let mut plan = EditPlan::new("abcdef");
        plan.push(2..4, "x").unwrap();
        assert!(matches!(plan.push(3..5, "y"), Err(SpanError::Overlapping { .. })));
        assert!(matches!(plan.push(0..1, "y"), Err(SpanError::Overlapping { .. })));
    }

    #[test]
    fn rejects_split_char() {
        let mut plan = EditPlan::new("à");
        assert!(matches!(plan.push(0..1, "a"), Err(SpanError::NotCharBoundary { offset: 1 })));
    }

    #[test]
    fn rejects_out_of_range_and_empty() {
        let mut plan = EditPlan::new("abc");
        assert!(matches!(plan.push(1..9, "x"), Err(SpanError::OutOfRange { .. })));
        assert!(matches!(plan.push(1..1, "x"), Err(SpanError::Empty { .. })));
    }

    #[test]
    fn segments_are_transformed_but_replacements_are_not() {
        let mut plan = EditPlan::new("a<b c");
        plan.push(4..5, "<X>c</X>").unwrap();
        let out = plan.apply_with(|s| Cow::Owned(s.replace('<', "&lt;")));
        assert_eq!(out, "a&lt;b <X>c</X>");
    }
}
