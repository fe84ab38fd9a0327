//! Text renderer: pseudonymized and tagged renderings of one sentence.
//!
//! Both renderings go through an [`EditPlan`] built from the original,
//! unshifted span offsets.
//!
//! Escaping policy for the tagged rendering: when enabled, `&`, `<` and `>`
//! from the source text are escaped (inside and outside entity spans) before
//! markup is added, so literal angle brackets can never be read as tags.
//! The pseudonymized rendering is never escaped.

use std::borrow::Cow;

use pseudo_core::constants::{SENTENCE_CLOSE, SENTENCE_OPEN, TEXT_CLOSE, TEXT_OPEN};
use pseudo_core::errors::{PseudoError, PseudoResult};
use pseudo_core::models::SentenceRecord;

use crate::edit_plan::EditPlan;
use crate::planner::PseudoMapping;

/// Replace every span with its planned token.
pub fn render_pseudo(
    sentence: usize,
    record: &SentenceRecord<'_>,
    mapping: &PseudoMapping,
) -> PseudoResult<String> {
    let mut plan = EditPlan::new(record.plain_text);
    for span in &record.spans {
        let token = mapping.token_for(span)?;
        plan.push(span.byte_range(), token)
            .map_err(|e| PseudoError::invalid_span(sentence, e))?;
    }
    Ok(plan.apply())
}

/// Wrap every span in `<CAT>…</CAT>` and the sentence in `<sentence>…</sentence>`.
pub fn render_tagged_sentence(
    sentence: usize,
    record: &SentenceRecord<'_>,
    escape: bool,
) -> PseudoResult<String> {
    let mut plan = EditPlan::new(record.plain_text);
    for span in &record.spans {
        let Some(tag) = span.category.tag_name() else {
            continue;
        };
        let inner = escape_if(&span.text, escape);
        plan.push(span.byte_range(), format!("<{tag}>{inner}</{tag}>"))
            .map_err(|e| PseudoError::invalid_span(sentence, e))?;
    }
    let body = plan.apply_with(|segment| escape_if(segment, escape));
    Ok(format!("{SENTENCE_OPEN}{body}{SENTENCE_CLOSE}"))
}

/// What a sentence contributes to the tagged document: its envelope when
/// it has entities, otherwise just its (escaped) text.
pub fn tagged_fragment(
    sentence: usize,
    record: &SentenceRecord<'_>,
    escape: bool,
) -> PseudoResult<String> {
    if record.has_entities() {
        render_tagged_sentence(sentence, record, escape)
    } else {
        Ok(escape_if(record.plain_text, escape).into_owned())
    }
}

/// Join sentence fragments into the `<text>…</text>` document. Empty
/// `<sentence></sentence>` envelopes are dropped.
pub fn assemble_tagged_document<S: AsRef<str>>(fragments: &[S], separator: &str) -> String {
    let empty_envelope = format!("{SENTENCE_OPEN}{SENTENCE_CLOSE}");
    let kept: Vec<&str> = fragments
        .iter()
        .map(AsRef::as_ref)
        .filter(|f| !f.is_empty() && *f != empty_envelope)
        .collect();
    format!("{TEXT_OPEN}{}{TEXT_CLOSE}", kept.join(separator))
}

/// Escape markup-significant characters.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn escape_if(text: &str, escape: bool) -> Cow<'_, str> {
    if escape {
        escape_markup(text)
    } else {
        Cow::Borrowed(text)
    }
}
