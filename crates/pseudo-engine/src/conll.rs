//! CoNLL-style token listing: `token<TAB>tag<TAB>start<TAB>end`, BIO tags,
//! character offsets, one blank line after every sentence.

use std::fmt::Write;
use std::sync::LazyLock;

use pseudo_core::errors::PseudoResult;
use pseudo_core::models::{SentenceInput, SentenceRecord};
use regex::Regex;

use crate::normalizer::normalize_sentence;

/// Word runs or single non-space symbols.
static TOKEN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w+|[^\w\s]").ok());

/// Render one normalized sentence.
pub fn render_conll_sentence(record: &SentenceRecord<'_>) -> String {
    let text = record.plain_text;
    let mut out = String::new();
    let mut chars_before = 0;
    let mut last_byte = 0;
    let mut previous_span: Option<usize> = None;
    let Some(token_re) = TOKEN_RE.as_ref() else {
        out.push('\n');
        return out;
    };

    for m in token_re.find_iter(text) {
        chars_before += text[last_byte..m.start()].chars().count();
        let token_chars = m.as_str().chars().count();
        let (start, end) = (chars_before, chars_before + token_chars);
        last_byte = m.start();

        let covering = record
            .spans
            .iter()
            .position(|s| m.start() < s.byte_end && m.end() > s.byte_start);
        let tag = match covering {
            Some(i) => {
                let prefix = if previous_span == Some(i) { "I" } else { "B" };
                // Normalized spans are always one of the tagged categories.
                let name = record.spans[i].category.tag_name().unwrap_or("MISC");
                format!("{prefix}-{name}")
            }
            None => "O".to_string(),
        };
        previous_span = covering;

        let _ = writeln!(out, "{}\t{tag}\t{start}\t{end}", m.as_str());
    }
    out.push('\n');
    out
}

/// Render a whole document. Blank sentences are skipped.
pub fn render_conll(sentences: &[SentenceInput]) -> PseudoResult<String> {
    let mut out = String::new();
    for (i, sentence) in sentences.iter().enumerate() {
        if sentence.is_blank() {
            continue;
        }
        let record = normalize_sentence(i, &sentence.plain_text, &sentence.spans)?;
        out.push_str(&render_conll_sentence(&record));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseudo_core::models::EntityCategory::*;
    use pseudo_core::models::RawSpan;

    #[test]
    fn token_pattern_compiles() {
        assert!(TOKEN_RE.is_some());
    }

    #[test]
    fn bio_tags_with_char_offsets() {
        let sentence = SentenceInput::new(
            "Jean Dupont habite à Paris.",
            vec![
                RawSpan::new(0, 11, Person, "Jean Dupont"),
                RawSpan::new(21, 26, Location, "Paris"),
            ],
        );
        let out = render_conll(&[sentence]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Jean\tB-PER\t0\t4",
                "Dupont\tI-PER\t5\t11",
                "habite\tO\t12\t18",
                "à\tO\t19\t20",
                "Paris\tB-LOC\t21\t26",
                ".\tO\t26\t27",
                "",
            ]
        );
    }

    #[test]
    fn adjacent_entities_each_begin() {
        let sentence = SentenceInput::new(
            "Ann Bob",
            vec![
                RawSpan::new(0, 3, Person, "Ann"),
                RawSpan::new(4, 7, Person, "Bob"),
            ],
        );
        let out = render_conll(&[sentence]).unwrap();
        assert!(out.contains("Ann\tB-PER\t0\t3"));
        assert!(out.contains("Bob\tB-PER\t4\t7"));
    }

    #[test]
    fn blank_sentences_are_skipped_and_other_is_outside() {
        let sentences = [
            SentenceInput::plain("  "),
            SentenceInput::new("Lundi", vec![RawSpan::new(0, 5, Other, "Lundi")]),
        ];
        assert_eq!(render_conll(&sentences).unwrap(), "Lundi\tO\t0\t5\n\n");
    }
}
