use std::collections::HashMap;

use proptest::prelude::*;
use pseudo_core::config::PseudoConfig;
use pseudo_core::models::{EntityCategory, RawSpan, SentenceInput};
use pseudo_engine::pool::standard_tokens;
use pseudo_engine::PseudoEngine;

fn engine(fuzzy_threshold: usize, escape_markup: bool) -> PseudoEngine {
    let mut config = PseudoConfig::default();
    config.pool.shuffle = false;
    config.resolver.fuzzy_threshold = fuzzy_threshold;
    config.render.escape_markup = escape_markup;
    PseudoEngine::new(config)
}

/// Space-joined words with a span over every flagged word (char offsets).
fn build_sentence(words: &[(String, bool)], category: EntityCategory) -> SentenceInput {
    let mut text = String::new();
    let mut spans = Vec::new();
    let mut pos = 0;
    for (i, (word, is_entity)) in words.iter().enumerate() {
        if i > 0 {
            text.push(' ');
            pos += 1;
        }
        let len = word.chars().count();
        if *is_entity {
            spans.push(RawSpan::new(pos, pos + len, category, word.clone()));
        }
        text.push_str(word);
        pos += len;
    }
    SentenceInput::new(text, spans)
}

fn strip_tags(tagged: &str) -> String {
    ["<text>", "</text>", "<sentence>", "</sentence>", "<PER>", "</PER>"]
        .iter()
        .fold(tagged.to_string(), |acc, tag| acc.replace(tag, ""))
}

fn words_strategy() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec(("[a-zéèçà]{1,8}", any::<bool>()), 1..20)
}

// ── Offset integrity ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn pseudo_output_replaces_exactly_the_spans(words in words_strategy()) {
        let sentence = build_sentence(&words, EntityCategory::Person);
        let out = engine(0, true).process_document(&[sentence]).unwrap();

        let pool = standard_tokens();
        let mut assigned: HashMap<String, String> = HashMap::new();
        let expected: Vec<String> = words
            .iter()
            .map(|(word, is_entity)| {
                if !is_entity {
                    return word.clone();
                }
                let next = assigned.len();
                assigned
                    .entry(word.to_lowercase())
                    .or_insert_with(|| pool[next % pool.len()].clone())
                    .clone()
            })
            .collect();
        prop_assert_eq!(out.pseudo, expected.join(" "));
    }

    #[test]
    fn tagged_output_minus_markup_is_the_source(words in words_strategy()) {
        let sentence = build_sentence(&words, EntityCategory::Person);
        let source = sentence.plain_text.clone();
        let out = engine(2, false).process_document(&[sentence]).unwrap();
        prop_assert_eq!(strip_tags(&out.tagged), source);
    }
}

// ── Category restriction ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn other_spans_never_change_the_text(words in words_strategy()) {
        let sentence = build_sentence(&words, EntityCategory::Other);
        let source = sentence.plain_text.clone();
        let out = engine(2, true).process_document(&[sentence]).unwrap();
        prop_assert_eq!(&out.pseudo, &source);
        prop_assert_eq!(out.tagged, format!("<text>{source}</text>"));
        prop_assert_eq!(out.summary.entity_count(), 0);
    }
}

// ── Identity resolution ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn one_edit_variant_shares_the_token(word in "[a-z]{3,10}") {
        let variant = format!("{word}x");
        let words = vec![(word, true), (variant, true)];
        let out = engine(2, true).process_document(&[build_sentence(&words, EntityCategory::Person)]).unwrap();
        prop_assert_eq!(out.pseudo, "A... A...");
    }

    #[test]
    fn threshold_one_never_merges(word in "[a-z]{3,10}") {
        let variant = format!("{word}x");
        let words = vec![(word, true), (variant, true)];
        let out = engine(1, true).process_document(&[build_sentence(&words, EntityCategory::Person)]).unwrap();
        prop_assert_eq!(out.pseudo, "A... B...");
    }

    #[test]
    fn repeated_surface_repeats_its_token_across_sentences(word in "[a-z]{3,10}", filler in "[0-9]{1,4}") {
        let first = build_sentence(&[(word.clone(), true), (filler.clone(), false)], EntityCategory::Location);
        let second = build_sentence(&[(filler, false), (word.to_uppercase(), true)], EntityCategory::Location);
        let out = engine(2, true).process_document(&[first, second]).unwrap();
        let lines: Vec<&str> = out.pseudo.lines().collect();
        prop_assert_eq!(lines.len(), 2);
        prop_assert!(lines[0].starts_with("A... "));
        prop_assert!(lines[1].ends_with(" A..."));
    }
}
