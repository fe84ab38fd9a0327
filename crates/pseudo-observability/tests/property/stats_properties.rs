use pseudo_core::models::{DocSummary, OutputType, RunningStats};
use pseudo_observability::{incremental_mean, update_stats};
use proptest::prelude::*;

proptest! {
    #[test]
    fn avg_time_per_doc_is_arithmetic_mean(
        times in prop::collection::vec(0.0f64..10_000.0, 1..200)
    ) {
        let mut stats = RunningStats::default();
        for &t in &times {
            let summary = DocSummary { sentence_count: 1, elapsed_ms: t, ..Default::default() };
            stats = update_stats(&stats, &summary, OutputType::Pseudonymized).unwrap();
        }
        let mean = times.iter().sum::<f64>() / times.len() as f64;
        prop_assert!(
            (stats.avg_time_per_doc - mean).abs() <= 1e-6 * mean.max(1.0),
            "incremental {} vs batch {}", stats.avg_time_per_doc, mean
        );
        prop_assert_eq!(stats.doc_count, times.len() as u64);
    }

    #[test]
    fn avg_time_per_sentence_is_weighted_mean(
        docs in prop::collection::vec((1u64..20, 0.0f64..5_000.0), 1..100)
    ) {
        let mut stats = RunningStats::default();
        for &(sentences, t) in &docs {
            let summary = DocSummary { sentence_count: sentences, elapsed_ms: t, ..Default::default() };
            stats = update_stats(&stats, &summary, OutputType::Tagged).unwrap();
        }
        let total_time: f64 = docs.iter().map(|d| d.1).sum();
        let total_sentences: u64 = docs.iter().map(|d| d.0).sum();
        let expected = total_time / total_sentences as f64;
        prop_assert!((stats.avg_time_per_sentence - expected).abs() <= 1e-6 * expected.max(1.0));
        prop_assert_eq!(stats.sentence_count, total_sentences);
    }

    #[test]
    fn incremental_mean_with_zero_weight_is_identity(avg in -1e6f64..1e6, n in 0u64..1_000_000) {
        prop_assert_eq!(incremental_mean(avg, n, 123.0, 0), avg);
    }

    #[test]
    fn counts_never_decrease(
        docs in prop::collection::vec((0u64..5, 0.0f64..100.0, any::<bool>()), 1..50)
    ) {
        let mut stats = RunningStats::default();
        for &(sentences, t, wrapped) in &docs {
            let before = stats.clone();
            let summary = DocSummary {
                sentence_count: sentences,
                elapsed_ms: t,
                pool_wrapped: wrapped,
                ..Default::default()
            };
            stats = update_stats(&stats, &summary, OutputType::Conll).unwrap();
            prop_assert_eq!(stats.doc_count, before.doc_count + 1);
            prop_assert!(stats.sentence_count >= before.sentence_count);
            prop_assert!(stats.pool_wrap_count >= before.pool_wrap_count);
        }
    }
}
