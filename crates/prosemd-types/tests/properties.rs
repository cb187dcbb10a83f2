use proptest::prelude::*;
use prosemd_types::{MetricField, MetricsRecord};

fn record(count: usize, score: f64) -> MetricsRecord {
    MetricsRecord {
        positive_score: count,
        negative_score: count,
        polarity_score: score,
        subjectivity_score: score.abs(),
        avg_sentence_length: score,
        percentage_complex_words: score,
        fog_index: score,
        avg_words_per_sentence: score,
        complex_word_count: count,
        word_count: count,
        syllable_per_word: score,
        personal_pronouns: count,
        avg_word_length: score,
    }
}

proptest! {
    #[test]
    fn map_scores_identity_is_noop(count in 0usize..10_000, score in -1e4f64..1e4) {
        let rec = record(count, score);
        prop_assert_eq!(rec.map_scores(|v| v), rec);
    }

    #[test]
    fn get_agrees_with_fields(count in 0usize..10_000, score in -1e4f64..1e4) {
        let rec = record(count, score);
        for (field, value) in rec.fields() {
            prop_assert_eq!(rec.get(field), value);
        }
    }

    #[test]
    fn labels_are_unique(_dummy in 0u8..1) {
        let mut labels: Vec<&str> = MetricField::ALL.iter().map(|f| f.label()).collect();
        labels.sort();
        labels.dedup();
        prop_assert_eq!(labels.len(), MetricField::ALL.len());
    }
}
