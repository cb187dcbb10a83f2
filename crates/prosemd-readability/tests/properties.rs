use proptest::prelude::*;
use prosemd_readability::{ReadabilityInputs, compute, fog_index};

fn inputs() -> impl Strategy<Value = ReadabilityInputs> {
    (1usize..5000, 0usize..500, 0.0f64..=1.0, 1usize..6, 1usize..15).prop_map(
        |(words, sentences, complex_frac, syl_per, chars_per)| ReadabilityInputs {
            word_count: words,
            sentence_count: sentences.min(words),
            complex_word_count: ((words as f64) * complex_frac).floor() as usize,
            syllable_count: words * syl_per,
            character_count: words * chars_per,
        },
    )
}

proptest! {
    #[test]
    fn percentage_complex_is_bounded(input in inputs()) {
        let r = compute(&input).unwrap();
        prop_assert!((0.0..=100.0).contains(&r.percentage_complex_words));
    }

    #[test]
    fn fog_is_defined_from_flesch(input in inputs()) {
        let r = compute(&input).unwrap();
        prop_assert_eq!(r.fog_index, fog_index(r.flesch_reading_ease, r.percentage_complex_words));
    }

    #[test]
    fn averages_are_finite(input in inputs()) {
        let r = compute(&input).unwrap();
        prop_assert!(r.flesch_reading_ease.is_finite());
        prop_assert!(r.avg_words_per_sentence >= 1.0);
        prop_assert!(r.syllables_per_word >= 1.0);
        prop_assert!(r.avg_word_length >= 1.0);
    }

    #[test]
    fn more_syllables_lower_reading_ease(input in inputs()) {
        let harder = ReadabilityInputs {
            syllable_count: input.syllable_count + input.word_count,
            ..input
        };
        let easy = compute(&input).unwrap();
        let hard = compute(&harder).unwrap();
        prop_assert!(hard.flesch_reading_ease < easy.flesch_reading_ease);
    }

    #[test]
    fn compute_is_deterministic(input in inputs()) {
        prop_assert_eq!(compute(&input).unwrap(), compute(&input).unwrap());
    }
}
