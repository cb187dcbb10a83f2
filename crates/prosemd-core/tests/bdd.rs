//! BDD-style scenarios for the scoring engine.

use std::sync::Arc;

use prosemd_core::{
    DocumentOutcome, FailureKind, Lexicon, MetricField, MetricValue, ScoreConfig, ScoreError,
    Scorer,
};

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn scorer_with(polarity: f64, config: ScoreConfig) -> Scorer {
    let lexicon = Arc::new(Lexicon::new(["love", "good", "great"], ["hate", "bad"]));
    Scorer::new(lexicon, Arc::new(move |_: &str| polarity), config).unwrap()
}

fn scorer() -> Scorer {
    scorer_with(0.6, ScoreConfig::default())
}

// ---------------------------------------------------------------------------
// Scenario: a simple two-sentence document
// ---------------------------------------------------------------------------

#[test]
fn given_two_short_sentences_when_scored_then_counts_and_formulas_line_up() {
    let r = scorer().score("I love this. We love that.").unwrap();

    assert_eq!(r.word_count, 6);
    assert_eq!(r.positive_score, 2);
    assert_eq!(r.negative_score, 0);
    assert_eq!(r.complex_word_count, 0);
    assert_eq!(r.personal_pronouns, 2);
    approx(r.avg_words_per_sentence, 3.0);
    approx(r.syllable_per_word, 1.0);
    approx(r.percentage_complex_words, 0.0);
    approx(r.avg_sentence_length, 206.835 - 1.015 * 3.0 - 84.6);
    approx(r.fog_index, 0.4 * (r.avg_sentence_length + 0.0));
    approx(r.avg_word_length, 19.0 / 6.0);
}

// ---------------------------------------------------------------------------
// Scenario: a single polysyllabic word
// ---------------------------------------------------------------------------

#[test]
fn given_single_long_word_when_scored_then_everything_is_complex() {
    let r = scorer().score("Serendipity").unwrap();

    assert_eq!(r.word_count, 1);
    assert_eq!(r.complex_word_count, 1);
    approx(r.percentage_complex_words, 100.0);
    approx(r.avg_words_per_sentence, 1.0);
    approx(r.syllable_per_word, 5.0);
    approx(r.avg_sentence_length, 206.835 - 1.015 - 84.6 * 5.0);
    approx(r.fog_index, 0.4 * (r.avg_sentence_length + 100.0));
}

#[test]
fn given_higher_threshold_when_scored_then_fewer_words_are_complex() {
    let text = "Beautiful people agree.";
    let default = scorer().score(text).unwrap();
    let strict = scorer_with(0.0, ScoreConfig::with_threshold(3)).score(text).unwrap();

    assert_eq!(default.complex_word_count, 3);
    assert_eq!(strict.complex_word_count, 1);
}

// ---------------------------------------------------------------------------
// Scenario: degenerate and unusual input
// ---------------------------------------------------------------------------

#[test]
fn given_empty_or_punctuation_only_text_when_scored_then_input_is_degenerate() {
    for text in ["", "   \n\t", "... ?! ,,"] {
        assert_eq!(scorer().score(text), Err(ScoreError::DegenerateInput));
    }
}

#[test]
fn given_text_without_terminator_when_scored_then_it_is_one_sentence() {
    let analysis = scorer().analyze("no full stop at all here").unwrap();
    assert_eq!(analysis.sentence_count, 1);
    approx(analysis.metrics.avg_words_per_sentence, 6.0);
}

#[test]
fn given_mixed_case_pronouns_when_scored_then_only_i_and_we_are_reported() {
    let analysis = scorer().analyze("I told Me and my friends. WE saw us.").unwrap();
    assert_eq!(analysis.metrics.personal_pronouns, 2);
    assert_eq!(analysis.pronouns.total(), 5);
}

#[test]
fn given_lexicon_in_lower_case_when_text_is_capitalized_then_match_is_exact() {
    let r = scorer().score("Love is good. LOVE is great.").unwrap();
    assert_eq!(r.positive_score, 2);
}

#[test]
fn given_out_of_range_polarity_when_scored_then_error_carries_value() {
    let s = scorer_with(1.5, ScoreConfig::default());
    assert_eq!(s.score("fine words"), Err(ScoreError::InvalidPolarity(1.5)));
}

// ---------------------------------------------------------------------------
// Scenario: repeatability and batches
// ---------------------------------------------------------------------------

#[test]
fn given_same_text_when_scored_twice_then_records_are_identical() {
    let s = scorer();
    let text = "We hate bad weather! I love good books.";
    assert_eq!(s.score(text).unwrap(), s.score(text).unwrap());
}

#[test]
fn given_batch_with_failures_when_scored_then_every_document_has_an_outcome() {
    let s = scorer();
    let docs = vec![
        ("first".to_string(), "I love it.".to_string()),
        ("blank".to_string(), String::new()),
        ("third".to_string(), "We hate it.".to_string()),
    ];

    let outcomes = s.score_batch(&docs);

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].id(), "first");
    match &outcomes[1] {
        DocumentOutcome::Failed(f) => assert_eq!(f.kind, FailureKind::DegenerateInput),
        other => panic!("expected failure, got {other:?}"),
    }
    match &outcomes[2] {
        DocumentOutcome::Scored(receipt) => {
            assert_eq!(receipt.metrics.negative_score, 1);
            assert_eq!(receipt.content_hash, prosemd_core::content_hash("We hate it."));
        }
        other => panic!("expected receipt, got {other:?}"),
    }
}

#[test]
fn given_scored_record_when_fields_listed_then_schema_order_is_fixed() {
    let r = scorer().score("Good.").unwrap();
    let keys: Vec<&str> = r.fields().iter().map(|(f, _)| f.key()).collect();
    assert_eq!(keys.len(), 13);
    assert_eq!(keys[0], "positive_score");
    assert_eq!(keys[12], "avg_word_length");
    assert_eq!(r.get(MetricField::WordCount), MetricValue::Count(1));
}

// ---------------------------------------------------------------------------
// Scenario: outcomes serialize as tagged receipts
// ---------------------------------------------------------------------------

#[test]
fn given_blank_document_when_outcome_serialized_then_failure_is_tagged() {
    let outcome = scorer().score_document("empty", "");
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "status": "failed",
      "id": "empty",
      "kind": "degenerate_input",
      "message": "text contains no words"
    }
    "#);
}

#[test]
fn given_scored_document_when_outcome_serialized_then_metrics_are_nested() {
    let outcome = scorer().score_document("doc", "I love this. We love that.");
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["status"], "scored");
    assert_eq!(value["id"], "doc");
    assert_eq!(value["sentence_count"], 2);
    assert_eq!(value["metrics"]["word_count"], 6);
    assert_eq!(value["content_hash"].as_str().map(str::len), Some(64));
}

#[test]
fn given_facade_crate_when_inspected_then_unsafe_code_is_forbidden() {
    let source = include_str!("../src/lib.rs");
    assert!(source.contains("#![forbid(unsafe_code)]"));
}
