//! Property-based tests for kudos_core.
//!
//! Uses proptest to verify invariants that must hold for ALL possible stories,
//! not just hand-picked examples.

use kudos_core::heuristic::TextStats;
use kudos_core::{analyze_heuristically, detect_language, extract_signals, EmotionSignal};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Story-like text: words drawn from the emotion vocabularies, Devanagari,
/// punctuation and arbitrary noise.
fn arb_story() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("happy".to_string()),
        Just("proud".to_string()),
        Just("sad".to_string()),
        Just("stressed".to_string()),
        Just("remember".to_string()),
        Just("finished".to_string()),
        Just("definitely".to_string()),
        Just("maybe".to_string()),
        Just("she".to_string()),
        Just("खुश".to_string()),
        Just("!".to_string()),
        Just("?".to_string()),
        Just(".".to_string()),
        "[a-zA-Z]{1,12}",
        any::<String>(),
    ];
    prop::collection::vec(word, 0..40).prop_map(|words| words.join(" "))
}

// ============================================================================
// Signal extraction
// ============================================================================

proptest! {
    /// Same input twice yields identical signals.
    #[test]
    fn extraction_is_deterministic(story in arb_story()) {
        prop_assert_eq!(extract_signals(&story), extract_signals(&story));
    }

    /// A dominant emotion exists exactly when some emotion count is positive,
    /// and no other signal beats it.
    #[test]
    fn dominant_matches_counts(story in arb_story()) {
        let signals = extract_signals(&story);
        let max = EmotionSignal::ALL.iter().map(|s| signals.count(*s)).max().unwrap_or(0);
        match signals.dominant() {
            None => prop_assert_eq!(max, 0),
            Some((_, count)) => {
                prop_assert!(count > 0);
                prop_assert_eq!(count, max);
            }
        }
    }

    /// Punctuation counts never exceed the story length.
    #[test]
    fn punctuation_counts_bounded(story in arb_story()) {
        let signals = extract_signals(&story);
        let len = story.chars().count() as u32;
        prop_assert!(signals.exclamations + signals.questions <= len);
    }
}

// ============================================================================
// Heuristic analysis
// ============================================================================

proptest! {
    /// Scores stay on the 1..=10 scale for any input.
    #[test]
    fn heuristic_scores_in_range(story in arb_story()) {
        let record = analyze_heuristically(&story);
        prop_assert!((1..=10).contains(&record.emotion_intensity),
            "intensity out of range: {}", record.emotion_intensity);
        prop_assert!((1..=10).contains(&record.confidence_level),
            "confidence out of range: {}", record.confidence_level);
    }

    /// Trait and theme lists are never empty.
    #[test]
    fn heuristic_lists_never_empty(story in arb_story()) {
        let record = analyze_heuristically(&story);
        prop_assert!(record.personality_traits.len() >= 2);
        prop_assert!(!record.key_themes.is_empty());
        prop_assert!(record.personality_traits.iter().all(|t| !t.is_empty()));
    }

    /// The heuristic record is a pure function of the story.
    #[test]
    fn heuristic_is_deterministic(story in arb_story()) {
        prop_assert_eq!(analyze_heuristically(&story), analyze_heuristically(&story));
    }

    /// The record always reports the detected language.
    #[test]
    fn heuristic_language_matches_detector(story in arb_story()) {
        prop_assert_eq!(analyze_heuristically(&story).language_preference, detect_language(&story));
    }

    #[test]
    fn vocabulary_richness_is_a_ratio(story in arb_story()) {
        let stats = TextStats::measure(&story);
        prop_assert!(stats.vocabulary_richness >= 0.0 && stats.vocabulary_richness <= 1.0,
            "richness out of range: {}", stats.vocabulary_richness);
        if stats.sentence_count == 0 {
            prop_assert_eq!(stats.avg_sentence_len, 0.0);
        }
    }
}
