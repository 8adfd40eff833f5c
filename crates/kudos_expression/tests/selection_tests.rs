//! End-to-end selection scenarios: heuristic analysis feeding the selector.

use kudos_core::{analyze_heuristically, AnalysisRecord, Language};
use kudos_expression::{Category, ComplimentBook, ComplimentSelector, Mode};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn selector() -> ComplimentSelector {
    ComplimentSelector::new(ComplimentBook::builtin().expect("built-in book"), None)
}

fn base(emotion: &str, intensity: u8, confidence: u8) -> AnalysisRecord {
    AnalysisRecord {
        emotion_level: emotion.into(),
        emotion_intensity: intensity,
        confidence_level: confidence,
        story_intent: "general".into(),
        writing_style: "casual".into(),
        language_preference: Language::English,
        personality_traits: vec!["confident".into(), "joyful".into()],
        tone: "celebratory".into(),
        key_themes: vec!["personal development".into()],
        narrative_perspective: "first person".into(),
        temporal_context: "present".into(),
        cultural_context: "general".into(),
    }
}

#[test]
fn confident_happy_story_gets_hype() {
    let s = selector();
    let a = base("happy", 8, 9);
    for seed in 0..25 {
        let c = s
            .select(&a, Mode::Auto, None, None, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        assert_eq!(c.category, Category::Hype);
    }
}

#[test]
fn sad_moderate_story_gets_soft_care() {
    let s = selector();
    let mut a = base("sad", 4, 4);
    a.personality_traits = vec!["empathetic".into(), "genuine".into()];
    let c = s
        .select(&a, Mode::Auto, None, None, &mut StdRng::seed_from_u64(3))
        .unwrap();
    assert_eq!(c.category, Category::SoftCare);
}

#[test]
fn explicit_alias_mode_is_honoured() {
    let s = selector();
    let a = base("happy", 8, 9);
    let c = s
        .select(&a, Mode::parse("soul"), None, None, &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert_eq!(c.category, Category::DeepSoul);
}

#[test]
fn heuristic_analysis_always_yields_a_rendered_compliment() {
    let s = selector();
    let stories = [
        "",
        "Today I finished my first marathon! It was challenging but I never gave up. The feeling of crossing the finish line was incredible!",
        "I feel so sad and stressed about my exams.",
        "We celebrated Diwali with the whole family, so grateful!",
        "Aaj main bahut खुश hoon, सच में exam clear ho gaya",
        "आज मैं बहुत खुश हूँ क्योंकि मैंने परीक्षा पास की",
        "I painted my first canvas and played some music for my friends.",
    ];
    let mut rng = StdRng::seed_from_u64(99);
    for story in stories {
        let analysis = analyze_heuristically(story);
        for requested in [None, Some(Language::Hindi), Some(Language::Hindlish)] {
            let c = s
                .select(&analysis, Mode::Auto, None, requested, &mut rng)
                .unwrap();
            assert!(!c.text.is_empty());
            assert!(!c.text.contains('{'), "unresolved placeholder: {}", c.text);
            if let Some(lang) = requested {
                assert_eq!(c.language, lang);
            }
        }
    }
}

#[test]
fn forced_language_overrides_request() {
    let s = ComplimentSelector::new(
        ComplimentBook::builtin().unwrap(),
        Some(Language::Hindlish),
    );
    let a = base("happy", 8, 9);
    let c = s
        .select(
            &a,
            Mode::Auto,
            None,
            Some(Language::English),
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();
    assert_eq!(c.language, Language::Hindlish);
}
