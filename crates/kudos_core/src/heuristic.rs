//! Local story analysis used when the remote model is unavailable.
//!
//! Every step is an ordered rule list over the lower-cased story and the
//! [`LexicalSignals`] extracted from it. The analyzer is total: any string,
//! including the empty one, produces a complete [`AnalysisRecord`].

use crate::analysis::{AnalysisRecord, DEFAULT_THEME, DEFAULT_TRAITS, FILLER_TRAIT};
use crate::language::detect_language;
use crate::signals::{extract_signals, EmotionSignal, LexicalSignals};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

const NEUTRAL_INTENSITY: u8 = 5;
const BASE_CONFIDENCE: f64 = 5.0;

/// Story intents, checked in this order; the first keyword set present wins.
const INTENT_RULES: &[(&str, &[&str])] = &[
    (
        "achievement",
        &[
            "achieve", "finish", "complete", "win", "प्राप्त", "समाप्त", "जीत", "succeed",
            "accomplish", "reach", "master", "conquer", "triumph",
        ],
    ),
    (
        "self-growth",
        &[
            "learn", "grow", "improve", "सीख", "विकसित", "बेहतर", "develop", "understand",
            "realize", "study", "practice", "skill",
        ],
    ),
    (
        "creativity",
        &[
            "create", "make", "build", "रच", "बना", "निर्माण", "design", "compose", "write",
            "art", "paint", "draw", "music", "sing", "dance",
        ],
    ),
    (
        "pain",
        &[
            "pain", "hurt", "struggle", "दर्द", "चोट", "संघर्ष", "fight", "battle",
            "challenge", "difficult", "hard", "tough",
        ],
    ),
    (
        "reflection",
        &[
            "think", "reflect", "contemplate", "ponder", "meditate", "soch", "विचार", "चिंतन",
            "wonder", "question", "philosophy",
        ],
    ),
    (
        "celebration",
        &["celebrate", "party", "festive", "birthday", "anniversary", "milestone"],
    ),
    (
        "service",
        &["help", "assist", "support", "volunteer", "kind", "generous"],
    ),
];

const DEFAULT_INTENT: &str = "general";

const HUMOR: &[&str] = &[
    "lol", "haha", "funny", "लोल", "हाहा", "मजेदार", "laugh", "humor", "joke", "hilarious",
    "comedy",
];
const DRAMA: &[&str] = &["dramatic", "intense", "passionate"];
const PAST: &[&str] = &["yesterday", "last week", "ago", "before", "earlier"];
const FUTURE: &[&str] = &["tomorrow", "next week", "future", "soon", "later"];
const HELPING: &[&str] = &["help", "support"];

const CULTURE_RULES: &[(&str, &[&str])] = &[
    (
        "Indian festivals",
        &["diwali", "holi", "eid", "navratri", "dussehra"],
    ),
    (
        "Western holidays",
        &["christmas", "thanksgiving", "halloween"],
    ),
    (
        "East Asian celebrations",
        &["lunar new year", "chinese new year"],
    ),
];

static RE_THIRD_PERSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(he|she|they|him|her|them)\b").unwrap());
static RE_SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Surface statistics used by the style and trait rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStats {
    pub sentence_count: usize,
    /// Story characters per sentence; 0 when there are no sentences.
    pub avg_sentence_len: f64,
    /// Unique normalised words / total words; 0 when there are no words.
    pub vocabulary_richness: f64,
}

impl TextStats {
    pub fn measure(story: &str) -> Self {
        let sentence_count = RE_SENTENCE_BREAK
            .split(story)
            .filter(|s| !s.trim().is_empty())
            .count();
        let avg_sentence_len = if sentence_count > 0 {
            story.chars().count() as f64 / sentence_count as f64
        } else {
            0.0
        };

        let words: Vec<&str> = story.split_whitespace().collect();
        let unique: HashSet<String> = words.iter().map(|w| normalize_word(w)).collect();
        let vocabulary_richness = if words.is_empty() {
            0.0
        } else {
            unique.len() as f64 / words.len() as f64
        };

        Self {
            sentence_count,
            avg_sentence_len,
            vocabulary_richness,
        }
    }
}

/// Lower-case and keep only ASCII letters and Devanagari.
fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || ('\u{0900}'..='\u{097F}').contains(c))
        .collect()
}

/// Analyze a story with keyword and statistics heuristics only.
pub fn analyze_heuristically(story: &str) -> AnalysisRecord {
    let lower = story.to_lowercase();
    let signals = extract_signals(story);
    let stats = TextStats::measure(story);

    let (emotion_level, emotion_intensity) = dominant_emotion(&signals);
    let confidence_level = confidence(&signals);
    let story_intent = intent(&lower);
    let writing_style = writing_style(&lower, story, &stats);
    let temporal_context = temporal_context(&lower);
    let narrative_perspective = if RE_THIRD_PERSON.is_match(&lower) {
        "third person"
    } else {
        "first person"
    };

    let facts = Facts {
        lower: &lower,
        signals: &signals,
        stats: &stats,
        emotion: emotion_level,
        intensity: emotion_intensity,
        confidence: confidence_level,
        intent: story_intent,
        style: writing_style,
    };
    tracing::debug!(
        "Heuristic analysis: emotion={} intensity={} confidence={} intent={} style={}",
        emotion_level,
        emotion_intensity,
        confidence_level,
        story_intent,
        writing_style
    );

    AnalysisRecord {
        emotion_level: emotion_level.to_string(),
        emotion_intensity,
        confidence_level,
        story_intent: story_intent.to_string(),
        writing_style: writing_style.to_string(),
        language_preference: detect_language(story),
        personality_traits: personality_traits(&facts),
        tone: tone(&facts).to_string(),
        key_themes: key_themes(&facts),
        narrative_perspective: narrative_perspective.to_string(),
        temporal_context: temporal_context.to_string(),
        cultural_context: cultural_context(&lower).to_string(),
    }
}

/// Intermediate results the later rule lists key off.
struct Facts<'a> {
    lower: &'a str,
    signals: &'a LexicalSignals,
    stats: &'a TextStats,
    emotion: &'static str,
    intensity: u8,
    confidence: u8,
    intent: &'static str,
    style: &'static str,
}

fn dominant_emotion(signals: &LexicalSignals) -> (&'static str, u8) {
    match signals.dominant() {
        Some((signal, count)) => {
            let intensity = 3u32.saturating_add(count.saturating_mul(2)).min(10) as u8;
            (signal.as_str(), intensity)
        }
        None => ("neutral", NEUTRAL_INTENSITY),
    }
}

fn confidence(signals: &LexicalSignals) -> u8 {
    let score = BASE_CONFIDENCE + signals.exclamations as f64 * 1.5
        + signals.positive_markers as f64 * 2.0
        + signals.certainty_markers as f64 * 1.5
        - signals.negative_markers as f64 * 1.5
        - signals.questions as f64 * 0.5
        - signals.uncertainty_markers as f64;
    score.min(10.0).round().clamp(1.0, 10.0) as u8
}

fn intent(lower: &str) -> &'static str {
    INTENT_RULES
        .iter()
        .find(|(_, keywords)| contains_any(lower, keywords))
        .map(|(intent, _)| *intent)
        .unwrap_or(DEFAULT_INTENT)
}

fn writing_style(lower: &str, story: &str, stats: &TextStats) -> &'static str {
    if stats.avg_sentence_len > 50.0 && stats.vocabulary_richness > 0.6 {
        "serious"
    } else if contains_any(lower, HUMOR) {
        "funny"
    } else if (story.contains('\n') && story.contains("  ")) || stats.vocabulary_richness > 0.7 {
        "poetic"
    } else if stats.vocabulary_richness > 0.5 {
        "thoughtful"
    } else if contains_any(lower, DRAMA) {
        "dramatic"
    } else {
        "casual"
    }
}

fn temporal_context(lower: &str) -> &'static str {
    if contains_any(lower, PAST) {
        "past"
    } else if contains_any(lower, FUTURE) {
        "future"
    } else {
        "present"
    }
}

fn personality_traits(f: &Facts<'_>) -> Vec<String> {
    let inward = matches!(f.intent, "self-growth" | "reflection");
    let rules: [(bool, &str); 18] = [
        (f.confidence > 7, "confident"),
        (f.signals.certainty_markers > 2, "decisive"),
        (f.signals.positive_markers > 3, "optimistic"),
        (f.emotion == "happy" && f.intensity > 7, "joyful"),
        (f.emotion == "grateful", "grateful"),
        (f.emotion == "curious", "curious"),
        (f.emotion == "nostalgic", "reflective"),
        (inward, "introspective"),
        (f.emotion == "sad" || f.emotion == "stressed", "empathetic"),
        (f.emotion == "angry" && f.intensity > 6, "passionate"),
        (f.intent == "creativity", "creative"),
        (f.intent == "service", "compassionate"),
        (f.intent == "achievement", "ambitious"),
        (f.style == "poetic" || f.style == "serious", "thoughtful"),
        (contains_any(f.lower, HELPING), "helpful"),
        (f.stats.vocabulary_richness > 0.6, "articulate"),
        (inward, "intellectual"),
        (f.signals.count(EmotionSignal::Curious) > 1, "inquisitive"),
    ];

    let mut traits: Vec<String> = rules
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, t)| t.to_string())
        .collect();

    match traits.len() {
        0 => traits.extend(DEFAULT_TRAITS.iter().map(|t| t.to_string())),
        1 => traits.push(FILLER_TRAIT.to_string()),
        _ => {}
    }
    traits
}

fn tone(f: &Facts<'_>) -> &'static str {
    match f.emotion {
        "happy" if f.confidence > 7 => "celebratory",
        "happy" => "encouraging",
        "proud" => "proud",
        "grateful" => "thankful",
        "sad" => "melancholic",
        "stressed" => "concerned",
        "angry" => "intense",
        "nostalgic" => "reflective",
        "curious" => "inquiring",
        _ if f.style == "thoughtful" || f.style == "poetic" => "contemplative",
        _ if f.style == "funny" => "playful",
        _ if f.confidence > 8 => "confident",
        _ => "neutral",
    }
}

fn key_themes(f: &Facts<'_>) -> Vec<String> {
    let rules: [(bool, &str); 8] = [
        (
            f.intent == "achievement" || f.intent == "self-growth",
            "personal development",
        ),
        (f.intent == "creativity", "artistic expression"),
        (f.intent == "service", "community"),
        (f.intent == "pain", "resilience"),
        (f.intent == "reflection", "self-awareness"),
        (f.emotion == "grateful", "appreciation"),
        (f.emotion == "curious", "exploration"),
        (f.emotion == "nostalgic", "memory"),
    ];

    let mut themes: Vec<String> = rules
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, t)| t.to_string())
        .collect();
    if themes.is_empty() {
        themes.push(DEFAULT_THEME.to_string());
    }
    themes
}

fn cultural_context(lower: &str) -> &'static str {
    CULTURE_RULES
        .iter()
        .find(|(_, keywords)| contains_any(lower, keywords))
        .map(|(culture, _)| *culture)
        .unwrap_or("general")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Language;

    const MARATHON: &str = "Today I finished my first marathon! It was challenging but I never gave up. The feeling of crossing the finish line was incredible!";

    #[test]
    fn test_empty_story_defaults() {
        let r = analyze_heuristically("");
        assert_eq!(r.emotion_level, "neutral");
        assert_eq!(r.emotion_intensity, 5);
        assert_eq!(r.confidence_level, 5);
        assert_eq!(r.story_intent, "general");
        assert_eq!(r.writing_style, "casual");
        assert_eq!(r.personality_traits, vec!["balanced", "thoughtful"]);
        assert_eq!(r.key_themes, vec!["life experience"]);
        assert_eq!(r.tone, "neutral");
        assert_eq!(r.narrative_perspective, "first person");
        assert_eq!(r.temporal_context, "present");
        assert_eq!(r.cultural_context, "general");
        assert_eq!(r.language_preference, Language::English);
    }

    #[test]
    fn test_marathon_story() {
        let r = analyze_heuristically(MARATHON);
        assert_eq!(r.story_intent, "achievement");
        // two exclamation marks lift confidence above the neutral baseline
        assert_eq!(r.confidence_level, 8);
        assert!(r.personality_traits.contains(&"confident".to_string()));
        assert!(r.personality_traits.contains(&"ambitious".to_string()));
        assert_eq!(r.key_themes[0], "personal development");
        // "the " is not a pronoun
        assert_eq!(r.narrative_perspective, "first person");
    }

    #[test]
    fn test_dominant_emotion_intensity() {
        let r = analyze_heuristically("so happy, joyful and glad");
        // happy + joy + glad
        assert_eq!(r.emotion_level, "happy");
        assert_eq!(r.emotion_intensity, 9);

        let r = analyze_heuristically("happy happy happy happy");
        assert_eq!(r.emotion_intensity, 10);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let r = analyze_heuristically("maybe? perhaps? possibly? unsure? I failed. I couldn't.");
        assert_eq!(r.confidence_level, 1);

        let r = analyze_heuristically("Definitely!!!! Absolutely!!!!");
        assert_eq!(r.confidence_level, 10);
    }

    #[test]
    fn test_intent_priority_order() {
        // both "learn" (self-growth) and "win" (achievement) present
        assert_eq!(intent("i learned how to win"), "achievement");
        assert_eq!(intent("i learned to paint"), "self-growth");
        assert_eq!(intent("we celebrated her birthday"), "celebration");
        assert_eq!(intent("volunteered at the shelter"), "service");
        assert_eq!(intent("nothing matches"), "general");
    }

    #[test]
    fn test_writing_style_rules() {
        let repetitive = "ok ok ok ok ok ok";
        assert_eq!(
            writing_style(repetitive, repetitive, &TextStats::measure(repetitive)),
            "casual"
        );

        let funny = "lol lol lol lol";
        assert_eq!(
            writing_style(funny, funny, &TextStats::measure(funny)),
            "funny"
        );

        let verse = "roses roses\n  violets violets";
        assert_eq!(
            writing_style(verse, verse, &TextStats::measure(verse)),
            "poetic"
        );

        let drama = "so intense so intense so intense";
        assert_eq!(
            writing_style(drama, drama, &TextStats::measure(drama)),
            "dramatic"
        );
    }

    #[test]
    fn test_text_stats() {
        let stats = TextStats::measure("One. Two! Three?");
        assert_eq!(stats.sentence_count, 3);
        assert!((stats.vocabulary_richness - 1.0).abs() < f64::EPSILON);

        let stats = TextStats::measure("   ");
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.avg_sentence_len, 0.0);
        assert_eq!(stats.vocabulary_richness, 0.0);
    }

    #[test]
    fn test_temporal_past_wins_over_future() {
        assert_eq!(temporal_context("yesterday i planned for tomorrow"), "past");
        assert_eq!(temporal_context("see you tomorrow"), "future");
        assert_eq!(temporal_context("right now"), "present");
    }

    #[test]
    fn test_third_person() {
        let r = analyze_heuristically("She told them the news.");
        assert_eq!(r.narrative_perspective, "third person");
    }

    #[test]
    fn test_grateful_story() {
        let r = analyze_heuristically("I feel so grateful and blessed for my family");
        assert_eq!(r.emotion_level, "grateful");
        assert_eq!(r.tone, "thankful");
        assert!(r.personality_traits.contains(&"grateful".to_string()));
        assert!(r.key_themes.contains(&"appreciation".to_string()));
    }

    #[test]
    fn test_cultural_context() {
        let r = analyze_heuristically("We lit lamps for Diwali");
        assert_eq!(r.cultural_context, "Indian festivals");
        let r = analyze_heuristically("Christmas dinner with everyone");
        assert_eq!(r.cultural_context, "Western holidays");
    }

    #[test]
    fn test_single_trait_gets_filler() {
        // repetitive text keeps richness low so only the nostalgia rule fires
        let r = analyze_heuristically("nostalgia nostalgia nostalgia nostalgia nostalgic");
        assert_eq!(r.emotion_level, "nostalgic");
        assert_eq!(r.personality_traits, vec!["reflective", "genuine"]);
    }
}
