//! Keyword-based English/Hindi lexical signal extraction.
//!
//! Shared by the heuristic analyzer and anything else that wants cheap,
//! deterministic signals from raw story text. Keyword lists are static data.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Emotion signals, declared in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionSignal {
    Happy,
    Proud,
    Grateful,
    Sad,
    Stressed,
    Angry,
    Nostalgic,
    Curious,
}

impl EmotionSignal {
    /// All signals, first-declared wins ties.
    pub const ALL: [EmotionSignal; 8] = [
        EmotionSignal::Happy,
        EmotionSignal::Proud,
        EmotionSignal::Grateful,
        EmotionSignal::Sad,
        EmotionSignal::Stressed,
        EmotionSignal::Angry,
        EmotionSignal::Nostalgic,
        EmotionSignal::Curious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionSignal::Happy => "happy",
            EmotionSignal::Proud => "proud",
            EmotionSignal::Grateful => "grateful",
            EmotionSignal::Sad => "sad",
            EmotionSignal::Stressed => "stressed",
            EmotionSignal::Angry => "angry",
            EmotionSignal::Nostalgic => "nostalgic",
            EmotionSignal::Curious => "curious",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            EmotionSignal::Happy => HAPPY,
            EmotionSignal::Proud => PROUD,
            EmotionSignal::Grateful => GRATEFUL,
            EmotionSignal::Sad => SAD,
            EmotionSignal::Stressed => STRESSED,
            EmotionSignal::Angry => ANGRY,
            EmotionSignal::Nostalgic => NOSTALGIC,
            EmotionSignal::Curious => CURIOUS,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

const HAPPY: &[&str] = &[
    "happy", "joy", "excited", "great", "wonderful", "amazing", "fantastic", "awesome",
    "खुश", "आनंद", "उत्साहित", "अद्भुत", "शानदार",
    "thrilled", "delighted", "ecstatic", "cheerful", "glad",
];

const PROUD: &[&str] = &[
    "proud", "accomplished", "success", "achievement",
    "गर्व", "सफल", "उपलब्धि", "विजय", "जीत",
    "triumph", "victory", "conquered", "mastered",
];

const GRATEFUL: &[&str] = &[
    "grateful", "thankful", "blessed", "fortunate", "privileged",
    "धन्यवाद", "आभारी", "धन्य",
];

const SAD: &[&str] = &[
    "sad", "upset", "disappointed", "depressed",
    "उदास", "परेशान", "निराश", "दुखी",
    "heartbroken", "miserable", "gloomy", "melancholy",
];

const STRESSED: &[&str] = &[
    "stressed", "worried", "anxious", "tensed",
    "तनाव", "चिंतित", "बेचैन", "चिड़चिड़ापन",
    "overwhelmed", "panicked", "nervous", "frustrated",
];

const ANGRY: &[&str] = &[
    "angry", "mad", "furious", "irate", "enraged", "annoyed", "irritated",
    "गुस्सा", "क्रोध", "नाराज़",
];

const NOSTALGIC: &[&str] = &[
    "nostalgic", "memories", "memory", "childhood", "past",
    "यादें", "बचपन", "अतीत",
];

const CURIOUS: &[&str] = &[
    "curious", "wonder", "explore", "discover", "intrigued",
    "उत्सुक", "जिज्ञासु", "अन्वेषण",
];

static RE_POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(i can|able to|successfully|achieved|completed|mastered|conquered)\b").unwrap()
});
static RE_NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(i can't|unable to|failed|couldn't|struggling)\b").unwrap()
});
static RE_CERTAINTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(definitely|absolutely|certainly|undoubtedly)\b").unwrap()
});
static RE_UNCERTAINTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(maybe|perhaps|possibly|unsure)\b").unwrap());

/// Occurrence counts extracted from a story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalSignals {
    /// One count per [`EmotionSignal`], indexed in declaration order.
    emotions: [u32; 8],
    pub exclamations: u32,
    pub questions: u32,
    pub positive_markers: u32,
    pub negative_markers: u32,
    pub certainty_markers: u32,
    pub uncertainty_markers: u32,
}

impl LexicalSignals {
    pub fn count(&self, signal: EmotionSignal) -> u32 {
        self.emotions[signal.index()]
    }

    /// `(signal, count)` pairs in priority order.
    pub fn emotion_counts(&self) -> impl Iterator<Item = (EmotionSignal, u32)> + '_ {
        EmotionSignal::ALL.iter().map(move |s| (*s, self.count(*s)))
    }

    /// Highest-count signal; ties go to the first declared. `None` when every
    /// count is zero.
    pub fn dominant(&self) -> Option<(EmotionSignal, u32)> {
        let mut best: Option<(EmotionSignal, u32)> = None;
        for (signal, count) in self.emotion_counts() {
            if count > best.map_or(0, |(_, c)| c) {
                best = Some((signal, count));
            }
        }
        best
    }
}

/// Count the total non-overlapping occurrences of every keyword in `haystack`.
pub fn count_keywords(haystack: &str, keywords: &[&str]) -> u32 {
    keywords
        .iter()
        .map(|k| haystack.matches(k).count() as u32)
        .sum()
}

/// Scan a story for emotion keywords and structural markers.
///
/// Case-insensitive; an empty story yields all-zero signals.
pub fn extract_signals(story: &str) -> LexicalSignals {
    let lower = story.to_lowercase();

    let mut emotions = [0u32; 8];
    for signal in EmotionSignal::ALL {
        emotions[signal.index()] = count_keywords(&lower, signal.keywords());
    }

    LexicalSignals {
        emotions,
        exclamations: story.matches('!').count() as u32,
        questions: story.matches('?').count() as u32,
        positive_markers: RE_POSITIVE.find_iter(&lower).count() as u32,
        negative_markers: RE_NEGATIVE.find_iter(&lower).count() as u32,
        certainty_markers: RE_CERTAINTY.find_iter(&lower).count() as u32,
        uncertainty_markers: RE_UNCERTAINTY.find_iter(&lower).count() as u32,
    }
}
