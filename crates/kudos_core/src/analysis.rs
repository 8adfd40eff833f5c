//! The analysis record: what we believe a story says about its author.
//!
//! Every source (remote model reply or local heuristics) has to produce a fully
//! populated [`AnalysisRecord`]; consumers never see a partial one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait tags injected when no rule produced any.
pub const DEFAULT_TRAITS: [&str; 2] = ["balanced", "thoughtful"];
/// Trait appended when exactly one rule fired.
pub const FILLER_TRAIT: &str = "genuine";
/// Theme injected when no rule produced any.
pub const DEFAULT_THEME: &str = "life experience";

/// Language style a compliment is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    /// Romanised Hindi mixed with English.
    Hindlish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Hindlish];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Hindlish => "hindlish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            "hindlish" | "hinglish" => Ok(Language::Hindlish),
            other => Err(format!("unknown language: '{}'", other)),
        }
    }
}

/// Where an [`AnalysisRecord`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Remote,
    Heuristic,
}

/// Structured summary of the emotional and contextual attributes of a story.
///
/// Invariants:
/// - `emotion_intensity` and `confidence_level` are in `[1, 10]`
/// - `personality_traits` and `key_themes` are never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub emotion_level: String,
    pub emotion_intensity: u8,
    pub confidence_level: u8,
    pub story_intent: String,
    pub writing_style: String,
    pub language_preference: Language,
    /// Order matters: the first trait is the one interpolated into compliments.
    pub personality_traits: Vec<String>,
    pub tone: String,
    pub key_themes: Vec<String>,
    pub narrative_perspective: String,
    pub temporal_context: String,
    pub cultural_context: String,
}

impl AnalysisRecord {
    /// First personality trait. Never empty for a record built by this crate.
    pub fn primary_trait(&self) -> &str {
        self.personality_traits
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_TRAITS[1])
    }

    /// First key theme.
    pub fn primary_theme(&self) -> &str {
        self.key_themes
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_THEME)
    }

    /// Re-establish the record invariants after fields were filled from an
    /// untrusted source.
    pub fn normalize(&mut self) {
        self.emotion_intensity = self.emotion_intensity.clamp(1, 10);
        self.confidence_level = self.confidence_level.clamp(1, 10);
        self.personality_traits.retain(|t| !t.trim().is_empty());
        self.key_themes.retain(|t| !t.trim().is_empty());
        match self.personality_traits.len() {
            0 => self
                .personality_traits
                .extend(DEFAULT_TRAITS.iter().map(|t| t.to_string())),
            1 => self.personality_traits.push(FILLER_TRAIT.to_string()),
            _ => {}
        }
        if self.key_themes.is_empty() {
            self.key_themes.push(DEFAULT_THEME.to_string());
        }
    }
}

/// Clamp an arbitrary score into the `[1, 10]` scale used by the record.
pub fn clamp_score(value: f64) -> u8 {
    if !value.is_finite() {
        return 5;
    }
    value.round().clamp(1.0, 10.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AnalysisRecord {
        AnalysisRecord {
            emotion_level: "happy".into(),
            emotion_intensity: 7,
            confidence_level: 8,
            story_intent: "achievement".into(),
            writing_style: "casual".into(),
            language_preference: Language::English,
            personality_traits: vec!["confident".into(), "ambitious".into()],
            tone: "celebratory".into(),
            key_themes: vec!["personal development".into()],
            narrative_perspective: "first person".into(),
            temporal_context: "present".into(),
            cultural_context: "general".into(),
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["emotionLevel"], "happy");
        assert_eq!(json["confidenceLevel"], 8);
        assert_eq!(json["languagePreference"], "english");
        assert_eq!(json["keyThemes"][0], "personal development");
    }

    #[test]
    fn test_language_parse_is_lenient() {
        assert_eq!("Hinglish".parse::<Language>().unwrap(), Language::Hindlish);
        assert_eq!(" HINDI ".parse::<Language>().unwrap(), Language::Hindi);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_normalize_fills_empty_lists() {
        let mut r = record();
        r.personality_traits = vec!["  ".into()];
        r.key_themes.clear();
        r.emotion_intensity = 0;
        r.confidence_level = 42;
        r.normalize();
        assert_eq!(r.personality_traits, vec!["balanced", "thoughtful"]);
        assert_eq!(r.key_themes, vec!["life experience"]);
        assert_eq!(r.emotion_intensity, 1);
        assert_eq!(r.confidence_level, 10);
    }

    #[test]
    fn test_normalize_pads_single_trait() {
        let mut r = record();
        r.personality_traits = vec!["curious".into()];
        r.normalize();
        assert_eq!(r.personality_traits, vec!["curious", "genuine"]);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(7.5), 8);
        assert_eq!(clamp_score(-3.0), 1);
        assert_eq!(clamp_score(11.2), 10);
        assert_eq!(clamp_score(f64::NAN), 5);
    }
}
