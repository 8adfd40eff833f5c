//! Lenient parsing of remote model replies.
//!
//! Models wrap JSON in prose or code fences, send numbers as strings and
//! forget keys. Whatever can be recovered is kept; the rest is filled from a
//! fallback record by the caller.

use kudos_core::analysis::clamp_score;
use kudos_core::{AnalysisRecord, Language, MediaAnalysis};
use serde_json::{Map, Value};

/// Fields recovered from a story-analysis reply. `None` means "not usable".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteAnalysis {
    pub emotion_level: Option<String>,
    pub emotion_intensity: Option<u8>,
    pub confidence_level: Option<u8>,
    pub story_intent: Option<String>,
    pub writing_style: Option<String>,
    pub language_preference: Option<Language>,
    pub personality_traits: Option<Vec<String>>,
    pub tone: Option<String>,
    pub key_themes: Option<Vec<String>>,
    pub narrative_perspective: Option<String>,
    pub temporal_context: Option<String>,
    pub cultural_context: Option<String>,
}

impl RemoteAnalysis {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge over `fallback` and re-establish the record invariants.
    pub fn into_record(self, fallback: AnalysisRecord) -> AnalysisRecord {
        let mut record = AnalysisRecord {
            emotion_level: self.emotion_level.unwrap_or(fallback.emotion_level),
            emotion_intensity: self.emotion_intensity.unwrap_or(fallback.emotion_intensity),
            confidence_level: self.confidence_level.unwrap_or(fallback.confidence_level),
            story_intent: self.story_intent.unwrap_or(fallback.story_intent),
            writing_style: self.writing_style.unwrap_or(fallback.writing_style),
            language_preference: self
                .language_preference
                .unwrap_or(fallback.language_preference),
            personality_traits: self
                .personality_traits
                .unwrap_or(fallback.personality_traits),
            tone: self.tone.unwrap_or(fallback.tone),
            key_themes: self.key_themes.unwrap_or(fallback.key_themes),
            narrative_perspective: self
                .narrative_perspective
                .unwrap_or(fallback.narrative_perspective),
            temporal_context: self.temporal_context.unwrap_or(fallback.temporal_context),
            cultural_context: self.cultural_context.unwrap_or(fallback.cultural_context),
        };
        record.normalize();
        record
    }
}

/// Locate a JSON object in `text`: the whole text, or the span between the
/// first `{` and the last `}`.
pub fn find_json_object(text: &str) -> Option<Map<String, Value>> {
    let trimmed = text.trim();

    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(trimmed) {
        return Some(obj);
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    match serde_json::from_str::<Value>(&trimmed[start..=end]) {
        Ok(Value::Object(obj)) => Some(obj),
        _ => None,
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn score_field(obj: &Map<String, Value>, key: &str) -> Option<u8> {
    let raw = match obj.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    raw.is_finite().then(|| clamp_score(raw))
}

fn list_field(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let items: Vec<String> = match obj.get(key)? {
        Value::Array(values) => values
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        _ => return None,
    };
    (!items.is_empty()).then_some(items)
}

/// Parse a story-analysis reply. `None` when no recognisable field exists.
pub fn parse_story_reply(text: &str) -> Option<RemoteAnalysis> {
    let obj = find_json_object(text)?;

    let parsed = RemoteAnalysis {
        emotion_level: text_field(&obj, "emotionLevel").map(|s| s.to_lowercase()),
        emotion_intensity: score_field(&obj, "emotionIntensity"),
        confidence_level: score_field(&obj, "confidenceLevel"),
        story_intent: text_field(&obj, "storyIntent"),
        writing_style: text_field(&obj, "writingStyle"),
        language_preference: text_field(&obj, "languagePreference")
            .and_then(|s| s.parse().ok()),
        personality_traits: list_field(&obj, "personalityTraits"),
        tone: text_field(&obj, "tone"),
        key_themes: list_field(&obj, "keyThemes"),
        narrative_perspective: text_field(&obj, "narrativePerspective"),
        temporal_context: text_field(&obj, "temporalContext"),
        cultural_context: text_field(&obj, "culturalContext"),
    };

    if parsed.is_empty() {
        tracing::debug!("Story reply had no recognisable fields: {}", text.trim());
        return None;
    }
    Some(parsed)
}

/// Parse a media-analysis reply field by field. Missing or mistyped fields
/// stay `"unknown"`; an unparseable reply becomes an all-unknown record whose
/// `subjects` carries the raw text.
pub fn parse_media_reply(text: &str, mime_type: &str) -> MediaAnalysis {
    let Some(obj) = find_json_object(text) else {
        tracing::debug!("Media reply was not JSON, keeping raw description");
        return MediaAnalysis {
            subjects: text.trim().to_string(),
            ..MediaAnalysis::unknown(mime_type)
        };
    };

    let unknown = MediaAnalysis::unknown(mime_type);
    let text_or = |key: &str, default: String| text_field(&obj, key).unwrap_or(default);
    MediaAnalysis {
        subjects: text_or("subjects", unknown.subjects),
        gender: text_or("gender", unknown.gender),
        people_count: text_or("peopleCount", unknown.people_count),
        setting: text_or("setting", unknown.setting),
        activities: text_or("activities", unknown.activities),
        mood: text_or("mood", unknown.mood),
        elements: text_or("elements", unknown.elements),
        time_of_day: text_or("timeOfDay", unknown.time_of_day),
        cultural_context: text_or("culturalContext", unknown.cultural_context),
        quality: text_or("quality", unknown.quality),
        colors: list_field(&obj, "colors").unwrap_or(unknown.colors),
        expressions: text_or("expressions", unknown.expressions),
        objects: list_field(&obj, "objects").unwrap_or(unknown.objects),
        weather: text_or("weather", unknown.weather),
        media_type: unknown.media_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kudos_core::{analyze_heuristically, MediaContext};

    #[test]
    fn test_parse_clean_json() {
        let json = r#"{"emotionLevel": "Proud", "emotionIntensity": 8, "confidenceLevel": 9,
            "storyIntent": "achievement", "personalityTraits": ["driven", "resilient"],
            "keyThemes": ["growth"], "languagePreference": "english"}"#;
        let parsed = parse_story_reply(json).unwrap();
        assert_eq!(parsed.emotion_level.as_deref(), Some("proud"));
        assert_eq!(parsed.emotion_intensity, Some(8));
        assert_eq!(parsed.confidence_level, Some(9));
        assert_eq!(parsed.language_preference, Some(Language::English));
        assert_eq!(
            parsed.personality_traits,
            Some(vec!["driven".to_string(), "resilient".to_string()])
        );
        assert!(parsed.tone.is_none());
    }

    #[test]
    fn test_parse_code_block_wrapped() {
        let text = "Here you go:\n```json\n{\"emotionLevel\": \"sad\", \"tone\": \"melancholic\"}\n```";
        let parsed = parse_story_reply(text).unwrap();
        assert_eq!(parsed.emotion_level.as_deref(), Some("sad"));
        assert_eq!(parsed.tone.as_deref(), Some("melancholic"));
    }

    #[test]
    fn test_scores_as_strings_and_out_of_range() {
        let parsed =
            parse_story_reply(r#"{"emotionIntensity": "7.6", "confidenceLevel": 42}"#).unwrap();
        assert_eq!(parsed.emotion_intensity, Some(8));
        assert_eq!(parsed.confidence_level, Some(10));

        let parsed = parse_story_reply(r#"{"emotionIntensity": -2, "tone": "x"}"#).unwrap();
        assert_eq!(parsed.emotion_intensity, Some(1));
    }

    #[test]
    fn test_comma_separated_traits() {
        let parsed = parse_story_reply(r#"{"personalityTraits": "kind, brave ,"}"#).unwrap();
        assert_eq!(
            parsed.personality_traits,
            Some(vec!["kind".to_string(), "brave".to_string()])
        );
    }

    #[test]
    fn test_garbage_is_none() {
        assert!(parse_story_reply("I don't know how to answer that").is_none());
        assert!(parse_story_reply("{\"unrelated\": true}").is_none());
        assert!(parse_story_reply("} backwards {").is_none());
        assert!(parse_story_reply("").is_none());
    }

    #[test]
    fn test_into_record_fills_from_fallback() {
        let story = "Today I finished my first marathon!";
        let fallback = analyze_heuristically(story);
        let parsed = parse_story_reply(r#"{"emotionLevel": "ecstatic", "keyThemes": []}"#).unwrap();
        let record = parsed.into_record(fallback.clone());
        assert_eq!(record.emotion_level, "ecstatic");
        assert_eq!(record.story_intent, fallback.story_intent);
        assert_eq!(record.key_themes, fallback.key_themes);
        assert_eq!(record.confidence_level, fallback.confidence_level);
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let parsed =
            parse_story_reply(r#"{"languagePreference": "klingon", "tone": "warm"}"#).unwrap();
        assert!(parsed.language_preference.is_none());
    }

    #[test]
    fn test_media_reply_partial_json() {
        let media = parse_media_reply(
            "```json\n{\"gender\": \"mixed\", \"setting\": \"beach\"}\n```",
            "image/jpeg",
        );
        assert_eq!(media.gender, "mixed");
        assert_eq!(media.mood, "unknown");
        assert_eq!(media.media_type, "image/jpeg");
    }

    #[test]
    fn test_media_reply_prose_kept_as_subjects() {
        let media = parse_media_reply("A dog running on grass.", "image/png");
        assert_eq!(media.subjects, "A dog running on grass.");
        assert_eq!(media.gender, "unknown");
        assert_eq!(media.colors, vec!["unknown"]);
        assert_eq!(media.media_type, "image/png");
    }

    #[test]
    fn test_media_reply_mistyped_fields_keep_the_rest() {
        let reply = r#"{"gender": "female", "peopleCount": "individual", "setting": "beach",
            "mood": "joyful", "colors": "blue and gold", "objects": null, "quality": 7}"#;
        let media = parse_media_reply(reply, "image/jpeg");
        assert_eq!(media.gender, "female");
        assert_eq!(media.setting, "beach");
        assert_eq!(media.mood, "joyful");
        assert_eq!(media.quality, "7");
        assert_eq!(media.colors, vec!["blue and gold"]);
        assert_eq!(media.objects, vec!["unknown"]);
        assert_eq!(media.context(), MediaContext::Female);
    }
}
