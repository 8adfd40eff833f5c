//! Compliment templates with `{field}` / `{field|fallback}` placeholders.
//!
//! Templates are parsed once when the book is built, so rendering cannot fail
//! and never leaves a placeholder behind.

use crate::error::TemplateError;
use kudos_core::{AnalysisRecord, MediaAnalysis};

/// A value a placeholder can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Intent,
    Emotion,
    Style,
    Confidence,
    Intensity,
    /// First personality trait.
    Trait,
    Tone,
    /// First key theme.
    Theme,
    Mood,
    Quality,
    TimeOfDay,
    Setting,
}

impl Field {
    fn from_name(name: &str) -> Option<Field> {
        Some(match name {
            "intent" => Field::Intent,
            "emotion" => Field::Emotion,
            "style" => Field::Style,
            "confidence" => Field::Confidence,
            "intensity" => Field::Intensity,
            "trait" => Field::Trait,
            "tone" => Field::Tone,
            "theme" => Field::Theme,
            "mood" => Field::Mood,
            "quality" => Field::Quality,
            "timeOfDay" => Field::TimeOfDay,
            "setting" => Field::Setting,
            _ => return None,
        })
    }

    /// Media fields may be missing at render time.
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            Field::Mood | Field::Quality | Field::TimeOfDay | Field::Setting
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Placeholder {
        field: Field,
        fallback: Option<String>,
    },
}

/// Values a template is rendered against.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub analysis: &'a AnalysisRecord,
    pub media: Option<&'a MediaAnalysis>,
}

impl RenderContext<'_> {
    fn value(&self, field: Field) -> Option<String> {
        let a = self.analysis;
        let raw = match field {
            Field::Intent => a.story_intent.clone(),
            Field::Emotion => a.emotion_level.clone(),
            Field::Style => a.writing_style.clone(),
            Field::Confidence => a.confidence_level.to_string(),
            Field::Intensity => a.emotion_intensity.to_string(),
            Field::Trait => a.primary_trait().to_string(),
            Field::Tone => a.tone.clone(),
            Field::Theme => a.primary_theme().to_string(),
            Field::Mood => self.media?.mood.clone(),
            Field::Quality => self.media?.quality.clone(),
            Field::TimeOfDay => self.media?.time_of_day.clone(),
            Field::Setting => self.media?.setting.clone(),
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || (field.is_media() && trimmed.eq_ignore_ascii_case("unknown")) {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| TemplateError::UnterminatedPlaceholder(source.to_string()))?;
            let inner = &after[..close];
            if inner.contains('{') {
                return Err(TemplateError::UnterminatedPlaceholder(source.to_string()));
            }

            let (name, fallback) = match inner.split_once('|') {
                Some((n, f)) => (n.trim(), Some(f.to_string())),
                None => (inner.trim(), None),
            };
            let field = Field::from_name(name).ok_or_else(|| TemplateError::UnknownField {
                field: name.to_string(),
                template: source.to_string(),
            })?;
            if field.is_media() && fallback.is_none() {
                return Err(TemplateError::MediaFieldWithoutFallback(name.to_string()));
            }
            segments.push(Segment::Placeholder { field, fallback });
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = String::with_capacity(self.source.len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder { field, fallback } => {
                    if let Some(value) = ctx.value(*field) {
                        out.push_str(&value);
                    } else if let Some(fb) = fallback {
                        out.push_str(fb);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kudos_core::analyze_heuristically;

    fn analysis() -> AnalysisRecord {
        analyze_heuristically("Today I finished my first marathon! I am so proud!")
    }

    #[test]
    fn test_render_analysis_fields() {
        let a = analysis();
        let t = Template::parse("Your {intent} story, {confidence}/10, {trait|kind}.").unwrap();
        let ctx = RenderContext {
            analysis: &a,
            media: None,
        };
        let text = t.render(&ctx);
        assert_eq!(
            text,
            format!(
                "Your {} story, {}/10, {}.",
                a.story_intent,
                a.confidence_level,
                a.primary_trait()
            )
        );
    }

    #[test]
    fn test_media_fallbacks() {
        let a = analysis();
        let t = Template::parse("A {mood|radiant} look in {timeOfDay|soft} light").unwrap();

        let none = RenderContext {
            analysis: &a,
            media: None,
        };
        assert_eq!(t.render(&none), "A radiant look in soft light");

        let mut media = MediaAnalysis::unknown("image/jpeg");
        media.mood = "serene".into();
        let some = RenderContext {
            analysis: &a,
            media: Some(&media),
        };
        assert_eq!(t.render(&some), "A serene look in soft light");
    }

    #[test]
    fn test_text_only_and_edges() {
        let a = analysis();
        let ctx = RenderContext {
            analysis: &a,
            media: None,
        };
        assert_eq!(Template::parse("plain").unwrap().render(&ctx), "plain");
        assert_eq!(Template::parse("").unwrap().render(&ctx), "");
        let t = Template::parse("{emotion}").unwrap();
        assert_eq!(t.render(&ctx), a.emotion_level);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Template::parse("oops {intent"),
            Err(TemplateError::UnterminatedPlaceholder(_))
        ));
        assert!(matches!(
            Template::parse("{a{intent}}"),
            Err(TemplateError::UnterminatedPlaceholder(_))
        ));
        assert!(matches!(
            Template::parse("hi {name}"),
            Err(TemplateError::UnknownField { .. })
        ));
        assert_eq!(
            Template::parse("{mood}"),
            Err(TemplateError::MediaFieldWithoutFallback("mood".into()))
        );
    }
}
