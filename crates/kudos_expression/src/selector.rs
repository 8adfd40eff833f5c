//! Compliment selection: an ordered rule table over the analysis record.
//!
//! Rules are evaluated top to bottom and the first applicable one picks the
//! bucket. A template is then drawn uniformly at random from that bucket and
//! rendered.

use crate::book::ComplimentBook;
use crate::category::{Category, Mode};
use crate::error::SelectError;
use crate::template::RenderContext;
use kudos_core::{AnalysisRecord, Language, MediaAnalysis};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// A rendered compliment and how it was chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compliment {
    pub text: String,
    pub category: Category,
    pub language: Language,
}

/// What a rule does when it matches.
#[derive(Debug, Clone, Copy)]
enum Target {
    /// Always present; guaranteed by book validation.
    Bucket(Category),
    /// First bucket if present, else the second.
    OrElse(Category, Category),
    /// Only applies when the bucket exists for the language.
    IfPresent(Category),
}

#[derive(Clone, Copy)]
enum Rule {
    /// Media context tag, when a bucket exists for it.
    Media,
    /// Caller-chosen category, when a bucket exists for it.
    ExplicitMode,
    Match {
        name: &'static str,
        matches: fn(&AnalysisRecord) -> bool,
        target: Target,
    },
}

const RULES: &[Rule] = &[
    Rule::Media,
    Rule::ExplicitMode,
    Rule::Match {
        name: "romantic",
        matches: is_romantic,
        target: Target::IfPresent(Category::Lover),
    },
    Rule::Match {
        name: "reflective",
        matches: is_reflective,
        target: Target::Bucket(Category::DeepSoul),
    },
    Rule::Match {
        name: "struggling",
        matches: is_struggling,
        target: Target::Bucket(Category::SoftCare),
    },
    Rule::Match {
        name: "celebration",
        matches: is_celebration,
        target: Target::OrElse(Category::Celebration, Category::Hype),
    },
    Rule::Match {
        name: "service",
        matches: is_service,
        target: Target::OrElse(Category::Service, Category::BestFriend),
    },
    Rule::Match {
        name: "confident",
        matches: is_confident_and_positive,
        target: Target::Bucket(Category::Hype),
    },
    Rule::Match {
        name: "creative",
        matches: is_creative,
        target: Target::OrElse(Category::Creativity, Category::BestFriend),
    },
    Rule::Match {
        name: "achievement",
        matches: is_achievement,
        target: Target::OrElse(Category::Achievement, Category::Hype),
    },
    Rule::Match {
        name: "default",
        matches: always,
        target: Target::Bucket(Category::BestFriend),
    },
];

// ============================================================================
// Predicates
// ============================================================================

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles.iter().any(|n| lower.contains(n))
}

fn has_any(items: &[String], wanted: &[&str]) -> bool {
    items
        .iter()
        .any(|i| wanted.contains(&i.trim().to_lowercase().as_str()))
}

fn is_romantic(a: &AnalysisRecord) -> bool {
    contains_any(&a.emotion_level, &["love", "romantic", "pyaar", "प्यार"])
        || has_any(&a.key_themes, &["love", "romance", "relationship", "प्रेम"])
}

fn is_reflective(a: &AnalysisRecord) -> bool {
    has_any(
        &a.personality_traits,
        &["introspective", "thoughtful", "reflective"],
    ) || has_any(
        &a.key_themes,
        &["growth", "self-reflection", "self-awareness", "inner growth"],
    )
}

fn is_struggling(a: &AnalysisRecord) -> bool {
    contains_any(
        &a.emotion_level,
        &["sad", "stressed", "उदास", "तनाव", "angry", "anxious"],
    ) && a.emotion_intensity <= 7
}

fn is_celebration(a: &AnalysisRecord) -> bool {
    contains_any(&a.story_intent, &["celebration", "party", "festive"])
}

fn is_service(a: &AnalysisRecord) -> bool {
    contains_any(&a.story_intent, &["service", "help", "support", "community"])
}

fn is_confident_and_positive(a: &AnalysisRecord) -> bool {
    a.confidence_level >= 8
        && contains_any(&a.emotion_level, &["happy", "proud", "excited", "grateful"])
}

fn is_creative(a: &AnalysisRecord) -> bool {
    contains_any(
        &a.story_intent,
        &["creativity", "रच", "creative", "art", "music"],
    )
}

fn is_achievement(a: &AnalysisRecord) -> bool {
    contains_any(
        &a.story_intent,
        &["achievement", "जीत", "success", "win", "accomplish"],
    )
}

fn always(_: &AnalysisRecord) -> bool {
    true
}

// ============================================================================
// Selector
// ============================================================================

pub struct ComplimentSelector {
    book: ComplimentBook,
    force_language: Option<Language>,
}

impl ComplimentSelector {
    pub fn new(book: ComplimentBook, force_language: Option<Language>) -> Self {
        Self {
            book,
            force_language,
        }
    }

    pub fn book(&self) -> &ComplimentBook {
        &self.book
    }

    /// Forced language, else the requested one, else the record's preference.
    /// Languages without templates fall back to english.
    pub fn resolve_language(
        &self,
        requested: Option<Language>,
        analysis: &AnalysisRecord,
    ) -> Language {
        let wanted = self
            .force_language
            .or(requested)
            .unwrap_or(analysis.language_preference);
        if self.book.has_language(wanted) {
            wanted
        } else {
            tracing::debug!("No templates for {}, using english", wanted);
            Language::English
        }
    }

    /// Walk the rule table and return the bucket to draw from.
    pub fn choose_category(
        &self,
        analysis: &AnalysisRecord,
        mode: Mode,
        media: Option<&MediaAnalysis>,
        language: Language,
    ) -> Result<Category, SelectError> {
        let present = |c: Category| self.book.has_bucket(language, c);

        for rule in RULES {
            let chosen = match *rule {
                Rule::Media => media
                    .and_then(|m| Category::for_media(m.context()))
                    .filter(|c| present(*c)),
                Rule::ExplicitMode => match mode {
                    Mode::Explicit(c) if present(c) => Some(c),
                    _ => None,
                },
                Rule::Match {
                    name,
                    matches,
                    target,
                } => {
                    if !matches(analysis) {
                        continue;
                    }
                    let category = match target {
                        Target::Bucket(c) => Some(c),
                        Target::OrElse(c, fallback) => Some(if present(c) { c } else { fallback }),
                        Target::IfPresent(c) => present(c).then_some(c),
                    };
                    if category.is_some() {
                        tracing::debug!("Rule '{}' matched", name);
                    }
                    category
                }
            };

            if let Some(category) = chosen {
                if !present(category) {
                    return Err(SelectError::NoTemplates { language, category });
                }
                return Ok(category);
            }
        }

        Err(SelectError::NoTemplates {
            language,
            category: Category::BestFriend,
        })
    }

    /// Choose a bucket, draw a template from it and render it.
    pub fn select<R: Rng + ?Sized>(
        &self,
        analysis: &AnalysisRecord,
        mode: Mode,
        media: Option<&MediaAnalysis>,
        requested_language: Option<Language>,
        rng: &mut R,
    ) -> Result<Compliment, SelectError> {
        let language = self.resolve_language(requested_language, analysis);
        let category = self.choose_category(analysis, mode, media, language)?;
        let template = self
            .book
            .bucket(language, category)
            .and_then(|bucket| bucket.choose(rng))
            .ok_or(SelectError::NoTemplates { language, category })?;

        let text = template.render(&RenderContext { analysis, media });
        tracing::debug!("Selected {}/{} compliment", language, category);
        Ok(Compliment {
            text,
            category,
            language,
        })
    }
}
