use crate::category::Category;
use kudos_core::Language;
use thiserror::Error;

/// Configuration errors in the compliment book. Fatal at start-up.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    #[error("unterminated placeholder in template: {0}")]
    UnterminatedPlaceholder(String),

    #[error("unknown placeholder field '{field}' in template: {template}")]
    UnknownField { field: String, template: String },

    #[error("media field '{0}' must declare a fallback value")]
    MediaFieldWithoutFallback(String),

    #[error("no english template set")]
    MissingEnglish,

    #[error("{language} has no '{category}' templates")]
    MissingBucket {
        language: Language,
        category: Category,
    },

    #[error("{language}/{category} bucket is empty")]
    EmptyBucket {
        language: Language,
        category: Category,
    },

    #[error("unknown language '{0}' in template overrides")]
    UnknownLanguage(String),

    #[error("unknown category '{0}' in template overrides")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    #[error("no templates for {language}/{category}")]
    NoTemplates {
        language: Language,
        category: Category,
    },
}
