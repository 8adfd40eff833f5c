//! The compliment book: parsed template buckets per (language, category).

use crate::category::Category;
use crate::error::TemplateError;
use crate::template::Template;
use crate::templates::{self, Table};
use anyhow::{Context, Result};
use kudos_core::Language;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Raw override file layout: `[language] category = ["template", ...]`.
type RawOverrides = HashMap<String, HashMap<String, Vec<String>>>;

#[derive(Debug, Clone)]
pub struct ComplimentBook {
    buckets: BTreeMap<Language, BTreeMap<Category, Vec<Template>>>,
}

impl ComplimentBook {
    /// The built-in tables, parsed and validated.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut book = Self {
            buckets: BTreeMap::new(),
        };
        for (language, table) in [
            (Language::English, templates::ENGLISH),
            (Language::Hindi, templates::HINDI),
            (Language::Hindlish, templates::HINDLISH),
        ] {
            book.insert_table(language, table)?;
        }
        book.validate()?;
        Ok(book)
    }

    /// Build from arbitrary tables (used for overrides and tests).
    pub fn from_tables(
        tables: BTreeMap<Language, BTreeMap<Category, Vec<String>>>,
    ) -> Result<Self, TemplateError> {
        let mut book = Self {
            buckets: BTreeMap::new(),
        };
        for (language, categories) in tables {
            for (category, sources) in categories {
                book.replace_bucket(language, category, sources.as_slice())?;
            }
        }
        book.validate()?;
        Ok(book)
    }

    /// Built-in book, with buckets from `overrides` replacing the built-in ones
    /// per (language, category).
    pub fn load(overrides: Option<&Path>) -> Result<Self> {
        let mut book = Self::builtin().context("Built-in compliment templates are invalid")?;
        let Some(path) = overrides else {
            return Ok(book);
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read templates file: {}", path.display()))?;
        let raw: RawOverrides =
            toml::from_str(&content).with_context(|| "Failed to parse templates TOML")?;
        let replaced = book.apply_overrides(raw)?;
        book.validate()?;
        tracing::info!(
            "Loaded {} template buckets from {}",
            replaced,
            path.display()
        );
        Ok(book)
    }

    fn apply_overrides(&mut self, raw: RawOverrides) -> Result<usize, TemplateError> {
        let mut replaced = 0;
        for (lang_name, categories) in raw {
            let language: Language = lang_name
                .parse()
                .map_err(|_| TemplateError::UnknownLanguage(lang_name.clone()))?;
            for (cat_name, sources) in categories {
                let category: Category = cat_name
                    .parse()
                    .map_err(|_| TemplateError::UnknownCategory(cat_name.clone()))?;
                self.replace_bucket(language, category, sources.as_slice())?;
                replaced += 1;
            }
        }
        Ok(replaced)
    }

    fn insert_table(&mut self, language: Language, table: Table) -> Result<(), TemplateError> {
        for (category, sources) in table {
            self.replace_bucket(language, *category, *sources)?;
        }
        Ok(())
    }

    fn replace_bucket<S: AsRef<str>>(
        &mut self,
        language: Language,
        category: Category,
        sources: &[S],
    ) -> Result<(), TemplateError> {
        let parsed = sources
            .iter()
            .map(|s| Template::parse(s.as_ref().trim()))
            .collect::<Result<Vec<_>, _>>()?;
        self.buckets
            .entry(language)
            .or_default()
            .insert(category, parsed);
        Ok(())
    }

    /// Every language has the required buckets, english exists, and no
    /// bucket is empty.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if !self.buckets.contains_key(&Language::English) {
            return Err(TemplateError::MissingEnglish);
        }
        for (language, categories) in &self.buckets {
            for category in Category::REQUIRED {
                if !categories.contains_key(&category) {
                    return Err(TemplateError::MissingBucket {
                        language: *language,
                        category,
                    });
                }
            }
            for (category, bucket) in categories {
                if bucket.is_empty() {
                    return Err(TemplateError::EmptyBucket {
                        language: *language,
                        category: *category,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.buckets.contains_key(&language)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.buckets.keys().copied()
    }

    pub fn bucket(&self, language: Language, category: Category) -> Option<&[Template]> {
        self.buckets
            .get(&language)?
            .get(&category)
            .map(Vec::as_slice)
            .filter(|b| !b.is_empty())
    }

    pub fn has_bucket(&self, language: Language, category: Category) -> bool {
        self.bucket(language, category).is_some()
    }

    pub fn template_count(&self) -> usize {
        self.buckets
            .values()
            .flat_map(|c| c.values())
            .map(Vec::len)
            .sum()
    }
}
