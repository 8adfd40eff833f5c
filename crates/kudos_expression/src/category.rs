use kudos_core::MediaContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A bucket of compliment templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Hype,
    SoftCare,
    BestFriend,
    DeepSoul,
    Creativity,
    Achievement,
    Celebration,
    Service,
    Lover,
    Male,
    Female,
    Group,
    Nature,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Hype,
        Category::SoftCare,
        Category::BestFriend,
        Category::DeepSoul,
        Category::Creativity,
        Category::Achievement,
        Category::Celebration,
        Category::Service,
        Category::Lover,
        Category::Male,
        Category::Female,
        Category::Group,
        Category::Nature,
    ];

    /// Buckets every language must provide: each is the last resort of some rule.
    pub const REQUIRED: [Category; 4] = [
        Category::Hype,
        Category::SoftCare,
        Category::BestFriend,
        Category::DeepSoul,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hype => "hype",
            Category::SoftCare => "softCare",
            Category::BestFriend => "bestFriend",
            Category::DeepSoul => "deepSoul",
            Category::Creativity => "creativity",
            Category::Achievement => "achievement",
            Category::Celebration => "celebration",
            Category::Service => "service",
            Category::Lover => "lover",
            Category::Male => "male",
            Category::Female => "female",
            Category::Group => "group",
            Category::Nature => "nature",
        }
    }

    /// Bucket for a media context tag. `general` has none.
    pub fn for_media(context: MediaContext) -> Option<Category> {
        match context {
            MediaContext::Male => Some(Category::Male),
            MediaContext::Female => Some(Category::Female),
            MediaContext::Group => Some(Category::Group),
            MediaContext::Nature => Some(Category::Nature),
            MediaContext::General => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive, with the short aliases used by the web front end.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let found = match lower.as_str() {
            "care" => Some(Category::SoftCare),
            "friend" => Some(Category::BestFriend),
            "soul" => Some(Category::DeepSoul),
            other => Category::ALL
                .into_iter()
                .find(|c| c.as_str().to_lowercase() == other),
        };
        found.ok_or_else(|| format!("unknown category: '{}'", s.trim()))
    }
}

/// What the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Let the rule chain decide.
    #[default]
    Auto,
    Explicit(Category),
}

impl Mode {
    /// `auto`, `default`, blank and unrecognised strings all mean [`Mode::Auto`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("auto")
            || trimmed.eq_ignore_ascii_case("default")
        {
            return Mode::Auto;
        }
        match trimmed.parse::<Category>() {
            Ok(category) => Mode::Explicit(category),
            Err(e) => {
                tracing::debug!("{}; treating mode as auto", e);
                Mode::Auto
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::Explicit(category) => category.as_str(),
        }
    }
}
