//! Description of an uploaded image or video, and the context tag derived from it.

use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "unknown";

fn unknown() -> String {
    UNKNOWN.to_string()
}

fn unknown_list() -> Vec<String> {
    vec![UNKNOWN.to_string()]
}

/// Structured description of uploaded media.
///
/// Every field defaults to `"unknown"` so a partial model reply still
/// deserializes into a complete record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAnalysis {
    #[serde(default = "unknown")]
    pub subjects: String,
    /// male | female | mixed | none
    #[serde(default = "unknown")]
    pub gender: String,
    /// individual | smallGroup | largeGroup | none
    #[serde(default = "unknown")]
    pub people_count: String,
    /// indoor | outdoor | nature | urban | beach | mountains | other
    #[serde(default = "unknown")]
    pub setting: String,
    #[serde(default = "unknown")]
    pub activities: String,
    #[serde(default = "unknown")]
    pub mood: String,
    #[serde(default = "unknown")]
    pub elements: String,
    #[serde(default = "unknown")]
    pub time_of_day: String,
    #[serde(default = "unknown")]
    pub cultural_context: String,
    #[serde(default = "unknown")]
    pub quality: String,
    #[serde(default = "unknown_list")]
    pub colors: Vec<String>,
    #[serde(default = "unknown")]
    pub expressions: String,
    #[serde(default = "unknown_list")]
    pub objects: Vec<String>,
    #[serde(default = "unknown")]
    pub weather: String,
    #[serde(default = "unknown")]
    pub media_type: String,
}

impl MediaAnalysis {
    /// A record with every field unknown.
    pub fn unknown(media_type: &str) -> Self {
        Self {
            subjects: unknown(),
            gender: unknown(),
            people_count: unknown(),
            setting: unknown(),
            activities: unknown(),
            mood: unknown(),
            elements: unknown(),
            time_of_day: unknown(),
            cultural_context: unknown(),
            quality: unknown(),
            colors: unknown_list(),
            expressions: unknown(),
            objects: unknown_list(),
            weather: unknown(),
            media_type: media_type.to_string(),
        }
    }

    /// Placeholder used when the media could not be analysed at all.
    pub fn unavailable(media_type: &str) -> Self {
        Self {
            subjects: format!("A {} shared by the user", media_type),
            activities: if media_type.contains("video") {
                "Video content".to_string()
            } else {
                "Image content".to_string()
            },
            mood: "captures a moment from their day".to_string(),
            ..Self::unknown(media_type)
        }
    }

    pub fn context(&self) -> MediaContext {
        MediaContext::derive(self)
    }
}

/// Coarse tag steering compliment selection for media uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaContext {
    Male,
    Female,
    Group,
    Nature,
    General,
}

impl MediaContext {
    /// Gender wins over head count, head count over setting.
    pub fn derive(media: &MediaAnalysis) -> Self {
        let gender = media.gender.trim().to_lowercase();
        let people = media.people_count.trim();
        let setting = media.setting.trim().to_lowercase();

        if gender == "male" {
            MediaContext::Male
        } else if gender == "female" {
            MediaContext::Female
        } else if gender == "mixed"
            || people.eq_ignore_ascii_case("group")
            || people.eq_ignore_ascii_case("smallGroup")
            || people.eq_ignore_ascii_case("largeGroup")
        {
            MediaContext::Group
        } else if matches!(setting.as_str(), "nature" | "beach" | "mountains") {
            MediaContext::Nature
        } else {
            MediaContext::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaContext::Male => "male",
            MediaContext::Female => "female",
            MediaContext::Group => "group",
            MediaContext::Nature => "nature",
            MediaContext::General => "general",
        }
    }
}
