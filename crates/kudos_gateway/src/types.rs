use kudos_core::{AnalysisRecord, AnalysisSource, Language, MediaAnalysis};
use kudos_expression::Category;
use serde::{Deserialize, Serialize};

pub const ANONYMOUS_USER: &str = "anonymous";

/// Media attached to a compliment request.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUpload {
    /// Base64 payload; a `data:<mime>;base64,` prefix is tolerated.
    pub data: String,
    /// MIME type, e.g. `image/jpeg`.
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl MediaUpload {
    /// The payload without any data-URL prefix.
    pub fn payload(&self) -> &str {
        let data = self.data.trim();
        match data.split_once(";base64,") {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest,
            _ => data,
        }
    }
}

/// Body of `POST /api/compliment`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplimentRequest {
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub media: Option<MediaUpload>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl ComplimentRequest {
    /// Story text, trimmed; empty when absent.
    pub fn story(&self) -> &str {
        self.story.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn user_id(&self) -> &str {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(ANONYMOUS_USER)
    }

    /// Requested language; unrecognised values are ignored.
    pub fn language(&self) -> Option<Language> {
        let raw = self.language.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse() {
            Ok(lang) => Some(lang),
            Err(e) => {
                tracing::debug!("Ignoring requested language: {}", e);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplimentResponse {
    pub analysis: AnalysisRecord,
    pub compliment: String,
    /// The bucket the compliment was drawn from.
    pub mode: Category,
    pub language: Language,
    pub source: AnalysisSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_analysis: Option<MediaAnalysis>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Upload time, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaListResponse {
    pub user_id: String,
    pub media_count: usize,
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub media_storage_size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
