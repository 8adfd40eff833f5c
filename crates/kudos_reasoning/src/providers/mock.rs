//! Mock LLM Provider: deterministic replies for local runs without API keys.

use crate::llm::{CompletionParams, LlmClient, MediaPart};
use anyhow::Result;

const STORY_REPLY: &str = r#"{
  "emotionLevel": "happy",
  "emotionIntensity": 7,
  "confidenceLevel": 7,
  "storyIntent": "reflection",
  "writingStyle": "casual",
  "personalityTraits": ["thoughtful", "genuine"],
  "tone": "encouraging",
  "keyThemes": ["life experience"],
  "narrativePerspective": "first person",
  "temporalContext": "present",
  "culturalContext": "general"
}"#;

const MEDIA_REPLY: &str = r#"{
  "subjects": "a person smiling at the camera",
  "gender": "none",
  "peopleCount": "individual",
  "setting": "outdoor",
  "mood": "joyful",
  "timeOfDay": "afternoon",
  "quality": "clear"
}"#;

#[derive(Debug, Clone)]
pub struct MockProvider {
    model: String,
}

impl MockProvider {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockProvider {
    async fn generate(
        &self,
        _prompt: &str,
        media: Option<&MediaPart>,
        _params: CompletionParams,
    ) -> Result<String> {
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        tracing::debug!("Mock {} reply (media: {})", self.model, media.is_some());
        Ok(if media.is_some() { MEDIA_REPLY } else { STORY_REPLY }.to_string())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
