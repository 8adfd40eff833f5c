use anyhow::Result;
use async_trait::async_trait;

/// Parameters for a single completion request.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    /// Maximum tokens to generate (will be clamped to provider limits)
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.4,
        }
    }
}

/// Inline media attached to a prompt.
#[derive(Debug, Clone)]
pub struct MediaPart {
    pub mime_type: String,
    /// Base64 payload, without any `data:` prefix.
    pub data: String,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one prompt (optionally with inline media) and return the reply text.
    async fn generate(
        &self,
        prompt: &str,
        media: Option<&MediaPart>,
        params: CompletionParams,
    ) -> Result<String>;

    /// Short name for logs.
    fn name(&self) -> &str;
}
