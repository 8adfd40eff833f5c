//! Google Gemini provider (generateContent REST API).
//!
//! Media is sent as an `inlineData` part next to the prompt text.

use crate::llm::{CompletionParams, LlmClient, MediaPart};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Reads `GEMINI_API_KEY`; fails when it is missing or blank.
    pub fn new(model: &str, base_url: Option<&str>, timeout: Duration) -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .context("GEMINI_API_KEY is not set")?;
        let base_url = base_url
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
            model: model.to_string(),
        })
    }
}

/// Build the request body for one prompt.
fn build_payload(prompt: &str, media: Option<&MediaPart>, params: &CompletionParams) -> Value {
    let mut parts = vec![json!({ "text": prompt })];
    if let Some(m) = media {
        parts.push(json!({
            "inlineData": {
                "mimeType": m.mime_type,
                "data": m.data,
            }
        }));
    }
    json!({
        "contents": [{ "role": "user", "parts": parts }],
        "generationConfig": {
            "maxOutputTokens": params.max_tokens,
            "temperature": params.temperature,
        }
    })
}

/// Concatenate the text parts of the first candidate.
fn extract_text(resp: &Value) -> Option<String> {
    let parts = resp["candidates"][0]["content"]["parts"].as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<_>>()
        .join("");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait::async_trait]
impl LlmClient for GeminiClient {
    #[tracing::instrument(skip(self, prompt, media, params), fields(model = %self.model))]
    async fn generate(
        &self,
        prompt: &str,
        media: Option<&MediaPart>,
        params: CompletionParams,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let payload = build_payload(prompt, media, &params);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API Error ({}): {}", status, error_text);
        }

        let resp_json: Value = response
            .json()
            .await
            .context("Failed to decode Gemini response")?;
        extract_text(&resp_json).context("Gemini response contained no text")
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
