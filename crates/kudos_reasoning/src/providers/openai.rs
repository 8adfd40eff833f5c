use crate::llm::{CompletionParams, LlmClient, MediaPart};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

/// OpenAI-compatible chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Reads `OPENAI_API_KEY`; the base URL falls back to `OPENAI_BASE_URL`,
    /// then the public endpoint.
    pub fn new(model: &str, base_url: Option<&str>, timeout: Duration) -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .context("OPENAI_API_KEY is not set")?;
        let base_url = base_url
            .map(str::to_string)
            .or_else(|| env::var("OPENAI_BASE_URL").ok())
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
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

fn build_payload(
    model: &str,
    prompt: &str,
    media: Option<&MediaPart>,
    params: &CompletionParams,
) -> Value {
    // Media goes in as a data URL image part; plain prompts stay a string.
    let content = match media {
        Some(m) => json!([
            { "type": "text", "text": prompt },
            {
                "type": "image_url",
                "image_url": { "url": format!("data:{};base64,{}", m.mime_type, m.data) }
            }
        ]),
        None => json!(prompt),
    };
    json!({
        "model": model,
        "messages": [{ "role": "user", "content": content }],
        "max_tokens": params.max_tokens,
        "temperature": params.temperature,
    })
}

#[async_trait::async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip(self, prompt, media, params), fields(model = %self.model))]
    async fn generate(
        &self,
        prompt: &str,
        media: Option<&MediaPart>,
        params: CompletionParams,
    ) -> Result<String> {
        let payload = build_payload(&self.model, prompt, media, &params);
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .context("Failed to send request to OpenAI")?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API Error: {}", error_text);
        }

        let resp_json: Value = response.json().await?;
        resp_json["choices"][0]["message"]["content"]
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .context("OpenAI response contained no text")
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_plain_prompt() {
        let payload = build_payload("gpt-4o-mini", "hello", None, &CompletionParams::default());
        assert_eq!(payload["model"], "gpt-4o-mini");
        assert_eq!(payload["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_payload_media_as_data_url() {
        let media = MediaPart {
            mime_type: "image/jpeg".into(),
            data: "AAAA".into(),
        };
        let payload = build_payload("m", "look", Some(&media), &CompletionParams::default());
        let content = &payload["messages"][0]["content"];
        assert_eq!(content[0]["text"], "look");
        assert_eq!(content[1]["image_url"]["url"], "data:image/jpeg;base64,AAAA");
    }
}
