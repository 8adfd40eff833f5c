pub mod gemini;
pub mod mock;
pub mod openai;

use crate::llm::LlmClient;
use kudos_core::config::LlmConfig;
use std::sync::Arc;
use std::time::Duration;

/// Build the configured remote client.
///
/// Returns `None` when the provider is `none`, unknown, or missing its API
/// key; callers then stay on the heuristic path.
pub fn create_client(config: &LlmConfig) -> Option<Arc<dyn LlmClient>> {
    let timeout = Duration::from_secs(config.timeout_secs.max(1));
    let base_url = config.base_url.as_deref();

    let result: anyhow::Result<Arc<dyn LlmClient>> =
        match config.provider.trim().to_lowercase().as_str() {
            "gemini" | "google" => gemini::GeminiClient::new(&config.model, base_url, timeout)
                .map(|c| Arc::new(c) as Arc<dyn LlmClient>),
            "openai" => openai::OpenAiClient::new(&config.model, base_url, timeout)
                .map(|c| Arc::new(c) as Arc<dyn LlmClient>),
            "mock" => Ok(Arc::new(mock::MockProvider::new(&config.model))),
            "none" | "" => {
                tracing::info!("Remote analysis disabled; using heuristics only");
                return None;
            }
            other => {
                tracing::warn!("Unknown LLM provider '{}'; using heuristics only", other);
                return None;
            }
        };

    match result {
        Ok(client) => {
            tracing::info!("Remote analysis via {} ({})", client.name(), config.model);
            Some(client)
        }
        Err(e) => {
            tracing::warn!("Remote analysis disabled: {:#}", e);
            None
        }
    }
}
