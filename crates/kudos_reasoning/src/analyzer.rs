//! Story and media analysis with a remote model, degrading to local heuristics.

use crate::extraction::{parse_media_reply, parse_story_reply};
use crate::llm::{CompletionParams, LlmClient, MediaPart};
use crate::prompts::{media_analysis_prompt, story_analysis_prompt};
use anyhow::{Context, Result};
use kudos_core::config::LlmConfig;
use kudos_core::{analyze_heuristically, AnalysisRecord, AnalysisSource, MediaAnalysis};
use std::sync::Arc;
use std::time::Duration;

/// An analysis record and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub record: AnalysisRecord,
    pub source: AnalysisSource,
}

/// Runs the remote analysis when a client is configured, otherwise (or on any
/// failure) the heuristic analyzer. Never returns an error to the caller.
pub struct StoryAnalyzer {
    client: Option<Arc<dyn LlmClient>>,
    timeout: Duration,
    params: CompletionParams,
}

impl StoryAnalyzer {
    pub fn new(client: Option<Arc<dyn LlmClient>>, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            params: CompletionParams::default(),
        }
    }

    pub fn from_config(client: Option<Arc<dyn LlmClient>>, config: &LlmConfig) -> Self {
        Self {
            client,
            timeout: Duration::from_secs(config.timeout_secs.max(1)),
            params: CompletionParams {
                max_tokens: config.max_tokens,
                temperature: config.temperature,
            },
        }
    }

    /// Heuristics only.
    pub fn offline() -> Self {
        Self::new(None, Duration::from_secs(1))
    }

    pub fn is_remote(&self) -> bool {
        self.client.is_some()
    }

    pub async fn analyze_story(&self, story: &str) -> AnalysisOutcome {
        let fallback = analyze_heuristically(story);

        let Some(client) = &self.client else {
            return AnalysisOutcome {
                record: fallback,
                source: AnalysisSource::Heuristic,
            };
        };

        match self.remote_story(client.as_ref(), story, fallback.clone()).await {
            Ok(record) => AnalysisOutcome {
                record,
                source: AnalysisSource::Remote,
            },
            Err(e) => {
                tracing::warn!(
                    "Remote story analysis failed, using heuristics: {:#}",
                    e
                );
                AnalysisOutcome {
                    record: fallback,
                    source: AnalysisSource::Heuristic,
                }
            }
        }
    }

    async fn remote_story(
        &self,
        client: &dyn LlmClient,
        story: &str,
        fallback: AnalysisRecord,
    ) -> Result<AnalysisRecord> {
        let prompt = story_analysis_prompt(story);
        let text = tokio::time::timeout(
            self.timeout,
            client.generate(&prompt, None, self.params.clone()),
        )
        .await
        .context("Remote analysis timed out")??;

        let parsed = parse_story_reply(&text).context("Reply contained no analysis fields")?;
        Ok(parsed.into_record(fallback))
    }

    /// Describe uploaded media. Never fails: without a client, or on any
    /// remote error, the result is a placeholder description.
    pub async fn analyze_media(&self, data_base64: &str, mime_type: &str) -> MediaAnalysis {
        let Some(client) = &self.client else {
            return MediaAnalysis::unavailable(mime_type);
        };

        let media = MediaPart {
            mime_type: mime_type.to_string(),
            data: data_base64.to_string(),
        };
        let prompt = media_analysis_prompt(mime_type);
        let reply = tokio::time::timeout(
            self.timeout,
            client.generate(&prompt, Some(&media), self.params.clone()),
        )
        .await;

        match reply {
            Ok(Ok(text)) => parse_media_reply(&text, mime_type),
            Ok(Err(e)) => {
                tracing::warn!("Remote media analysis failed: {:#}", e);
                MediaAnalysis::unavailable(mime_type)
            }
            Err(_) => {
                tracing::warn!("Remote media analysis timed out");
                MediaAnalysis::unavailable(mime_type)
            }
        }
    }
}
