pub mod analyzer;
pub mod extraction;
pub mod llm;
pub mod prompts;
pub mod providers;

pub use analyzer::{AnalysisOutcome, StoryAnalyzer};
pub use llm::{CompletionParams, LlmClient, MediaPart};
pub use providers::create_client;
