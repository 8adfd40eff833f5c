pub mod analysis;
pub mod config;
pub mod heuristic;
pub mod language;
pub mod media;
pub mod signals;

pub use analysis::{AnalysisRecord, AnalysisSource, Language};
pub use config::KudosConfig;
pub use heuristic::analyze_heuristically;
pub use language::detect_language;
pub use media::{MediaAnalysis, MediaContext};
pub use signals::{extract_signals, EmotionSignal, LexicalSignals};
