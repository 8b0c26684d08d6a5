// AI Text Detector Core Services
// Text processing, lexicon and metric functions, the detection pipeline and
// configuration storage

pub mod text_processor;
pub mod lexicon;
pub mod patterns;
pub mod metrics;
pub mod detection;
pub mod config_store;

pub use text_processor::*;
pub use lexicon::Lexicon;
pub use config_store::*;

// Re-export detection module items
pub use detection::{
    analyze_text,
    strategy_for,
    AiTextDetector,
    DetectionError,
    ScoringStrategy,
    ThresholdBreakdown,
};
