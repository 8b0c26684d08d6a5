// Detection Module
// AI text detection pipeline organized into specialized submodules:
// - analyzer: Runs every metric over one text into a metrics record
// - scoring: Versioned strategies turning a record into a score
// - threshold: Dynamic decision threshold and explanation reasons
// - detector: Input validation and the end-to-end detector

pub mod analyzer;
pub mod scoring;
pub mod threshold;
pub mod detector;

// Re-export commonly used items
pub use analyzer::analyze_text;
pub use scoring::{
    apply_adaptive_thresholding,
    strategy_for,
    AdaptiveScorer,
    ScoringStrategy,
    WeightedEvidenceScorer,
    ADAPTIVE_V3,
    WEIGHTED_EVIDENCE_V1,
};
pub use threshold::{confidence_of, dynamic_threshold, generate_reasons, ThresholdBreakdown};
pub use detector::{AiTextDetector, DetectionError};
