// Public API
// Convenience entry points backed by a shared default detector. Each call
// runs the whole pipeline.

use std::sync::OnceLock;

use crate::models::DetectionResult;
use crate::services::detection::{AiTextDetector, DetectionError};

fn default_detector() -> &'static AiTextDetector {
    static DETECTOR: OnceLock<AiTextDetector> = OnceLock::new();
    DETECTOR.get_or_init(AiTextDetector::default)
}

/// Classify `text`. Fails with [`DetectionError::EmptyInput`] for blank text
/// and [`DetectionError::TooShort`] below 50 trimmed characters.
pub fn detect_ai_text(text: &str) -> Result<DetectionResult, DetectionError> {
    default_detector().detect(text)
}

pub fn is_ai_generated(text: &str) -> Result<bool, DetectionError> {
    Ok(detect_ai_text(text)?.is_ai_generated)
}

pub fn get_confidence_score(text: &str) -> Result<f64, DetectionError> {
    Ok(detect_ai_text(text)?.confidence)
}

pub fn get_perplexity_score(text: &str) -> Result<f64, DetectionError> {
    Ok(detect_ai_text(text)?.perplexity_score)
}

pub fn get_burstiness_score(text: &str) -> Result<f64, DetectionError> {
    Ok(detect_ai_text(text)?.burstiness_score)
}
