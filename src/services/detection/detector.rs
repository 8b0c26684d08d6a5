// AI Text Detector
// Validates input, runs the metrics analyzer, scores the record with the
// configured strategy and decides against the dynamic threshold

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::analyzer::analyze_text;
use super::scoring::{strategy_for, AdaptiveScorer, ScoringStrategy};
use super::threshold::{confidence_of, dynamic_threshold, generate_reasons};
use crate::models::{DetailedDetection, DetectionResult, DetectorConfig, MetricsRecord};
use crate::services::lexicon::Lexicon;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectionError {
    #[error("Text cannot be empty")]
    EmptyInput,
    #[error("Text too short for reliable analysis (minimum {min} characters)")]
    TooShort { min: usize, actual: usize },
}

pub struct AiTextDetector {
    config: DetectorConfig,
    strategy: Box<dyn ScoringStrategy>,
    lexicon: &'static Lexicon,
}

impl fmt::Debug for AiTextDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiTextDetector")
            .field("config", &self.config)
            .field("strategy", &self.strategy.version())
            .finish()
    }
}

impl Default for AiTextDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl AiTextDetector {
    /// Build a detector. An unknown strategy version falls back to
    /// `adaptive-v3`.
    pub fn new(config: DetectorConfig) -> Self {
        let strategy = strategy_for(&config.strategy).unwrap_or_else(|| {
            warn!(
                "[DETECTOR] Unknown scoring strategy '{}', using {}",
                config.strategy,
                AdaptiveScorer.version()
            );
            Box::new(AdaptiveScorer)
        });
        Self {
            config,
            strategy,
            lexicon: Lexicon::standard(),
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn strategy_version(&self) -> &'static str {
        self.strategy.version()
    }

    fn validate(&self, text: &str) -> Result<(), DetectionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DetectionError::EmptyInput);
        }
        let actual = trimmed.chars().count();
        if actual < self.config.min_chars {
            return Err(DetectionError::TooShort {
                min: self.config.min_chars,
                actual,
            });
        }
        Ok(())
    }

    /// Full metrics record for `text`, after the same input checks as
    /// [`detect`](Self::detect).
    pub fn analyze(&self, text: &str) -> Result<MetricsRecord, DetectionError> {
        self.validate(text)?;
        Ok(analyze_text(text, self.lexicon))
    }

    pub fn detect(&self, text: &str) -> Result<DetectionResult, DetectionError> {
        self.detect_with_metrics(text).map(|detailed| detailed.result)
    }

    /// Detection result together with the metrics record, the threshold it
    /// was decided against and the strategy version.
    pub fn detect_with_metrics(&self, text: &str) -> Result<DetailedDetection, DetectionError> {
        let metrics = self.analyze(text)?;
        let score = self.strategy.score(&metrics);

        let threshold = match self.strategy.fixed_threshold() {
            Some(fixed) => fixed,
            None => {
                let breakdown = dynamic_threshold(&metrics, text, self.config.literary_heuristics);
                debug!("[DETECTOR] Threshold breakdown: {:?}", breakdown);
                breakdown.threshold()
            }
        };

        debug!(
            "[DETECTOR] perplexity={:.3}, burstiness={:.3}, human={:.3}, informal={:.3}, emotional={:.3}",
            metrics.perplexity,
            metrics.burstiness,
            metrics.human_likeness_indicators,
            metrics.informalness_score,
            metrics.emotional_tone_variability
        );

        let is_ai_generated = score > threshold;
        let result = DetectionResult {
            is_ai_generated,
            confidence: confidence_of(score),
            reasons: generate_reasons(&metrics, score),
            score,
            perplexity_score: metrics.perplexity,
            burstiness_score: metrics.burstiness,
        };

        info!(
            "[DETECTOR] {}: score={:.4}, threshold={:.3}, ai={}, reasons={}",
            self.strategy.version(),
            score,
            threshold,
            is_ai_generated,
            result.reasons.len()
        );

        Ok(DetailedDetection {
            result,
            metrics,
            threshold,
            strategy: self.strategy.version().to_string(),
        })
    }
}
