// AI Text Detector Data Models
// Metrics record, detection result and reusable detector configuration

use serde::{Deserialize, Serialize};

// ============ Metrics Record ============

/// Every metric computed for one text. Ratio-style fields lie in [0, 1];
/// `perplexity`, `readability_score`, `transition_density` and
/// `formality_index` are unbounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRecord {
    pub perplexity: f64,
    pub burstiness: f64,
    pub average_words_per_sentence: f64,
    pub sentence_variability: f64,
    pub lexical_diversity: f64,
    pub readability_score: f64,
    pub syntactic_complexity: f64,
    pub semantic_coherence: f64,
    #[serde(rename = "nGramRepetition")]
    pub n_gram_repetition: f64,
    pub punctuation_patterns: f64,
    pub word_frequency_distribution: f64,
    pub transition_density: f64,
    pub formality_index: f64,
    pub vocabulary_richness: f64,
    pub contextual_consistency: f64,
    pub entropy_score: f64,
    pub human_likeness_indicators: f64,
    pub emotional_tone_variability: f64,
    pub discourse_marker_patterns: f64,
    pub function_word_analysis: f64,
    pub informalness_score: f64,
    pub sentence_structure_entropy: f64,
    pub topic_coherence_score: f64,
    pub bigram_unusualness: f64,
    pub stylometric_signature: f64,
}

// ============ Detection Result ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    #[serde(rename = "isAIGenerated")]
    pub is_ai_generated: bool,
    /// `round(score * 100) / 100`. Tracks the score, not the distance to the
    /// threshold, so a text can be judged human at confidence 0.6.
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub score: f64,
    pub perplexity_score: f64,
    pub burstiness_score: f64,
}

/// A detection result together with the record it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedDetection {
    pub result: DetectionResult,
    pub metrics: MetricsRecord,
    pub threshold: f64,
    pub strategy: String,
}

// ============ Detector Configuration ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorConfig {
    /// Minimum trimmed length, in characters, accepted for analysis.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    /// Scoring strategy version, see `services::detection::scoring`.
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Raise the decision threshold for narrative and creative prose.
    #[serde(default = "default_true")]
    pub literary_heuristics: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
            strategy: default_strategy(),
            literary_heuristics: true,
        }
    }
}

// ============ Default Value Functions ============

fn default_true() -> bool { true }
fn default_min_chars() -> usize { 50 }
fn default_strategy() -> String { "adaptive-v3".to_string() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_result_field_names() {
        let result = DetectionResult {
            is_ai_generated: true,
            confidence: 0.77,
            reasons: vec!["x".to_string()],
            score: 0.768,
            perplexity_score: 7.5,
            burstiness_score: -0.7,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isAIGenerated"], true);
        assert_eq!(json["confidence"], 0.77);
        assert!(json.get("perplexityScore").is_some());
        assert!(json.get("burstinessScore").is_some());
    }

    #[test]
    fn test_metrics_record_field_names() {
        let json = serde_json::to_value(MetricsRecord::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 25);
        assert!(obj.contains_key("nGramRepetition"));
        assert!(obj.contains_key("humanLikenessIndicators"));
        assert!(obj.contains_key("stylometricSignature"));
    }

    #[test]
    fn test_detector_config_defaults_from_partial_json() {
        let config: DetectorConfig = serde_json::from_str(r#"{"strategy":"weighted-evidence-v1"}"#).unwrap();
        assert_eq!(config.min_chars, 50);
        assert_eq!(config.strategy, "weighted-evidence-v1");
        assert!(config.literary_heuristics);
    }
}
