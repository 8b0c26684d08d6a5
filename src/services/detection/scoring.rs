// Scoring Strategies
// Combine a metrics record into a single AI-probability score in [0, 1].
// Strategies are versioned so stored results can name the formula that
// produced them.

use crate::models::MetricsRecord;

pub const ADAPTIVE_V3: &str = "adaptive-v3";
pub const WEIGHTED_EVIDENCE_V1: &str = "weighted-evidence-v1";

pub trait ScoringStrategy: Send + Sync {
    fn version(&self) -> &'static str;

    /// Score in [0, 1]; higher means more likely generated.
    fn score(&self, metrics: &MetricsRecord) -> f64;

    /// A fixed decision threshold, or `None` to use the dynamic one.
    fn fixed_threshold(&self) -> Option<f64> {
        None
    }
}

/// Look up a strategy by version string.
pub fn strategy_for(version: &str) -> Option<Box<dyn ScoringStrategy>> {
    match version.trim() {
        ADAPTIVE_V3 => Some(Box::new(AdaptiveScorer)),
        WEIGHTED_EVIDENCE_V1 => Some(Box::new(WeightedEvidenceScorer)),
        _ => None,
    }
}

// ============================================================================
// adaptive-v3
// ============================================================================

/// Linear combination led by the human-writing signals, followed by
/// multiplicative damping whenever those signals are strong.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveScorer;

impl ScoringStrategy for AdaptiveScorer {
    fn version(&self) -> &'static str {
        ADAPTIVE_V3
    }

    fn score(&self, m: &MetricsRecord) -> f64 {
        let mut score = 0.0;
        score += (1.0 - m.human_likeness_indicators) * 0.25;
        score += (1.0 - m.informalness_score) * 0.20;
        score += (1.0 - m.emotional_tone_variability.min(1.0)) * 0.15;
        score += perplexity_bucket(m.perplexity) * 0.18;
        score += burstiness_bucket(m.burstiness) * 0.15;
        if m.transition_density > 2.0 {
            score += (m.transition_density / 10.0).min(0.1) * 0.05;
        }

        apply_adaptive_thresholding(score, m).clamp(0.0, 1.0)
    }
}

fn perplexity_bucket(perplexity: f64) -> f64 {
    if perplexity < 2.0 {
        1.0
    } else if perplexity < 4.0 {
        0.8
    } else if perplexity < 7.0 {
        0.5
    } else if perplexity < 12.0 {
        0.2
    } else {
        0.05
    }
}

fn burstiness_bucket(burstiness: f64) -> f64 {
    if burstiness < -0.5 {
        0.9
    } else if burstiness < 0.0 {
        0.6
    } else if burstiness < 0.3 {
        0.3
    } else {
        0.1
    }
}

/// Damp `base` for human-likeness, informality and emotional variability,
/// then again when several of those signals (or high word entropy) agree.
/// Every factor is in (0, 1], so the result never exceeds `base`.
pub fn apply_adaptive_thresholding(base: f64, m: &MetricsRecord) -> f64 {
    let mut adjusted = base;

    let h = m.human_likeness_indicators;
    if h > 0.6 {
        adjusted *= 0.2;
    } else if h > 0.4 {
        adjusted *= 0.4;
    } else if h > 0.2 {
        adjusted *= 0.7;
    }

    let informal = m.informalness_score;
    if informal > 0.6 {
        adjusted *= 0.3;
    } else if informal > 0.4 {
        adjusted *= 0.5;
    } else if informal > 0.2 {
        adjusted *= 0.8;
    }

    let emotional = m.emotional_tone_variability;
    if emotional > 0.5 {
        adjusted *= 0.4;
    } else if emotional > 0.3 {
        adjusted *= 0.6;
    }

    let strong_signals = [h > 0.3, informal > 0.3, emotional > 0.2, m.entropy_score > 0.8]
        .iter()
        .filter(|&&s| s)
        .count();
    if strong_signals >= 3 {
        adjusted *= 0.1;
    } else if strong_signals >= 2 {
        adjusted *= 0.3;
    }

    adjusted.clamp(0.0, 1.0)
}

// ============================================================================
// weighted-evidence-v1
// ============================================================================

/// Earlier formula: each metric contributes weighted evidence only inside its
/// AI-typical band, normalized by the total weight, decided at a fixed 0.65.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedEvidenceScorer;

const WEIGHTED_EVIDENCE_THRESHOLD: f64 = 0.65;

impl ScoringStrategy for WeightedEvidenceScorer {
    fn version(&self) -> &'static str {
        WEIGHTED_EVIDENCE_V1
    }

    fn score(&self, m: &MetricsRecord) -> f64 {
        // (weight, evidence); burstiness evidence is not capped at 1
        let evidence = [
            (0.25, if m.perplexity < 8.0 { (8.0 - m.perplexity) / 8.0 } else { 0.0 }),
            (0.20, if m.burstiness < 0.1 { (0.1 - m.burstiness) / 0.1 } else { 0.0 }),
            (0.15, if m.lexical_diversity > 0.4 && m.lexical_diversity < 0.7 { 1.0 } else { 0.0 }),
            (0.12, if m.semantic_coherence > 0.3 && m.semantic_coherence < 0.8 { 1.0 } else { 0.0 }),
            (0.10, if m.transition_density > 2.0 { (m.transition_density / 5.0).min(1.0) } else { 0.0 }),
            (0.08, if m.formality_index > 0.5 { m.formality_index.min(1.0) } else { 0.0 }),
            (0.05, if m.n_gram_repetition > 0.1 { (m.n_gram_repetition * 2.0).min(1.0) } else { 0.0 }),
            (0.05, m.punctuation_patterns),
        ];

        let total_weight: f64 = evidence.iter().map(|(w, _)| w).sum();
        let score: f64 = evidence.iter().map(|(w, e)| w * e).sum();
        (score / total_weight).clamp(0.0, 1.0)
    }

    fn fixed_threshold(&self) -> Option<f64> {
        Some(WEIGHTED_EVIDENCE_THRESHOLD)
    }
}
