// Threshold Decider
// Text-sensitive decision threshold and human-readable reasons.
// The threshold only rises for human, informal, emotional or literary
// writing; it never lowers a score.

use crate::models::MetricsRecord;
use crate::services::metrics::{calculate_creativity_score, calculate_narrative_score};
use crate::services::text_processor::tokenize_words;

const BASE_THRESHOLD: f64 = 0.58;

/// Each adjustment applied on top of the base threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdBreakdown {
    pub length: f64,
    pub narrative: f64,
    pub human_likeness: f64,
    pub informalness: f64,
    pub emotional: f64,
    pub creativity: f64,
}

impl ThresholdBreakdown {
    pub fn threshold(&self) -> f64 {
        BASE_THRESHOLD
            + self.length
            + self.narrative
            + self.human_likeness
            + self.informalness
            + self.emotional
            + self.creativity
    }
}

/// Work out the dynamic threshold for `text`. Narrative and creativity
/// adjustments apply only with `literary` enabled.
pub fn dynamic_threshold(metrics: &MetricsRecord, text: &str, literary: bool) -> ThresholdBreakdown {
    let words = tokenize_words(text);
    let mut breakdown = ThresholdBreakdown::default();

    if words.len() < 100 {
        breakdown.length = 0.04;
    } else if words.len() > 300 {
        breakdown.length = -0.02;
    }

    if literary {
        let narrative = calculate_narrative_score(text, &words);
        if narrative > 0.5 {
            breakdown.narrative = 0.15;
        } else if narrative > 0.35 {
            breakdown.narrative = 0.08;
        }
    }

    let h = metrics.human_likeness_indicators;
    if h > 0.6 {
        breakdown.human_likeness = 0.2;
    } else if h > 0.4 {
        breakdown.human_likeness = 0.12;
    } else if h > 0.2 {
        breakdown.human_likeness = 0.05;
    }

    let informal = metrics.informalness_score;
    if informal > 0.5 {
        breakdown.informalness = 0.15;
    } else if informal > 0.3 {
        breakdown.informalness = 0.08;
    } else if informal > 0.15 {
        breakdown.informalness = 0.03;
    }

    let emotional = metrics.emotional_tone_variability;
    if emotional > 0.4 {
        breakdown.emotional = 0.12;
    } else if emotional > 0.2 {
        breakdown.emotional = 0.06;
    }

    if literary {
        let creativity = calculate_creativity_score(text, &words);
        if creativity > 0.5 {
            breakdown.creativity = 0.2;
        } else if creativity > 0.35 {
            breakdown.creativity = 0.1;
        }
    }

    breakdown
}

/// Two-decimal confidence derived from the score alone.
pub fn confidence_of(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Explanations for every metric sitting in its AI-typical or human-typical
/// band, in a fixed order.
pub fn generate_reasons(m: &MetricsRecord, score: f64) -> Vec<String> {
    let mut reasons = Vec::new();

    if m.perplexity < 8.0 {
        reasons.push(format!(
            "Low perplexity ({:.2}) suggests predictable word patterns typical of AI",
            m.perplexity
        ));
    }
    if m.burstiness < 0.1 {
        reasons.push(format!(
            "Low burstiness ({:.2}) indicates consistent sentence structure characteristic of AI",
            m.burstiness
        ));
    }
    if m.human_likeness_indicators < 0.3 {
        reasons.push(format!(
            "Low human-likeness indicators ({:.2}) suggest absence of typical human writing patterns",
            m.human_likeness_indicators
        ));
    }
    if m.entropy_score < 0.7 {
        reasons.push(format!(
            "Low entropy score ({:.2}) indicates predictable word choice patterns typical of AI",
            m.entropy_score
        ));
    }
    if m.informalness_score < 0.2 {
        reasons.push(format!(
            "Low informality score ({:.2}) suggests formal, AI-like writing style",
            m.informalness_score
        ));
    }
    if m.lexical_diversity > 0.4 && m.lexical_diversity < 0.7 {
        reasons.push(format!(
            "Lexical diversity ({:.2}) falls within AI-typical range",
            m.lexical_diversity
        ));
    }
    if m.transition_density > 2.0 {
        reasons.push(format!(
            "High transition word density ({:.1}%) characteristic of AI writing",
            m.transition_density
        ));
    }
    if m.discourse_marker_patterns > 0.3 {
        reasons.push(format!(
            "Elevated discourse marker usage ({:.2}) typical of AI text structure",
            m.discourse_marker_patterns
        ));
    }
    if m.formality_index > 0.5 {
        reasons.push(format!(
            "Elevated formality index ({:.2}) suggests AI-generated content",
            m.formality_index
        ));
    }
    if m.semantic_coherence > 0.6 {
        reasons.push(format!(
            "High semantic coherence ({:.2}) typical of AI optimization",
            m.semantic_coherence
        ));
    }
    if m.function_word_analysis > 0.5 {
        reasons.push(format!(
            "Function word distribution ({:.2}) deviates from natural human patterns",
            m.function_word_analysis
        ));
    }
    if m.emotional_tone_variability < 0.2 {
        reasons.push(format!(
            "Low emotional tone variability ({:.2}) suggests limited emotional expression typical of AI",
            m.emotional_tone_variability
        ));
    }
    if m.stylometric_signature < 0.6 {
        reasons.push(format!(
            "Low stylometric variation ({:.2}) indicates consistent AI writing patterns",
            m.stylometric_signature
        ));
    }
    if m.sentence_structure_entropy < 0.8 {
        reasons.push(format!(
            "Low sentence structure entropy ({:.2}) suggests uniform AI sentence construction",
            m.sentence_structure_entropy
        ));
    }
    if m.n_gram_repetition > 0.1 {
        reasons.push(format!(
            "Repetitive n-gram patterns ({:.1}%) detected",
            m.n_gram_repetition * 100.0
        ));
    }
    if m.bigram_unusualness > 0.2 {
        reasons.push(format!(
            "Unusual bigram patterns ({:.1}%) may indicate AI generation",
            m.bigram_unusualness * 100.0
        ));
    }

    if score <= 0.4 {
        reasons.push("Natural linguistic variation suggests human authorship".to_string());
        reasons.push("Irregular patterns inconsistent with AI generation".to_string());
        if m.human_likeness_indicators > 0.5 {
            reasons.push("Strong human-like writing patterns detected".to_string());
        }
        if m.informalness_score > 0.4 {
            reasons.push("Informal language patterns suggest human authorship".to_string());
        }
        if m.emotional_tone_variability > 0.3 {
            reasons.push("Varied emotional expression typical of human writing".to_string());
        }
    }

    if m.entropy_score > 0.8 {
        reasons.push("High entropy indicates natural human unpredictability in word choice".to_string());
    }
    if m.vocabulary_richness < 0.3 {
        reasons.push("Limited vocabulary richness may indicate AI limitations".to_string());
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMO: &str = "The organization should implement a comprehensive framework to optimize \
        operational efficiency across all departments and strategic initiatives.";

    #[test]
    fn test_short_formal_text_threshold() {
        let breakdown = dynamic_threshold(&MetricsRecord::default(), MEMO, true);
        assert_eq!(breakdown.length, 0.04);
        assert_eq!(breakdown.creativity, 0.0);
        assert!((breakdown.threshold() - 0.62).abs() < 1e-12);
    }

    #[test]
    fn test_long_text_lowers_threshold() {
        let long = "word ".repeat(301);
        let breakdown = dynamic_threshold(&MetricsRecord::default(), &long, true);
        assert_eq!(breakdown.length, -0.02);
    }

    #[test]
    fn test_human_signals_raise_threshold() {
        let record = MetricsRecord {
            human_likeness_indicators: 0.7,
            informalness_score: 0.35,
            emotional_tone_variability: 0.25,
            ..Default::default()
        };
        let breakdown = dynamic_threshold(&record, MEMO, true);
        assert_eq!(breakdown.human_likeness, 0.2);
        assert_eq!(breakdown.informalness, 0.08);
        assert_eq!(breakdown.emotional, 0.06);
    }

    #[test]
    fn test_literary_adjustments_can_be_disabled() {
        let story = "Mr. Dursley was the director of a firm called Grunnings, which made drills. \
            He was a big, beefy man with hardly any neck, although he did have a very large \
            mustache. Mrs. Dursley was thin and blonde and spent so much of her time craning \
            over garden fences, spying on the neighbors.";
        let on = dynamic_threshold(&MetricsRecord::default(), story, true);
        let off = dynamic_threshold(&MetricsRecord::default(), story, false);
        assert!(on.creativity > 0.0);
        assert_eq!(off.narrative, 0.0);
        assert_eq!(off.creativity, 0.0);
        assert!(on.threshold() > off.threshold());
    }

    #[test]
    fn test_human_signal_bands() {
        let breakdown = |m: MetricsRecord| dynamic_threshold(&m, MEMO, false);
        let human = |h: f64| breakdown(MetricsRecord {
            human_likeness_indicators: h,
            ..Default::default()
        }).human_likeness;
        let informal = |v: f64| breakdown(MetricsRecord {
            informalness_score: v,
            ..Default::default()
        }).informalness;
        let emotional = |v: f64| breakdown(MetricsRecord {
            emotional_tone_variability: v,
            ..Default::default()
        }).emotional;

        assert_eq!(human(0.61), 0.2);
        assert_eq!(human(0.6), 0.12);
        assert_eq!(human(0.41), 0.12);
        assert_eq!(human(0.4), 0.05);
        assert_eq!(human(0.21), 0.05);
        assert_eq!(human(0.2), 0.0);

        assert_eq!(informal(0.51), 0.15);
        assert_eq!(informal(0.5), 0.08);
        assert_eq!(informal(0.31), 0.08);
        assert_eq!(informal(0.3), 0.03);
        assert_eq!(informal(0.16), 0.03);
        assert_eq!(informal(0.15), 0.0);

        assert_eq!(emotional(0.41), 0.12);
        assert_eq!(emotional(0.4), 0.06);
        assert_eq!(emotional(0.21), 0.06);
        assert_eq!(emotional(0.2), 0.0);
    }

    // Narrative 0.507, creativity 0.767.
    const STORY: &str = "Mr. and Mrs. Dursley, of number four, Privet Drive, were proud to say \
        that they were perfectly normal, thank you very much. Mr. Dursley was the director of a \
        firm called Grunnings, which made drills. He was a big, beefy man with hardly any neck, \
        although he did have a very large mustache. Mrs. Dursley was thin and blonde and had \
        nearly twice the usual amount of neck, which came in very useful as she spent so much of \
        her time craning over garden fences, spying on the neighbors.";
    // Narrative 0.4, creativity 0.
    const MINUTES: &str = "The committee reviewed the budget and then approved the proposal. \
        Maria agreed with the plan.";
    // Narrative 0.25, creativity 0.4.
    const LISTING: &str = "The company has a small office with a garden and a table, like a house \
        near the road.";
    // Narrative 0.105, creativity 0.6.
    const PROFILE: &str = "The firm has a director who works like a machine in a house near the \
        road with a dog.";

    #[test]
    fn test_literary_bands() {
        let literary = |text: &str| dynamic_threshold(&MetricsRecord::default(), text, true);

        let story = literary(STORY);
        assert_eq!((story.narrative, story.creativity), (0.15, 0.2));
        let minutes = literary(MINUTES);
        assert_eq!((minutes.narrative, minutes.creativity), (0.08, 0.0));
        let listing = literary(LISTING);
        assert_eq!((listing.narrative, listing.creativity), (0.0, 0.1));
        let profile = literary(PROFILE);
        assert_eq!((profile.narrative, profile.creativity), (0.0, 0.2));
    }

    #[test]
    fn test_human_reasons_boundary_is_inclusive() {
        let record = MetricsRecord {
            perplexity: 12.0,
            burstiness: 0.5,
            human_likeness_indicators: 0.4,
            informalness_score: 0.3,
            emotional_tone_variability: 0.25,
            entropy_score: 0.75,
            stylometric_signature: 0.7,
            sentence_structure_entropy: 0.9,
            vocabulary_richness: 0.5,
            ..Default::default()
        };
        let human_line = "Natural linguistic variation suggests human authorship";
        assert!(generate_reasons(&record, 0.4).iter().any(|r| r == human_line));
        assert!(!generate_reasons(&record, 0.41).iter().any(|r| r == human_line));
    }

    #[test]
    fn test_confidence_rounding() {
        assert_eq!(confidence_of(0.768), 0.77);
        assert_eq!(confidence_of(0.01064), 0.01);
        assert_eq!(confidence_of(0.0), 0.0);
    }

    #[test]
    fn test_reason_formatting_and_order() {
        let record = MetricsRecord {
            perplexity: 7.556,
            burstiness: -0.733,
            transition_density: 7.4074,
            n_gram_repetition: 0.125,
            entropy_score: 0.9,
            vocabulary_richness: 0.9,
            stylometric_signature: 0.9,
            sentence_structure_entropy: 0.9,
            human_likeness_indicators: 0.9,
            informalness_score: 0.9,
            emotional_tone_variability: 0.9,
            ..Default::default()
        };
        let reasons = generate_reasons(&record, 0.9);
        assert_eq!(
            reasons,
            vec![
                "Low perplexity (7.56) suggests predictable word patterns typical of AI",
                "Low burstiness (-0.73) indicates consistent sentence structure characteristic of AI",
                "High transition word density (7.4%) characteristic of AI writing",
                "Repetitive n-gram patterns (12.5%) detected",
                "High entropy indicates natural human unpredictability in word choice",
            ]
        );
    }

    #[test]
    fn test_human_reasons_for_low_scores() {
        let record = MetricsRecord {
            perplexity: 12.0,
            burstiness: 0.5,
            human_likeness_indicators: 0.6,
            informalness_score: 0.5,
            emotional_tone_variability: 0.6,
            entropy_score: 0.75,
            stylometric_signature: 0.7,
            sentence_structure_entropy: 0.9,
            vocabulary_richness: 0.2,
            ..Default::default()
        };
        let reasons = generate_reasons(&record, 0.1);
        assert_eq!(
            reasons,
            vec![
                "Natural linguistic variation suggests human authorship",
                "Irregular patterns inconsistent with AI generation",
                "Strong human-like writing patterns detected",
                "Informal language patterns suggest human authorship",
                "Varied emotional expression typical of human writing",
                "Limited vocabulary richness may indicate AI limitations",
            ]
        );
    }
}
