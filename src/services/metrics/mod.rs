// Metrics Module
// Pure metric functions over a tokenized text, grouped by concern:
// - perplexity: interpolated trigram model
// - burstiness: sentence-length statistics
// - lexical: diversity, hapax richness, Zipf fit, entropy
// - syntactic: clause complexity, coherence, n-gram repetition
// - style: readability, punctuation, transitions, formality, stylometry
// - human: human-likeness, emotion, informality, discourse and function words
// - contextual: topic consistency and sentence-structure entropy
// - narrative: narrative and creative-writing signals
//
// No metric reads another metric's output and none of them fail: degenerate
// input yields a neutral default.

pub mod perplexity;
pub mod burstiness;
pub mod lexical;
pub mod syntactic;
pub mod style;
pub mod human;
pub mod contextual;
pub mod narrative;

use indexmap::IndexMap;

pub use perplexity::calculate_perplexity;
pub use burstiness::{
    calculate_average_words_per_sentence,
    calculate_burstiness,
    calculate_sentence_variability,
};
pub use lexical::{
    analyze_word_frequency_distribution,
    calculate_entropy_score,
    calculate_lexical_diversity,
    calculate_vocabulary_richness,
};
pub use syntactic::{
    calculate_bigram_unusualness,
    calculate_ngram_repetition,
    calculate_semantic_coherence,
    calculate_syntactic_complexity,
};
pub use style::{
    analyze_punctuation_patterns,
    calculate_formality_index,
    calculate_readability_score,
    calculate_stylometric_signature,
    calculate_transition_density,
};
pub use human::{
    calculate_discourse_marker_patterns,
    calculate_emotional_tone_variability,
    calculate_function_word_analysis,
    calculate_human_likeness_indicators,
    calculate_informalness_score,
};
pub use contextual::{
    calculate_contextual_consistency,
    calculate_sentence_structure_entropy,
    calculate_topic_coherence_score,
};
pub use narrative::{calculate_creativity_score, calculate_narrative_score};

/// Word counts in first-occurrence order, so sums over the table are
/// reproducible bit for bit.
pub(crate) fn frequency_table<'a>(words: &'a [String]) -> IndexMap<&'a str, usize> {
    let mut counts: IndexMap<&str, usize> = IndexMap::with_capacity(words.len());
    for w in words {
        *counts.entry(w.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Population mean and standard deviation.
pub(crate) fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Bounded ratio used by every "count over expected count" sub-indicator.
#[inline]
pub(crate) fn capped(count: usize, denominator: f64, cap: f64) -> f64 {
    (count as f64 / denominator).min(cap)
}

#[cfg(test)]
pub(crate) fn words_of(text: &str) -> Vec<String> {
    crate::services::text_processor::tokenize_words(text)
}
