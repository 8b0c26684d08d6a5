// Perplexity
// Self-perplexity of a token sequence under an interpolated trigram model
// estimated from the sequence itself.

use std::collections::HashMap;

/// Returned for sequences too short to score; high perplexity reads as human.
pub const SHORT_TEXT_PERPLEXITY: f64 = 10.0;

const TRIGRAM_WEIGHT: f64 = 0.6;
const BIGRAM_WEIGHT: f64 = 0.3;
const UNIGRAM_WEIGHT: f64 = 0.1;
const SMOOTHING: f64 = 0.1;
const MIN_PROBABILITY: f64 = 1e-4;

/// Interpolated n-gram perplexity: `2^(-mean log2 p)` over every position
/// from the third token on. Each order uses add-0.1 smoothing normalized by
/// the size of its table; per-token probability is floored at 1e-4.
pub fn calculate_perplexity(words: &[String]) -> f64 {
    if words.len() < 3 {
        return SHORT_TEXT_PERPLEXITY;
    }

    let mut unigrams: HashMap<&str, usize> = HashMap::new();
    let mut bigrams: HashMap<(&str, &str), usize> = HashMap::new();
    let mut trigrams: HashMap<(&str, &str, &str), usize> = HashMap::new();

    for w in words {
        *unigrams.entry(w.as_str()).or_insert(0) += 1;
    }
    for pair in words.windows(2) {
        *bigrams.entry((pair[0].as_str(), pair[1].as_str())).or_insert(0) += 1;
    }
    for triple in words.windows(3) {
        *trigrams
            .entry((triple[0].as_str(), triple[1].as_str(), triple[2].as_str()))
            .or_insert(0) += 1;
    }

    let total_words = words.len() as f64;
    let unigram_types = unigrams.len() as f64;
    let bigram_types = bigrams.len() as f64;
    let trigram_types = trigrams.len() as f64;

    let mut total_log_prob = 0.0;
    let mut predictions = 0usize;

    for triple in words.windows(3) {
        let (prev_prev, prev, current) = (triple[0].as_str(), triple[1].as_str(), triple[2].as_str());

        let trigram_freq = trigrams.get(&(prev_prev, prev, current)).copied().unwrap_or(0) as f64;
        let bigram_freq = bigrams.get(&(prev, current)).copied().unwrap_or(0) as f64;
        let prev_bigram_freq = bigrams.get(&(prev_prev, prev)).copied().unwrap_or(0) as f64;
        let prev_word_freq = unigrams.get(prev).copied().unwrap_or(0) as f64;
        let word_freq = unigrams.get(current).copied().unwrap_or(0) as f64;

        let mut probability = 0.0;
        if prev_bigram_freq > 0.0 {
            probability += TRIGRAM_WEIGHT * (trigram_freq + SMOOTHING)
                / (prev_bigram_freq + SMOOTHING * trigram_types);
        }
        if prev_word_freq > 0.0 {
            probability += BIGRAM_WEIGHT * (bigram_freq + SMOOTHING)
                / (prev_word_freq + SMOOTHING * bigram_types);
        }
        probability +=
            UNIGRAM_WEIGHT * (word_freq + SMOOTHING) / (total_words + SMOOTHING * unigram_types);

        total_log_prob += probability.max(MIN_PROBABILITY).log2();
        predictions += 1;
    }

    let average_log_prob = total_log_prob / predictions.max(1) as f64;
    2f64.powf(-average_log_prob)
}
