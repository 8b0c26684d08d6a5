// Burstiness
// Sentence-length statistics: burstiness, mean length and spread

use super::mean_std;
use crate::services::text_processor::sentence_word_count;

fn sentence_lengths(sentences: &[String]) -> Vec<f64> {
    sentences.iter().map(|s| sentence_word_count(s) as f64).collect()
}

/// `(σ − μ) / (σ + μ)` of per-sentence word counts. Near −1 means uniform
/// sentences, near +1 highly variable ones. Fewer than two sentences carry no
/// signal and return 0.
pub fn calculate_burstiness(sentences: &[String]) -> f64 {
    if sentences.len() < 2 {
        return 0.0;
    }
    let (mean, std_dev) = mean_std(&sentence_lengths(sentences));
    (std_dev - mean) / (std_dev + mean)
}

pub fn calculate_average_words_per_sentence(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let (mean, _) = mean_std(&sentence_lengths(sentences));
    mean
}

/// Population standard deviation of sentence lengths, in words.
pub fn calculate_sentence_variability(sentences: &[String]) -> f64 {
    if sentences.len() < 2 {
        return 0.0;
    }
    mean_std(&sentence_lengths(sentences)).1
}
