// Syntactic and Semantic Analysis
// Clause density, sentence-to-sentence overlap and local n-gram statistics

use super::frequency_table;
use crate::services::patterns::{conjunction_re, count, subordinator_re};
use crate::services::text_processor::{sentence_word_count, tokenize_words};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Mean per-sentence clause density: subordinators plus conjunctions, with a
/// +2 penalty above 30 words and a further +3 above 40, divided by the
/// sentence's word count.
pub fn calculate_syntactic_complexity(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }

    let total: f64 = sentences
        .iter()
        .map(|sentence| {
            let len = sentence_word_count(sentence);
            let mut complexity = count(subordinator_re(), sentence) + count(conjunction_re(), sentence);
            if len > 30 {
                complexity += 2;
            }
            if len > 40 {
                complexity += 3;
            }
            complexity as f64 / len as f64
        })
        .sum();

    total / sentences.len() as f64
}

/// Mean Jaccard overlap between the word sets of consecutive sentences.
pub fn calculate_semantic_coherence(sentences: &[String]) -> f64 {
    if sentences.len() < 2 {
        return 1.0;
    }

    let word_sets: Vec<HashSet<String>> = sentences
        .iter()
        .map(|s| tokenize_words(s).into_iter().collect())
        .collect();

    let total: f64 = word_sets
        .windows(2)
        .map(|pair| jaccard(&pair[0], &pair[1]))
        .sum();

    total / (sentences.len() - 1) as f64
}

pub(crate) fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union.max(1) as f64
}

/// Share of distinct trigrams that occur more than once.
pub fn calculate_ngram_repetition(words: &[String]) -> f64 {
    let mut trigrams: HashSet<&[String]> = HashSet::new();
    let mut repeated: HashSet<&[String]> = HashSet::new();
    for triple in words.windows(3) {
        if !trigrams.insert(triple) {
            repeated.insert(triple);
        }
    }
    repeated.len() as f64 / trigrams.len().max(1) as f64
}

/// Mass of bigrams seen more than twice as often as their unigram
/// frequencies predict under independence, as a share of all bigrams.
pub fn calculate_bigram_unusualness(words: &[String]) -> f64 {
    if words.len() < 2 {
        return 0.0;
    }

    let unigrams = frequency_table(words);
    let mut bigrams: IndexMap<(&str, &str), usize> = IndexMap::new();
    for pair in words.windows(2) {
        *bigrams.entry((pair[0].as_str(), pair[1].as_str())).or_insert(0) += 1;
    }

    let total_words = words.len() as f64;
    let total_bigrams = (words.len() - 1) as f64;
    let mut unusualness = 0.0;
    for (&(first, second), &observed) in &bigrams {
        let first_count = unigrams.get(first).copied().unwrap_or(0) as f64;
        let second_count = unigrams.get(second).copied().unwrap_or(0) as f64;
        let expected = first_count * second_count / total_words;
        let observed = observed as f64;
        if observed > expected * 2.0 {
            unusualness += observed / total_bigrams;
        }
    }

    unusualness.min(1.0)
}
