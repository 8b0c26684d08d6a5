// Contextual Analysis
// Topic continuity across neighbouring sentences and the spread of sentence
// shapes

use super::syntactic::jaccard;
use crate::services::lexicon::Lexicon;
use crate::services::text_processor::{extract_topic_words, sentence_word_count};
use indexmap::IndexMap;
use std::collections::HashSet;

fn topic_sets(sentences: &[String], lexicon: &Lexicon) -> Vec<HashSet<String>> {
    sentences
        .iter()
        .map(|s| extract_topic_words(s, lexicon).into_iter().collect())
        .collect()
}

/// For each interior sentence, the share of topic words in its three-sentence
/// window that appear in at least two of the three sentences; averaged over
/// the interior. Fewer than three sentences are trivially consistent.
pub fn calculate_contextual_consistency(sentences: &[String], lexicon: &Lexicon) -> f64 {
    if sentences.len() < 3 {
        return 1.0;
    }

    let topics = topic_sets(sentences, lexicon);
    let total: f64 = topics
        .windows(3)
        .map(|window| {
            let all: HashSet<&String> = window.iter().flatten().collect();
            let shared = all
                .iter()
                .filter(|topic| window.iter().filter(|set| set.contains(**topic)).count() >= 2)
                .count();
            shared as f64 / all.len().max(1) as f64
        })
        .sum();

    total / (sentences.len() - 2).max(1) as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SentenceShape {
    Short,
    Medium,
    Long,
    VeryLong,
}

impl SentenceShape {
    fn classify(words: usize) -> Self {
        match words {
            0..=5 => SentenceShape::Short,
            6..=15 => SentenceShape::Medium,
            16..=25 => SentenceShape::Long,
            _ => SentenceShape::VeryLong,
        }
    }
}

/// Shannon entropy over four sentence-length buckets, normalized by
/// `log2(min(buckets used, sentences))`. A single bucket has no spread and
/// scores 0.
pub fn calculate_sentence_structure_entropy(sentences: &[String]) -> f64 {
    let mut shapes: IndexMap<SentenceShape, usize> = IndexMap::new();
    for sentence in sentences {
        *shapes.entry(SentenceShape::classify(sentence_word_count(sentence))).or_insert(0) += 1;
    }
    if shapes.len() < 2 {
        return 0.0;
    }

    let total = sentences.len() as f64;
    let entropy: f64 = shapes
        .values()
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum();

    entropy / (shapes.len().min(sentences.len()) as f64).log2()
}

/// Mean Jaccard similarity of topic-word sets between each sentence and the
/// next three.
pub fn calculate_topic_coherence_score(sentences: &[String], lexicon: &Lexicon) -> f64 {
    if sentences.len() < 2 {
        return 1.0;
    }

    let topics = topic_sets(sentences, lexicon);
    let mut sum = 0.0;
    let mut comparisons = 0usize;
    for i in 0..topics.len() - 1 {
        for j in (i + 1)..(i + 4).min(topics.len()) {
            sum += jaccard(&topics[i], &topics[j]);
            comparisons += 1;
        }
    }

    if comparisons == 0 {
        0.0
    } else {
        sum / comparisons as f64
    }
}
