// Metrics Analyzer
// Tokenizes a text once and runs every metric over it

use crate::models::MetricsRecord;
use crate::services::lexicon::Lexicon;
use crate::services::metrics::*;
use crate::services::text_processor::{split_sentences, tokenize_words};

/// Tokens longer than two characters. Vocabulary-shape metrics use these so
/// articles and short particles do not dominate the counts.
fn clean_words(words: &[String]) -> Vec<String> {
    words.iter().filter(|w| w.chars().count() > 2).cloned().collect()
}

/// Compute the full metrics record for `text`.
pub fn analyze_text(text: &str, lexicon: &Lexicon) -> MetricsRecord {
    let sentences = split_sentences(text);
    let words = tokenize_words(text);
    let clean = clean_words(&words);

    MetricsRecord {
        perplexity: calculate_perplexity(&words),
        burstiness: calculate_burstiness(&sentences),
        average_words_per_sentence: calculate_average_words_per_sentence(&sentences),
        sentence_variability: calculate_sentence_variability(&sentences),
        lexical_diversity: calculate_lexical_diversity(&clean),
        readability_score: calculate_readability_score(&sentences, &words),
        syntactic_complexity: calculate_syntactic_complexity(&sentences),
        semantic_coherence: calculate_semantic_coherence(&sentences),
        n_gram_repetition: calculate_ngram_repetition(&words),
        punctuation_patterns: analyze_punctuation_patterns(text, &words),
        word_frequency_distribution: analyze_word_frequency_distribution(&clean),
        transition_density: calculate_transition_density(&clean, lexicon),
        formality_index: calculate_formality_index(&clean, lexicon),
        vocabulary_richness: calculate_vocabulary_richness(&clean),
        contextual_consistency: calculate_contextual_consistency(&sentences, lexicon),
        entropy_score: calculate_entropy_score(&words),
        human_likeness_indicators: calculate_human_likeness_indicators(text, &words, &sentences, lexicon),
        emotional_tone_variability: calculate_emotional_tone_variability(text, &words, lexicon),
        discourse_marker_patterns: calculate_discourse_marker_patterns(&clean, lexicon),
        function_word_analysis: calculate_function_word_analysis(&clean, lexicon),
        informalness_score: calculate_informalness_score(text, &words, &sentences, lexicon),
        sentence_structure_entropy: calculate_sentence_structure_entropy(&sentences),
        topic_coherence_score: calculate_topic_coherence_score(&sentences, lexicon),
        bigram_unusualness: calculate_bigram_unusualness(&words),
        stylometric_signature: calculate_stylometric_signature(text, &sentences, &words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAL: &str = "Artificial intelligence represents a significant advancement in modern \
        technology. Furthermore, it is important to note that these systems demonstrate remarkable \
        capabilities. Moreover, organizations are increasingly leveraging these tools to optimize \
        their operations.";

    #[test]
    fn test_clean_words_drops_short_tokens() {
        let words = tokenize_words("it is a big dog and an ox");
        assert_eq!(clean_words(&words), vec!["big", "dog", "and"]);
    }

    #[test]
    fn test_bounded_metrics_stay_in_range() {
        let m = analyze_text(FORMAL, Lexicon::standard());
        for value in [
            m.lexical_diversity,
            m.semantic_coherence,
            m.n_gram_repetition,
            m.vocabulary_richness,
            m.contextual_consistency,
            m.entropy_score,
            m.human_likeness_indicators,
            m.emotional_tone_variability,
            m.discourse_marker_patterns,
            m.function_word_analysis,
            m.informalness_score,
            m.sentence_structure_entropy,
            m.topic_coherence_score,
            m.bigram_unusualness,
            m.stylometric_signature,
        ] {
            assert!((0.0..=1.0).contains(&value), "out of range: {}", value);
        }
        assert!(m.perplexity > 0.0);
    }

    #[test]
    fn test_formal_sample_uses_transitions() {
        let m = analyze_text(FORMAL, Lexicon::standard());
        assert!(m.transition_density > 2.0);
        assert!(m.burstiness < 0.0);
        assert_eq!(m.informalness_score, 0.0);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let a = analyze_text(FORMAL, Lexicon::standard());
        let b = analyze_text(FORMAL, Lexicon::standard());
        assert_eq!(a, b);
    }
}
