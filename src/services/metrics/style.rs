// Readability and Style
// Readability, punctuation habits, transition and formal vocabulary, and a
// composite stylometric signature

use super::mean_std;
use crate::services::lexicon::Lexicon;
use crate::services::patterns::{count, punctuation_re};
use crate::services::text_processor::sentence_word_count;
use std::collections::HashSet;

/// Punctuation marks whose variety feeds the stylometric signature.
const SIGNATURE_PUNCTUATION: &[char] = &['.', '!', '?', ';', ':', ',', '-', '(', ')'];

/// Simplified Flesch-Kincaid: `206.835 − 1.015·words/sentence − 84.6·long-word
/// ratio`, where a long word has more than six characters. Unbounded.
pub fn calculate_readability_score(sentences: &[String], words: &[String]) -> f64 {
    if words.is_empty() {
        return 206.835;
    }
    let avg_words_per_sentence = words.len() as f64 / sentences.len().max(1) as f64;
    let complex_words = words.iter().filter(|w| w.chars().count() > 6).count();
    let complex_ratio = complex_words as f64 / words.len() as f64;
    206.835 - 1.015 * avg_words_per_sentence - 84.6 * complex_ratio
}

/// Rewards the moderate, regular punctuation typical of generated prose:
/// +0.3 for overall punctuation density in (0.05, 0.15), +0.3 for comma
/// density in (0.02, 0.08) and +0.2 for semicolon density in (0.001, 0.01),
/// each measured per word.
pub fn analyze_punctuation_patterns(text: &str, words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let n = words.len() as f64;
    let punctuation_ratio = count(punctuation_re(), text) as f64 / n;
    let comma_ratio = text.matches(',').count() as f64 / n;
    let semicolon_ratio = text.matches(';').count() as f64 / n;

    let mut score = 0.0;
    if punctuation_ratio > 0.05 && punctuation_ratio < 0.15 {
        score += 0.3;
    }
    if comma_ratio > 0.02 && comma_ratio < 0.08 {
        score += 0.3;
    }
    if semicolon_ratio > 0.001 && semicolon_ratio < 0.01 {
        score += 0.2;
    }
    score
}

/// Percentage of words that contain a transition word.
pub fn calculate_transition_density(words: &[String], lexicon: &Lexicon) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let transitions = words.iter().filter(|w| lexicon.contains_transition(w)).count();
    transitions as f64 / words.len() as f64 * 100.0
}

/// Rate of sophisticated vocabulary relative to the rate of common words,
/// with the common-word rate floored at 0.1.
pub fn calculate_formality_index(words: &[String], lexicon: &Lexicon) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let n = words.len() as f64;
    let sophisticated = words.iter().filter(|w| lexicon.is_sophisticated_word(w)).count();
    let common = words.iter().filter(|w| lexicon.is_common_word(w)).count();
    (sophisticated as f64 / n) / (common as f64 / n).max(0.1)
}

/// Mean of four variability components, each capped at 1: sentence-length
/// coefficient of variation, word-length coefficient of variation,
/// punctuation variety out of eight, and distinct sentence openers.
pub fn calculate_stylometric_signature(text: &str, sentences: &[String], words: &[String]) -> f64 {
    let sentence_lengths: Vec<f64> = sentences.iter().map(|s| sentence_word_count(s) as f64).collect();
    let word_lengths: Vec<f64> = words.iter().map(|w| w.chars().count() as f64).collect();

    let sentence_component = coefficient_of_variation(&sentence_lengths);
    let word_component = coefficient_of_variation(&word_lengths);

    let punctuation_types: HashSet<char> = text.chars().filter(|c| SIGNATURE_PUNCTUATION.contains(c)).collect();
    let punctuation_component = (punctuation_types.len() as f64 / 8.0).min(1.0);

    let openers: Vec<String> = sentences
        .iter()
        .filter_map(|s| s.split_whitespace().next())
        .map(|w| w.to_lowercase())
        .collect();
    let opener_component = if openers.is_empty() {
        0.0
    } else {
        let unique: HashSet<&str> = openers.iter().map(|w| w.as_str()).collect();
        (unique.len() as f64 / openers.len() as f64).min(1.0)
    };

    (sentence_component + word_component + punctuation_component + opener_component) / 4.0
}

fn coefficient_of_variation(values: &[f64]) -> f64 {
    let (mean, std_dev) = mean_std(values);
    if mean <= 0.0 {
        return 0.0;
    }
    (std_dev / mean).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::metrics::words_of;
    use crate::services::text_processor::split_sentences;

    #[test]
    fn test_readability() {
        let text = "The cat sat. The dog ran.";
        let score = calculate_readability_score(&split_sentences(text), &words_of(text));
        assert!((score - (206.835 - 1.015 * 3.0)).abs() < 1e-9);
        assert_eq!(calculate_readability_score(&[], &[]), 206.835);
    }

    #[test]
    fn test_long_words_lower_readability() {
        let plain = "We ate some food and went home to rest.";
        let dense = "Organizational methodologies facilitate comprehensive transformation.";
        let plain_score = calculate_readability_score(&split_sentences(plain), &words_of(plain));
        let dense_score = calculate_readability_score(&split_sentences(dense), &words_of(dense));
        assert!(plain_score > dense_score);
    }

    #[test]
    fn test_punctuation_bands() {
        // 20 words, 2 commas, 1 period: punctuation 0.15 (outside), comma 0.1 (outside).
        let noisy = "one, two three four five six seven eight nine ten, eleven twelve thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty.";
        assert_eq!(analyze_punctuation_patterns(noisy, &words_of(noisy)), 0.0);
        // 20 words, 1 comma, 1 period: punctuation 0.1, comma 0.05.
        let moderate = "one two three four five six seven eight nine ten, eleven twelve thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty.";
        assert!((analyze_punctuation_patterns(moderate, &words_of(moderate)) - 0.6).abs() < 1e-12);
        assert_eq!(analyze_punctuation_patterns("", &[]), 0.0);
    }

    #[test]
    fn test_transition_density() {
        let lexicon = Lexicon::standard();
        let words = words_of("however we went home moreover");
        assert!((calculate_transition_density(&words, lexicon) - 40.0).abs() < 1e-9);
        assert_eq!(calculate_transition_density(&[], lexicon), 0.0);
    }

    #[test]
    fn test_formality_index_floors_common_rate() {
        let lexicon = Lexicon::standard();
        // 2 sophisticated of 4 words, no common words: 0.5 / 0.1.
        let words = words_of("leverage synergy quickly today");
        assert!((calculate_formality_index(&words, lexicon) - 5.0).abs() < 1e-12);
        let casual = words_of("the dog and the cat");
        assert_eq!(calculate_formality_index(&casual, lexicon), 0.0);
    }

    #[test]
    fn test_stylometric_signature_is_bounded() {
        let text = "Wait! Really, you did that? Yes; I did (mostly). Then - silence: nothing.";
        let signature = calculate_stylometric_signature(text, &split_sentences(text), &words_of(text));
        assert!(signature > 0.0 && signature <= 1.0);
        assert_eq!(calculate_stylometric_signature("", &[], &[]), 0.0);
    }

    #[test]
    fn test_repeated_openers_lower_signature() {
        let varied = "Dogs bark loudly. Cats purr softly. Birds sing early.";
        let repeated = "It barks loudly. It purrs softly. It sings early.";
        let varied_sig = calculate_stylometric_signature(varied, &split_sentences(varied), &words_of(varied));
        let repeated_sig =
            calculate_stylometric_signature(repeated, &split_sentences(repeated), &words_of(repeated));
        assert!(varied_sig > repeated_sig);
    }
}
