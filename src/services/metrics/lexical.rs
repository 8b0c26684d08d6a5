// Lexical Analysis
// Vocabulary diversity and word-frequency shape

use super::frequency_table;
use std::collections::HashSet;

/// Type-token ratio.
pub fn calculate_lexical_diversity(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = words.iter().map(|w| w.as_str()).collect();
    unique.len() as f64 / words.len() as f64
}

/// Share of distinct words that occur exactly once (hapax legomena).
pub fn calculate_vocabulary_richness(words: &[String]) -> f64 {
    let counts = frequency_table(words);
    if counts.is_empty() {
        return 0.0;
    }
    let hapax = counts.values().filter(|&&c| c == 1).count();
    hapax as f64 / counts.len() as f64
}

/// How closely the ten most frequent words follow a Zipfian `f0 / (rank + 1)`
/// curve: mean of `min(actual, expected) / max(actual, expected)` over ranks
/// 1 to 9. Needs at least two distinct words.
pub fn analyze_word_frequency_distribution(words: &[String]) -> f64 {
    let mut frequencies: Vec<usize> = frequency_table(words).into_values().collect();
    if frequencies.len() < 2 {
        return 0.0;
    }
    frequencies.sort_unstable_by(|a, b| b.cmp(a));

    let top = frequencies[0] as f64;
    let ranks = frequencies.len().min(10);
    let mut zipf_score = 0.0;
    for (i, &freq) in frequencies.iter().enumerate().take(ranks).skip(1) {
        let expected = top / (i as f64 + 1.0);
        let actual = freq as f64;
        zipf_score += actual.min(expected) / actual.max(expected);
    }

    zipf_score / (frequencies.len() - 1).min(9) as f64
}

/// Shannon entropy of the word distribution normalized by its maximum
/// `log2(min(distinct, total))`. A single repeated word has no spread and
/// scores 0.
pub fn calculate_entropy_score(words: &[String]) -> f64 {
    let counts = frequency_table(words);
    if counts.len() < 2 {
        return 0.0;
    }

    let total = words.len() as f64;
    let entropy: f64 = counts
        .values()
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum();

    entropy / (counts.len().min(words.len()) as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::metrics::words_of;

    #[test]
    fn test_lexical_diversity() {
        assert_eq!(calculate_lexical_diversity(&words_of("a b a b")), 0.5);
        assert_eq!(calculate_lexical_diversity(&[]), 0.0);
    }

    #[test]
    fn test_vocabulary_richness_counts_hapax() {
        // "x" and "y" occur once, "z" twice.
        let richness = calculate_vocabulary_richness(&words_of("x y z z"));
        assert!((richness - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(calculate_vocabulary_richness(&[]), 0.0);
    }

    #[test]
    fn test_perfect_zipf_scores_one() {
        // Frequencies 6, 3, 2 follow 6/1, 6/2, 6/3 exactly.
        let text = "a a a a a a b b b c c";
        assert!((analyze_word_frequency_distribution(&words_of(text)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zipf_degenerate() {
        assert_eq!(analyze_word_frequency_distribution(&words_of("same same same")), 0.0);
        assert_eq!(analyze_word_frequency_distribution(&[]), 0.0);
    }

    #[test]
    fn test_entropy_bounds() {
        assert_eq!(calculate_entropy_score(&words_of("alpha beta gamma delta")), 1.0);
        assert_eq!(calculate_entropy_score(&words_of("echo echo echo")), 0.0);
        let skewed = calculate_entropy_score(&words_of("a a a a a a a b"));
        assert!(skewed > 0.0 && skewed < 1.0);
    }
}
