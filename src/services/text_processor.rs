// Text Processing Service
// Word tokenization and naive sentence segmentation shared by every metric

use regex::Regex;
use std::sync::OnceLock;

use super::lexicon::Lexicon;

fn non_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Anything that is not an ASCII word char, whitespace, apostrophe or hyphen.
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s'-]").expect("non-word regex"))
}

fn sentence_end_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence end regex"))
}

/// Lower-case the text, blank out everything but word characters, apostrophes
/// and hyphens, then split on whitespace.
pub fn tokenize_words(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let lowered = text.to_lowercase();
    non_word_re()
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

/// Split on runs of `.`, `!` and `?`. Abbreviations, decimals and ellipses are
/// not special-cased.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    sentence_end_re()
        .split(text)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Number of whitespace-separated pieces in a (trimmed) sentence.
pub fn sentence_word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count().max(1)
}

/// Content-bearing words of a sentence: longer than four characters and
/// neither a common word nor a transition word.
pub fn extract_topic_words(sentence: &str, lexicon: &Lexicon) -> Vec<String> {
    tokenize_words(sentence)
        .into_iter()
        .filter(|w| {
            w.chars().count() > 4 && !lexicon.is_common_word(w) && !lexicon.is_transition_word(w)
        })
        .collect()
}
