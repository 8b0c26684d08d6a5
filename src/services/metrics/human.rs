// Human Writing Signals
// Informal, personal and emotional markers that generated prose tends to lack,
// plus the discourse-marker and function-word distributions

use super::capped;
use crate::services::lexicon::Lexicon;
use crate::services::patterns::{
    and_re, caps_word_re, contraction_re, conversational_marker_re, conversational_word_re,
    count, count_stretched_words, double_space_re, emotional_punct_re, emotional_word_re,
    fragment_exempt_re, internet_slang_re, literary_phrase_re, multi_end_punct_re,
    personal_pronoun_re, storytelling_re, third_person_re, triple_vowel_re,
};

/// Mean of twelve bounded sub-indicators: slang, contractions, typo-like
/// spelling, first-person pronouns, emotional punctuation, shouting, internet
/// slang, fragments, conversational fillers, literary phrasing, storytelling
/// vocabulary and third-person narration. Result lies in [0, 1].
pub fn calculate_human_likeness_indicators(
    text: &str,
    words: &[String],
    sentences: &[String],
    lexicon: &Lexicon,
) -> f64 {
    let n = words.len() as f64;

    let typo_like = count(triple_vowel_re(), text)
        + count_stretched_words(text)
        + count(double_space_re(), text);

    let fragments = sentences
        .iter()
        .filter(|s| {
            let tokens: Vec<&str> = s.split_whitespace().collect();
            tokens.len() < 4 && !tokens.iter().any(|t| fragment_exempt_re().is_match(t))
        })
        .count();

    let indicators = [
        capped(lexicon.count_slang(text), 3.0, 1.0),
        capped(count(contraction_re(), text), 5.0, 1.0),
        capped(typo_like, 5.0, 1.0),
        capped(count(personal_pronoun_re(), text), (n * 0.05).max(1.0), 1.0),
        capped(count(emotional_punct_re(), text), 3.0, 1.0),
        capped(count(caps_word_re(), text), 5.0, 1.0),
        capped(count(internet_slang_re(), text), 2.0, 1.0),
        capped(fragments, (sentences.len() as f64 * 0.3).max(1.0), 0.8),
        capped(count(conversational_marker_re(), text), (n * 0.1).max(1.0), 1.0),
        capped(count(literary_phrase_re(), text), 3.0, 1.0),
        capped(count(storytelling_re(), text), 5.0, 0.8),
        capped(count(third_person_re(), text), (n * 0.08).max(1.0), 0.7),
    ];

    indicators.iter().sum::<f64>() / indicators.len() as f64
}

/// Density of emotional signals (lexicon markers, `!`, `?` and strongly
/// valenced words) against one signal per ten words, capped at 1.
pub fn calculate_emotional_tone_variability(text: &str, words: &[String], lexicon: &Lexicon) -> f64 {
    let signals = lexicon.count_emotional_markers(text)
        + text.matches('!').count()
        + text.matches('?').count()
        + count(emotional_word_re(), text);
    capped(signals, (words.len() as f64 * 0.1).max(1.0), 1.0)
}

/// Mean of seven informality features: contraction rate, slang, fragments,
/// stacked end punctuation, conversational words, lowercase sentence starts
/// and run-on sentences.
pub fn calculate_informalness_score(
    text: &str,
    words: &[String],
    sentences: &[String],
    lexicon: &Lexicon,
) -> f64 {
    let n = words.len() as f64;
    let s = sentences.len() as f64;

    let fragments = sentences
        .iter()
        .filter(|sentence| sentence.split_whitespace().count() < 4)
        .count();
    let lowercase_starts = sentences
        .iter()
        .filter(|sentence| {
            sentence
                .trim()
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_lowercase())
        })
        .count();
    let run_ons = sentences
        .iter()
        .filter(|sentence| count(and_re(), sentence) > 2 && sentence.split_whitespace().count() > 20)
        .count();

    let features = [
        capped(count(contraction_re(), text), (n * 0.1).max(1.0), 1.0),
        capped(lexicon.count_slang(text), 5.0, 1.0),
        capped(fragments, (s * 0.4).max(1.0), 1.0),
        capped(count(multi_end_punct_re(), text), 5.0, 1.0),
        capped(count(conversational_word_re(), text), (n * 0.05).max(1.0), 1.0),
        capped(lowercase_starts, (s * 0.3).max(1.0), 1.0),
        capped(run_ons, (s * 0.5).max(1.0), 0.8),
    ];

    features.iter().sum::<f64>() / features.len() as f64
}

/// Share of words that appear inside some discourse marker, scaled by 50 and
/// capped at 1.
pub fn calculate_discourse_marker_patterns(words: &[String], lexicon: &Lexicon) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let markers = words.iter().filter(|w| lexicon.is_discourse_fragment(w)).count();
    (markers as f64 / words.len() as f64 * 50.0).min(1.0)
}

/// Distance of the function-word ratio from the 40-60% band of ordinary
/// prose. Inside the band scores a flat 0.2.
pub fn calculate_function_word_analysis(words: &[String], lexicon: &Lexicon) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let function_words = words
        .iter()
        .filter(|w| lexicon.is_function_word(&w.to_lowercase()))
        .count();
    let ratio = function_words as f64 / words.len() as f64;
    if (0.4..=0.6).contains(&ratio) {
        0.2
    } else {
        ((ratio - 0.5).abs() * 2.0).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::metrics::words_of;
    use crate::services::text_processor::split_sentences;

    fn human_likeness(text: &str) -> f64 {
        calculate_human_likeness_indicators(text, &words_of(text), &split_sentences(text), Lexicon::standard())
    }

    fn informalness(text: &str) -> f64 {
        calculate_informalness_score(text, &words_of(text), &split_sentences(text), Lexicon::standard())
    }

    const CASUAL: &str = "lol so i was at the store yesterday and omg you won't believe it!! \
        this guy was like totally yelling at the cashier... i'm not even kidding, it was SO awkward. \
        anyway i just grabbed my snacks and left lmao";

    const FORMAL: &str = "Artificial intelligence represents a significant advancement in modern \
        technology. Furthermore, it is important to note that these systems demonstrate remarkable \
        capabilities. Moreover, organizations are increasingly leveraging these tools to optimize \
        their operations.";

    #[test]
    fn test_human_likeness_is_bounded() {
        for text in [CASUAL, FORMAL, "", "a"] {
            let score = human_likeness(text);
            assert!((0.0..=1.0).contains(&score), "{} for {:?}", score, text);
        }
    }

    #[test]
    fn test_casual_text_is_more_human() {
        assert!(human_likeness(CASUAL) > human_likeness(FORMAL));
        assert!(human_likeness(CASUAL) > 0.3);
    }

    #[test]
    fn test_exempt_one_word_replies_are_not_fragments() {
        // Both sentences are short; only the second counts as a fragment.
        let replied = "Sure. The weather was really quite nice today for a walk.";
        let fragmented = "Gone now. The weather was really quite nice today for a walk.";
        assert!(human_likeness(fragmented) > human_likeness(replied));
    }

    #[test]
    fn test_emotional_tone() {
        let lexicon = Lexicon::standard();
        let calm = "The committee reviewed the quarterly budget and approved the plan.";
        assert_eq!(calculate_emotional_tone_variability(calm, &words_of(calm), lexicon), 0.0);
        let excited = "I love this so much! Are you serious? This is amazing!";
        let score = calculate_emotional_tone_variability(excited, &words_of(excited), lexicon);
        assert!(score > 0.5 && score <= 1.0);
    }

    #[test]
    fn test_informalness() {
        assert!(informalness(CASUAL) > informalness(FORMAL));
        let score = informalness(CASUAL);
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_lowercase_starts_raise_informality() {
        let lower = "we went out early. then we came back home late.";
        let upper = "We went out early. Then we came back home late.";
        assert!(informalness(lower) > informalness(upper));
    }

    #[test]
    fn test_discourse_markers() {
        let lexicon = Lexicon::standard();
        assert_eq!(calculate_discourse_marker_patterns(&[], lexicon), 0.0);
        let words = words_of("indeed the results are clear");
        assert_eq!(calculate_discourse_marker_patterns(&words, lexicon), 1.0);
    }

    #[test]
    fn test_function_word_band() {
        let lexicon = Lexicon::standard();
        assert_eq!(calculate_function_word_analysis(&[], lexicon), 0.0);
        // Two function words of four sits inside the band.
        let balanced = words_of("the cat and dog");
        assert_eq!(calculate_function_word_analysis(&balanced, lexicon), 0.2);
        // No function words at all is maximally off.
        let content = words_of("purple elephants dance gracefully");
        assert_eq!(calculate_function_word_analysis(&content, lexicon), 1.0);
    }
}
