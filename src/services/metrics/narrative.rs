// Narrative and Creative Writing
// Fiction markers used to raise the decision threshold for storytelling,
// where uniform human prose would otherwise read as generated

use super::capped;
use crate::services::patterns::{
    character_focus_re, concrete_noun_re, count, creative_phrase_re, descriptive_re, dialogue_re,
    imagery_re, past_tense_re, proper_noun_re, simile_re, third_person_re,
};

/// Mean of five indicators: capitalized names, past-tense verbs, descriptive
/// adjectives, quote marks and third-person pronouns.
pub fn calculate_narrative_score(text: &str, words: &[String]) -> f64 {
    let n = words.len() as f64;
    let indicators = [
        capped(count(proper_noun_re(), text), (n * 0.1).max(1.0), 1.0),
        capped(count(past_tense_re(), text), (n * 0.1).max(1.0), 1.0),
        capped(count(descriptive_re(), text), (n * 0.08).max(1.0), 1.0),
        capped(count(dialogue_re(), text), 10.0, 0.8),
        capped(count(third_person_re(), text), (n * 0.05).max(1.0), 1.0),
    ];
    indicators.iter().sum::<f64>() / indicators.len() as f64
}

/// Mean of five indicators: similes, unusual descriptive phrasing, vivid
/// imagery, concrete nouns and character introductions.
pub fn calculate_creativity_score(text: &str, words: &[String]) -> f64 {
    let n = words.len() as f64;
    let indicators = [
        capped(count(simile_re(), text), (n * 0.05).max(1.0), 1.0),
        capped(count(creative_phrase_re(), text), 5.0, 1.0),
        capped(count(imagery_re(), text), (n * 0.1).max(1.0), 1.0),
        capped(count(concrete_noun_re(), text), (n * 0.08).max(1.0), 1.0),
        capped(count(character_focus_re(), text), 8.0, 1.0),
    ];
    indicators.iter().sum::<f64>() / indicators.len() as f64
}
