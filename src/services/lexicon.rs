// Lexicon Tables
// Read-only word lists and pattern sets shared by the metric functions.
// Built once per process and handed to metrics explicitly as `&Lexicon`.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const COMMON_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their",
];

const FUNCTION_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so", "up",
    "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like",
    "time", "no", "just", "him", "know", "take", "people", "into", "year", "your", "good",
    "some", "could", "them", "see", "other", "than", "then", "now", "look", "only", "come",
    "its", "over", "think", "also", "back", "after", "use", "two", "how", "our", "work",
    "first", "well", "way", "even", "new", "want", "because", "any", "these", "give", "day",
    "most", "us",
];

const TRANSITION_WORDS: &[&str] = &[
    "however", "furthermore", "moreover", "additionally", "consequently", "therefore", "thus",
    "hence", "nevertheless", "nonetheless", "meanwhile", "subsequently", "ultimately",
    "essentially", "specifically", "particularly", "notably", "importantly", "significantly",
    "interestingly", "surprisingly", "accordingly", "alternatively", "comparatively",
    "conversely", "similarly", "likewise", "simultaneously",
];

/// Vocabulary that machine-generated prose leans on.
const SOPHISTICATED_WORDS: &[&str] = &[
    "utilize", "facilitate", "demonstrate", "implement", "establish", "maintain", "require",
    "appropriate", "significant", "considerable", "substantial", "comprehensive", "extensive",
    "innovative", "strategic", "optimize", "enhance", "leverage", "paradigm", "methodology",
    "framework", "initiative", "synergy",
];

const DISCOURSE_MARKERS: &[&str] = &[
    "first", "second", "third", "finally", "lastly", "initially", "subsequently", "meanwhile",
    "simultaneously", "on the other hand", "in contrast", "however", "nevertheless",
    "for instance", "for example", "such as", "namely", "in fact", "indeed", "actually",
    "certainly", "admittedly", "granted", "of course", "naturally",
];

const SLANG_PATTERNS: &[&str] = &[
    // chat abbreviations
    r"(?i)\b(lol|lmao|omg|wtf|btw|tbh|imho|imo)\b",
    // phonetic contractions
    r"(?i)\b(gonna|wanna|gotta|kinda|sorta|dunno)\b",
    // spoken yes/no and interjections
    r"(?i)\b(yeah|yep|nah|nope|meh|ugh|hmm)\b",
    // casual intensifiers
    r"(?i)\b(super|really|pretty|kinda|totally|absolutely)\b",
    // loaded casual adjectives
    r"(?i)\b(awesome|amazing|terrible|awful|weird|crazy)\b",
];

const EMOTIONAL_MARKER_PATTERNS: &[&str] = &[
    // named emotions
    r"(?i)\b(love|hate|excited|frustrated|angry|happy|sad|worried|anxious)\b",
    // talking about feelings
    r"(?i)\b(feel|felt|feeling|emotions|emotional|mood)\b",
    // stacked punctuation
    r"(!{2,}|\?{2,}|\.{3,})",
    // shouting in capitals
    r"[A-Z]{2,}",
];

pub struct Lexicon {
    common_words: HashSet<&'static str>,
    function_words: HashSet<&'static str>,
    sophisticated_words: HashSet<&'static str>,
    transition_words: &'static [&'static str],
    discourse_markers: &'static [&'static str],
    slang_patterns: Vec<Regex>,
    emotional_markers: Vec<Regex>,
}

impl Lexicon {
    fn new() -> Self {
        Self {
            common_words: COMMON_WORDS.iter().copied().collect(),
            function_words: FUNCTION_WORDS.iter().copied().collect(),
            sophisticated_words: SOPHISTICATED_WORDS.iter().copied().collect(),
            transition_words: TRANSITION_WORDS,
            discourse_markers: DISCOURSE_MARKERS,
            slang_patterns: compile_all(SLANG_PATTERNS),
            emotional_markers: compile_all(EMOTIONAL_MARKER_PATTERNS),
        }
    }

    /// The built-in English tables, compiled on first use.
    pub fn standard() -> &'static Lexicon {
        static LEXICON: OnceLock<Lexicon> = OnceLock::new();
        LEXICON.get_or_init(Lexicon::new)
    }

    pub fn is_common_word(&self, word: &str) -> bool {
        self.common_words.contains(word)
    }

    pub fn is_function_word(&self, word: &str) -> bool {
        self.function_words.contains(word)
    }

    pub fn is_sophisticated_word(&self, word: &str) -> bool {
        self.sophisticated_words.contains(word)
    }

    /// Exact membership in the transition list.
    pub fn is_transition_word(&self, word: &str) -> bool {
        self.transition_words.contains(&word)
    }

    /// True when any transition word occurs inside `word` ("however" matches "however's").
    pub fn contains_transition(&self, word: &str) -> bool {
        self.transition_words.iter().any(|tw| word.contains(tw))
    }

    /// True when `word` occurs inside some discourse marker, so "fact" and
    /// "other" both count through "in fact" and "on the other hand".
    pub fn is_discourse_fragment(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.discourse_markers.iter().any(|m| m.contains(word.as_str()))
    }

    /// Total slang hits across all slang patterns; overlapping lists count twice.
    pub fn count_slang(&self, text: &str) -> usize {
        self.slang_patterns.iter().map(|re| re.find_iter(text).count()).sum()
    }

    pub fn count_emotional_markers(&self, text: &str) -> usize {
        self.emotional_markers.iter().map(|re| re.find_iter(text).count()).sum()
    }
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("lexicon pattern"))
        .collect()
}
