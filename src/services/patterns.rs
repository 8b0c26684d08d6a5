// Pattern Constants
// Regular expressions used by the metric functions, one per linguistic
// phenomenon. Compiled lazily and shared for the life of the process.
//
// `\b` and `\w` are Unicode-aware: accented letters are word characters, so
// "Café" is one word and never yields a partial "Caf" match.

use regex::Regex;
use std::sync::OnceLock;

macro_rules! pattern {
    ($(#[$meta:meta])* $name:ident, $re:expr) => {
        $(#[$meta])*
        pub fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($re).expect(stringify!($name)))
        }
    };
}

/// Number of non-overlapping matches of `re` in `text`.
#[inline]
pub fn count(re: &Regex, text: &str) -> usize {
    re.find_iter(text).count()
}

// ============================================================================
// Syntax
// ============================================================================

pattern!(
    /// Subordinating conjunctions and relative pronouns opening a dependent clause.
    subordinator_re,
    r"(?i)\b(that|which|who|whom|whose|when|where|while|although|because|since|if|unless|until)\b"
);

pattern!(
    /// Coordinating conjunctions.
    conjunction_re,
    r"(?i)\b(and|but|or|yet|so|for|nor)\b"
);

// Standalone "and", for run-on detection.
pattern!(and_re, r"(?i)\band\b");

// ============================================================================
// Human-likeness and informality
// ============================================================================

pattern!(
    /// Contractions such as don't, we're, I've, she'll, he'd, it's, I'm.
    /// Typographic apostrophes (it’s) count the same as ASCII ones, so
    /// smart-quoted text scores as informal as plain-quoted text.
    contraction_re,
    r"(?i)\b\w+['\u{2019}](?:t|re|ve|ll|d|s|m)\b"
);

pattern!(
    /// Words with three or more vowels in a row, a cheap misspelling signal.
    triple_vowel_re,
    r"(?i)\b[a-z]*[aeiou]{3,}[a-z]*\b"
);

// Runs of two or more whitespace characters (sloppy spacing).
pattern!(double_space_re, r"\s{2,}");

// ASCII word runs, used to scan for stretched letters ("sooo").
pattern!(ascii_word_re, r"[A-Za-z0-9_]+");

pattern!(
    /// First-person pronouns.
    personal_pronoun_re,
    r"(?i)\b(I|me|my|mine|myself|we|us|our|ours)\b"
);

pattern!(
    /// Doubled exclamation/question marks and ellipses.
    emotional_punct_re,
    r"!{2,}|\?{2,}|\.{3,}"
);

// Whole words in capitals, i.e. shouting.
pattern!(caps_word_re, r"\b[A-Z]{2,}\b");

pattern!(
    /// Internet slang and chat abbreviations.
    internet_slang_re,
    r"(?i)\b(lol|lmao|omg|wtf|btw|tbh|imho|imo|ngl|smh|fml|irl|rn|af|fr|periodt|idk|ikr|brb|ttyl|dm|pm|sus|lit|fam|bae|goat|facts|no cap|bet|vibe|mood)\b"
);

pattern!(
    /// One-word answers that make a short sentence a reply rather than a fragment.
    fragment_exempt_re,
    r"(?i)^(yes|no|ok|okay|yeah|nah|sure|maybe|absolutely|definitely)$"
);

pattern!(
    /// Spoken fillers, hedges and intensifiers.
    conversational_marker_re,
    r"(?i)\b(like|you know|I mean|right|so|well|um|uh|actually|basically|literally|honestly|seriously|obviously|apparently|supposedly|kinda|sorta|maybe|probably|definitely|absolutely|totally|completely|exactly|precisely)\b"
);

pattern!(
    /// Spoken fillers plus phonetic contractions, as used by the informality score.
    conversational_word_re,
    r"(?i)\b(like|you know|I mean|right|so|well|um|uh|actually|basically|literally|honestly|seriously|obviously|apparently|kinda|sorta|gonna|wanna|gotta)\b"
);

pattern!(
    /// Descriptive turns of phrase from a single literary excerpt.
    literary_phrase_re,
    r"(?i)\b(nearly twice|hardly any|very large|came in very useful|no finer|big beefy|which made|although he did|spent so much|craning over|spying on)\b"
);

pattern!(
    /// Storytelling vocabulary (titles, naming, family and social roles).
    /// The `Mr\.` arms only match when a word character follows the period.
    storytelling_re,
    r"(?i)\b(Mr\.|Mrs\.|called|named|director|firm|son|opinion|neighbors|mustache|blonde)\b"
);

pattern!(
    /// Third-person pronouns typical of narration.
    third_person_re,
    r"(?i)\b(he|she|they|him|her|them|his|hers|their|theirs)\b"
);

// Two or more sentence-ending marks in a row ("?!", "...").
pattern!(multi_end_punct_re, r"[.!?]{2,}");

// ============================================================================
// Emotion
// ============================================================================

pattern!(
    /// Strongly valenced emotion words.
    emotional_word_re,
    r"(?i)\b(love|hate|excited|frustrated|angry|happy|sad|worried|anxious|amazing|terrible|awesome|awful|horrible|wonderful|fantastic|disgusting|annoying|brilliant|stupid|crazy|insane|wild|mad|furious|thrilled|devastated|shocked|surprised|confused|overwhelmed)\b"
);

// ============================================================================
// Style
// ============================================================================

// Sentence and clause punctuation counted by the punctuation-pattern metric.
pattern!(punctuation_re, r"[.!?;:,]");

// ============================================================================
// Narrative and creativity
// ============================================================================

// Capitalized words (names, places, sentence starts).
pattern!(proper_noun_re, r"\b[A-Z][a-z]+\b");

pattern!(
    /// Past-tense endings and common irregular narrative verbs glued to a word stem.
    past_tense_re,
    r"(?i)\b\w+(ed|was|were|had|did|said|went|came|saw|looked|thought|felt|knew|told|asked|answered|walked|turned|opened|closed)\b"
);

pattern!(
    /// Concrete descriptive adjectives.
    descriptive_re,
    r"(?i)\b(big|small|large|tiny|huge|enormous|beautiful|ugly|old|young|tall|short|fat|thin|thick|wide|narrow|bright|dark|loud|quiet|soft|hard|smooth|rough|hot|cold|warm|cool|dry|wet|clean|dirty|new|fresh|stale|sweet|sour|bitter|salty|spicy|mild|strong|weak|heavy|light|fast|slow|quick|careful|gentle|kind|mean|nice|bad|good|excellent|terrible|wonderful|awful|amazing|boring|interesting|exciting|scary|funny|sad|happy|angry|surprised|confused|tired|energetic)\b"
);

// Quote marks that open or close dialogue.
pattern!(dialogue_re, r#"["']"#);

pattern!(
    /// Simile and comparison markers.
    simile_re,
    r"(?i)\b(like|as|seemed|appeared|looked like|sounded like|felt like|was like|were like)\b"
);

pattern!(
    /// Unusual descriptive combinations from a single literary excerpt.
    creative_phrase_re,
    r"(?i)\b(nearly twice|hardly any|very large|came in very useful|no finer|so much of|which made|although he did)\b"
);

pattern!(
    /// Vivid imagery vocabulary from a single literary excerpt.
    imagery_re,
    r"(?i)\b(craning|spying|mustache|beefy|blonde|drilling|garden fences|neighbors|opinion|director|firm)\b"
);

pattern!(
    /// Everyday concrete nouns.
    concrete_noun_re,
    r"(?i)\b(drill|mustache|neck|fence|garden|neighbor|son|boy|director|firm|company|house|car|door|window|street|road|tree|flower|table|chair|book|phone|computer|cat|dog|bird|food|water|coffee|tea|money|time|day|night|morning|evening|sun|moon|star|cloud|rain|snow|wind|fire|ice|rock|sand|grass|leaf|branch|root|seed)\b"
);

pattern!(
    /// Character introductions, including names from a single literary excerpt.
    character_focus_re,
    r"(?i)\b(Mr\.|Mrs\.|Dursley|Dudley|Grunnings|called|named|known as)\b"
);

/// Count ASCII word runs containing the same letter three or more times in a
/// row, ignoring case ("soooo", "AAArgh").
pub fn count_stretched_words(text: &str) -> usize {
    ascii_word_re()
        .find_iter(text)
        .filter(|m| has_letter_run(m.as_str(), 3))
        .count()
}

fn has_letter_run(word: &str, min_run: usize) -> bool {
    let mut prev: Option<u8> = None;
    let mut run = 0usize;
    for b in word.bytes() {
        if !b.is_ascii_alphabetic() {
            prev = None;
            run = 0;
            continue;
        }
        let lower = b.to_ascii_lowercase();
        if prev == Some(lower) {
            run += 1;
        } else {
            prev = Some(lower);
            run = 1;
        }
        if run >= min_run {
            return true;
        }
    }
    false
}
