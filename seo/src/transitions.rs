//! Transition-word dictionary
//!
//! Connector words are a cheap readability signal. Matching is done per
//! whitespace token, so the multi-word phrases below can only match when a
//! caller's text somehow contains them as a single token, which whitespace
//! splitting rules out.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Fixed dictionary of transition words and phrases, lowercase.
pub const TRANSITION_WORDS: &[&str] = &[
    // addition
    "additionally",
    "also",
    "and",
    "besides",
    "furthermore",
    "moreover",
    "too",
    "again",
    "further",
    "likewise",
    "similarly",
    "equally",
    "plus",
    "in addition",
    "as well as",
    "not only",
    "but also",
    "along with",
    "coupled with",
    "what is more",
    "in the same way",
    // contrast
    "however",
    "but",
    "yet",
    "although",
    "though",
    "nevertheless",
    "nonetheless",
    "conversely",
    "instead",
    "whereas",
    "while",
    "despite",
    "notwithstanding",
    "still",
    "otherwise",
    "rather",
    "alternatively",
    "regardless",
    "on the other hand",
    "in contrast",
    "even so",
    "even though",
    "on the contrary",
    "by contrast",
    "in spite of",
    "at the same time",
    // cause and effect
    "because",
    "since",
    "therefore",
    "thus",
    "hence",
    "consequently",
    "accordingly",
    "so",
    "thereby",
    "wherefore",
    "due to",
    "as a result",
    "for this reason",
    "because of",
    "owing to",
    "as a consequence",
    "so that",
    "in order to",
    // sequence and time
    "first",
    "firstly",
    "second",
    "secondly",
    "third",
    "thirdly",
    "next",
    "then",
    "finally",
    "lastly",
    "afterward",
    "afterwards",
    "later",
    "meanwhile",
    "subsequently",
    "previously",
    "before",
    "after",
    "earlier",
    "eventually",
    "initially",
    "simultaneously",
    "until",
    "now",
    "soon",
    "once",
    "whenever",
    "formerly",
    "presently",
    "immediately",
    "to begin with",
    "in the meantime",
    "at first",
    "at last",
    "in the end",
    "after that",
    "following this",
    "at this point",
    // example and emphasis
    "namely",
    "specifically",
    "notably",
    "especially",
    "particularly",
    "indeed",
    "certainly",
    "undoubtedly",
    "obviously",
    "clearly",
    "surely",
    "truly",
    "importantly",
    "significantly",
    "chiefly",
    "mainly",
    "mostly",
    "primarily",
    "including",
    "like",
    "such",
    "for example",
    "for instance",
    "to illustrate",
    "such as",
    "in particular",
    "in fact",
    "above all",
    "of course",
    "to be sure",
    "in other words",
    "that is",
    "to clarify",
    "to put it differently",
    // condition and concession
    "if",
    "unless",
    "provided",
    "whether",
    "granted",
    "admittedly",
    "albeit",
    "even if",
    "in case",
    "as long as",
    "provided that",
    "only if",
    // comparison
    "comparatively",
    "correspondingly",
    "identically",
    "similar",
    "compared to",
    "in comparison",
    "just as",
    "in like manner",
    // place
    "here",
    "there",
    "beyond",
    "nearby",
    "above",
    "below",
    "opposite",
    "adjacent",
    // summary and conclusion
    "overall",
    "ultimately",
    "briefly",
    "altogether",
    "summarizing",
    "essentially",
    "generally",
    "basically",
    "typically",
    "usually",
    "in conclusion",
    "to conclude",
    "in summary",
    "to summarize",
    "in short",
    "in brief",
    "all in all",
    "on the whole",
    "in general",
    "as shown",
    "as a rule",
    "by and large",
    "for the most part",
    "in any case",
    "in any event",
    "to sum up",
    "as noted",
    "given these points",
];

static DICTIONARY: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TRANSITION_WORDS.iter().copied().collect());

/// Whether a single lowercase token is a dictionary entry.
pub fn is_transition_word(token: &str) -> bool {
    DICTIONARY.contains(token)
}

/// Count whitespace tokens of `text` that are transition words.
///
/// Tokens keep any attached punctuation, so `"However,"` does not count.
pub fn count_transition_words(text: &str) -> usize {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| is_transition_word(token))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_has_no_duplicates() {
        assert_eq!(DICTIONARY.len(), TRANSITION_WORDS.len());
    }

    #[test]
    fn dictionary_is_lowercase() {
        for entry in TRANSITION_WORDS {
            assert_eq!(*entry, entry.to_lowercase());
        }
    }

    #[test]
    fn dictionary_size() {
        assert!(TRANSITION_WORDS.len() >= 190);
        assert!(TRANSITION_WORDS.len() <= 230);
    }

    #[test]
    fn counts_single_words_case_insensitively() {
        assert_eq!(count_transition_words("HOWEVER we agreed. Therefore done"), 2);
    }

    #[test]
    fn attached_punctuation_prevents_a_match() {
        assert_eq!(count_transition_words("However, it works."), 0);
    }

    #[test]
    fn empty_text_has_no_transitions() {
        assert_eq!(count_transition_words(""), 0);
    }

    // Known behaviour: phrases are dictionary entries but tokens never contain
    // spaces, so they never match.
    #[test]
    fn multi_word_phrases_never_match() {
        assert_eq!(count_transition_words("in conclusion"), 0);
        assert_eq!(count_transition_words("for example"), 0);
        assert_eq!(count_transition_words("on the other hand"), 0);
        assert!(is_transition_word("in conclusion"));
    }
}
