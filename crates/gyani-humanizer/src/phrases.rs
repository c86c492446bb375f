//! Fixed phrase tables.

/// Chance that a sentence gets the opener/contraction/connective rewrite.
pub(crate) const REWRITE_PROBABILITY: f64 = 0.4;
/// Chance that a non-first sentence gets a transition phrase.
pub(crate) const TRANSITION_PROBABILITY: f64 = 0.2;
/// Chance that a closing line is appended.
pub(crate) const ENCOURAGEMENT_PROBABILITY: f64 = 0.3;

/// Sentence openers eligible for a casual lead-in.
pub(crate) const OPENERS: &[&str] = &["The ", "It ", "This "];

pub(crate) const CASUAL_LEADS: &[&str] = &["Well, ", "You see, ", "Interestingly, "];

/// Literal, space-bounded, case-sensitive substitutions.
pub(crate) const CONTRACTIONS: &[(&str, &str)] = &[
    (" do not ", " don't "),
    (" is not ", " isn't "),
    (" are not ", " aren't "),
];

/// Formal connective → informal synonyms.
pub(crate) const CONNECTIVES: &[(&str, &[&str])] = &[
    ("however", &["that said", "still", "even so"]),
    ("therefore", &["so", "because of this", "that's why"]),
    ("additionally", &["also", "plus", "on top of that"]),
    ("furthermore", &["what's more", "besides", "also"]),
    ("moreover", &["plus", "besides", "what's more"]),
    ("consequently", &["as a result", "so", "because of that"]),
    ("nevertheless", &["still", "even so", "all the same"]),
];

/// The empty entry is a deliberate no-op.
pub(crate) const TRANSITIONS: &[&str] = &["", "Also, ", "Plus, ", "On top of that, "];

/// Sentences per paragraph; one is drawn per call.
pub(crate) const PARAGRAPH_STRIDES: &[usize] = &[2, 3, 4];

pub(crate) const PARAGRAPH_BREAK: &str = "\n\n";

/// Every entry ends with terminal punctuation.
pub(crate) const ENCOURAGEMENTS: &[&str] = &[
    "Hope this helps!",
    "Keep up the great work!",
    "You've got this!",
    "Good luck with your research!",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encouragements_end_with_terminal_punctuation() {
        for phrase in ENCOURAGEMENTS {
            assert!(phrase.ends_with(['.', '!', '?']), "{phrase}");
        }
    }

    #[test]
    fn test_inserted_phrases_have_no_terminal_punctuation() {
        for phrase in TRANSITIONS.iter().chain(CASUAL_LEADS) {
            assert!(!phrase.contains(['.', '!', '?']), "{phrase}");
        }
        for (_, synonyms) in CONNECTIVES {
            for synonym in *synonyms {
                assert!(!synonym.contains(['.', '!', '?']), "{synonym}");
            }
        }
    }

    #[test]
    fn test_transitions_include_noop() {
        assert!(TRANSITIONS.contains(&""));
        assert_eq!(TRANSITIONS.len(), 4);
    }
}
