//! The rewriting pass.
//!
//! Steps, in order:
//! 1. split into sentences
//! 2. per sentence, with probability 0.4: casual opener, contractions, connective synonyms
//! 3. per sentence after the first, with probability 0.2: transition phrase
//! 4. join with single spaces
//! 5. paragraph breaks every `k` fragments, `k` drawn once from {2, 3, 4}
//! 6. terminal punctuation guaranteed
//! 7. with probability 0.3: closing encouragement

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::phrases::{
    CASUAL_LEADS, CONNECTIVES, CONTRACTIONS, ENCOURAGEMENTS, ENCOURAGEMENT_PROBABILITY, OPENERS,
    PARAGRAPH_BREAK, PARAGRAPH_STRIDES, REWRITE_PROBABILITY, TRANSITIONS, TRANSITION_PROBABILITY,
};
use crate::random::{choose, RandomSource};
use crate::segment::{split_paragraph_fragments, split_sentences};

// ─────────────────────────────────────────────
// Humanizer
// ─────────────────────────────────────────────

/// Config-gated entry point. When disabled, text passes through untouched.
#[derive(Clone, Copy, Debug)]
pub struct Humanizer {
    enabled: bool,
}

impl Humanizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Rewrite `text` with the thread-local generator, if enabled.
    pub fn apply(&self, text: &str) -> String {
        if self.enabled {
            humanize(text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Humanizer {
    fn default() -> Self {
        Self::new(true)
    }
}

// ─────────────────────────────────────────────
// Transducer
// ─────────────────────────────────────────────

/// Rewrite `text` using the thread-local generator.
///
/// Repeated calls on the same input are not expected to agree.
pub fn humanize(text: &str) -> String {
    humanize_with(text, &mut rand::rng())
}

/// Rewrite `text`, drawing every random decision from `rng`.
///
/// Blank input is returned unchanged. Sentence order is preserved and no
/// sentence is dropped; non-blank output always ends in `.`, `!` or `?`.
pub fn humanize_with<R>(text: &str, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let sentences = split_sentences(text);
    if text.trim().is_empty() || sentences.is_empty() {
        return text.to_string();
    }

    let mut rewritten: Vec<String> = sentences
        .iter()
        .map(|sentence| {
            if rng.chance(REWRITE_PROBABILITY) {
                rewrite_sentence(sentence, rng)
            } else {
                sentence.to_string()
            }
        })
        .collect();

    for sentence in rewritten.iter_mut().skip(1) {
        if rng.chance(TRANSITION_PROBABILITY) {
            sentence.insert_str(0, choose(rng, TRANSITIONS));
        }
    }

    let joined = rewritten.join(" ");
    let mut output = insert_paragraph_breaks(&joined, rng);

    ensure_terminal_punctuation(&mut output);

    if rng.chance(ENCOURAGEMENT_PROBABILITY) {
        output.push(' ');
        output.push_str(choose(rng, ENCOURAGEMENTS));
    }

    output
}

/// Opener swap, contractions, then connective synonyms.
fn rewrite_sentence<R>(sentence: &str, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let mut text = match OPENERS.iter().find(|opener| sentence.starts_with(**opener)) {
        Some(opener) => format!(
            "{}{}{}",
            choose(rng, CASUAL_LEADS),
            opener.to_lowercase(),
            &sentence[opener.len()..]
        ),
        None => sentence.to_string(),
    };

    for (formal, casual) in CONTRACTIONS {
        if text.contains(formal) {
            text = text.replace(formal, casual);
        }
    }

    for (pattern, synonyms) in CONNECTIVE_PATTERNS.iter() {
        if pattern.is_match(&text) {
            let synonym = choose(rng, synonyms);
            text = pattern
                .replace_all(&text, |caps: &Captures| match_case(&caps[0], synonym))
                .into_owned();
        }
    }

    text
}

// One case-insensitive, whole-word pattern per connective.
static CONNECTIVE_PATTERNS: LazyLock<Vec<(Regex, &'static [&'static str])>> =
    LazyLock::new(|| {
        CONNECTIVES
            .iter()
            .filter_map(|(word, synonyms)| {
                Regex::new(&format!(r"(?i)\b{word}\b"))
                    .ok()
                    .map(|re| (re, *synonyms))
            })
            .collect()
    });

/// Carry a leading capital from `original` over to `replacement`.
fn match_case(original: &str, replacement: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }

    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Insert a paragraph break before every `k`-th fragment.
fn insert_paragraph_breaks<R>(text: &str, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let stride = PARAGRAPH_STRIDES
        .get(rng.pick(PARAGRAPH_STRIDES.len()))
        .copied()
        .unwrap_or(PARAGRAPH_STRIDES[0]);

    let fragments = split_paragraph_fragments(text);
    let mut output = String::with_capacity(text.len() + fragments.len() * PARAGRAPH_BREAK.len());

    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 && i % stride == 0 {
            output.push_str(PARAGRAPH_BREAK);
        }
        output.push_str(fragment);
    }

    output
}

/// Trim trailing whitespace and end the text with a period if it has no
/// terminal punctuation.
fn ensure_terminal_punctuation(text: &mut String) {
    text.truncate(text.trim_end().len());
    if !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Every uniform draw lands on the same value `u` in `[0, 1)`.
    struct FixedRoll(f64);

    impl RandomSource for FixedRoll {
        fn chance(&mut self, probability: f64) -> bool {
            self.0 < probability
        }

        fn pick(&mut self, len: usize) -> usize {
            ((self.0 * len as f64) as usize).min(len - 1)
        }
    }

    // 0.3: rewrites (0.3 < 0.4), never a transition (0.3 >= 0.2), no closing line.
    fn rewrite_no_transition() -> FixedRoll {
        FixedRoll(0.3)
    }

    fn never() -> FixedRoll {
        FixedRoll(0.99)
    }

    const SAMPLES: &[&str] = &[
        "The results are not conclusive. However, further study is needed.",
        "It is not clear whether the effect holds. Therefore, we repeat the trial! \
         Additionally, the sample is small. This matters? Moreover the data are not public.",
        "Renewable energy adoption grew in 2023. Solar led the way. Wind followed. \
         Storage remains costly. Policy support varies. Grid upgrades lag behind. \
         Investors do not agree on timelines. Consequently, forecasts differ.",
        "single clause with no punctuation",
        "Trailing whitespace.   \n",
    ];

    fn sentence_count(text: &str) -> usize {
        split_sentences(text.trim()).len()
    }

    fn words(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
        let mut it = haystack.iter();
        needle.iter().all(|n| it.any(|h| h == n))
    }

    // ── Scenario ──

    #[test]
    fn test_forced_rewrite_scenario() {
        let input = "The results are not conclusive. However, further study is needed.";
        let output = humanize_with(input, &mut rewrite_no_transition());

        assert!(
            ["Well, the results", "You see, the results", "Interestingly, the results"]
                .iter()
                .any(|p| output.starts_with(p)),
            "{output}"
        );
        assert!(output.contains("aren't"));
        assert!(!output.contains("are not"));
        assert!(!output.contains("However"));
        assert!(output.contains("That said, further study is needed."));
    }

    #[test]
    fn test_forced_rewrite_is_not() {
        let output = humanize_with(
            "Gravity is not optional. We do not float.",
            &mut rewrite_no_transition(),
        );
        assert_eq!(output, "Gravity isn't optional. We don't float.");
    }

    #[test]
    fn test_no_branch_taken_is_identity() {
        let input = "The sky is not green. It is blue.";
        assert_eq!(humanize_with(input, &mut never()), input);
    }

    #[test]
    fn test_opener_only_at_sentence_start() {
        let output = humanize_with("Read the paper. This is key.", &mut rewrite_no_transition());
        assert_eq!(output, "Read the paper. Well, this is key.");
    }

    #[test]
    fn test_connective_lowercase_and_whole_word() {
        let output = humanize_with(
            "We tried; however it failed. Howeverish stays.",
            &mut rewrite_no_transition(),
        );
        assert!(output.contains("We tried; that said it failed."));
        assert!(output.contains("Howeverish stays."));
    }

    #[test]
    fn test_contractions_are_case_sensitive() {
        let output = humanize_with("They Do Not know. Is not it.", &mut rewrite_no_transition());
        assert!(output.contains("They Do Not know."));
    }

    /// Fires only the transition branch and always picks index 1.
    struct TransitionOnly;

    impl RandomSource for TransitionOnly {
        fn chance(&mut self, probability: f64) -> bool {
            probability == TRANSITION_PROBABILITY
        }

        fn pick(&mut self, len: usize) -> usize {
            1_usize.min(len - 1)
        }
    }

    #[test]
    fn test_transition_inserted_after_first_sentence_only() {
        let output = humanize_with("One fact. Two facts.", &mut TransitionOnly);
        assert_eq!(output, "One fact. Also, Two facts.");
    }

    #[test]
    fn test_empty_transition_is_noop() {
        // 0.1 fires every branch; pick(4) = 0 is the empty transition.
        let output = humanize_with("One fact. Two facts.", &mut FixedRoll(0.1));
        assert!(output.starts_with("One fact. Two facts. "), "{output}");
    }

    #[test]
    fn test_paragraph_breaks_every_stride() {
        // pick(3) = 0 → stride 2; the rewrite fires but has nothing to change.
        let input = "Aa. Bb. Cc. Dd. Ee.";
        let output = humanize_with(input, &mut rewrite_no_transition());
        assert_eq!(output, "Aa. Bb. \n\nCc. Dd. \n\nEe.");
    }

    #[test]
    fn test_appends_period_when_missing() {
        let output = humanize_with("no punctuation here", &mut never());
        assert_eq!(output, "no punctuation here.");
    }

    #[test]
    fn test_closing_encouragement() {
        let output = humanize_with("Short answer.", &mut FixedRoll(0.0));
        assert!(ENCOURAGEMENTS.iter().any(|e| output.ends_with(e)), "{output}");
        assert!(output.starts_with("Short answer. "));
    }

    #[test]
    fn test_match_case() {
        assert_eq!(match_case("However", "that said"), "That said");
        assert_eq!(match_case("however", "that said"), "that said");
        assert_eq!(match_case("HOWEVER", "so"), "So");
    }

    #[test]
    fn test_humanizer_disabled_passthrough() {
        let humanizer = Humanizer::new(false);
        assert!(!humanizer.is_enabled());
        assert_eq!(humanizer.apply("left alone"), "left alone");
    }

    #[test]
    fn test_humanizer_enabled_terminates_sentence() {
        let output = Humanizer::default().apply("The model said hello");
        assert!(output.ends_with(['.', '!', '?']));
    }

    // ── Properties ──

    #[test]
    fn test_property_sentence_count_never_shrinks() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            for input in SAMPLES {
                let output = humanize_with(input, &mut rng);
                assert!(
                    sentence_count(&output) >= sentence_count(input),
                    "seed {seed}: {input:?} -> {output:?}"
                );
            }
        }
    }

    #[test]
    fn test_property_content_preserved_in_order() {
        let substituted: Vec<&str> = CONNECTIVES
            .iter()
            .map(|(word, _)| *word)
            .chain(["do", "is", "are", "not"])
            .collect();

        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            for input in SAMPLES {
                let output = humanize_with(input, &mut rng);
                let expected: Vec<String> = words(input)
                    .into_iter()
                    .filter(|w| !substituted.contains(&w.as_str()))
                    .collect();
                assert!(
                    is_subsequence(&expected, &words(&output)),
                    "seed {seed}: {input:?} -> {output:?}"
                );
            }
        }
    }

    #[test]
    fn test_property_deterministic_with_seed() {
        for seed in [0_u64, 1, 42, 9_999] {
            for input in SAMPLES {
                let a = humanize_with(input, &mut StdRng::seed_from_u64(seed));
                let b = humanize_with(input, &mut StdRng::seed_from_u64(seed));
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_property_terminal_punctuation() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            for input in SAMPLES {
                let output = humanize_with(input, &mut rng);
                assert!(output.ends_with(['.', '!', '?']), "{output:?}");
            }
        }
    }

    #[test]
    fn test_property_blank_input() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(humanize_with("", &mut rng), "");
        assert_eq!(humanize_with("  \n\t", &mut rng), "  \n\t");
        assert_eq!(humanize(""), "");
    }
}
