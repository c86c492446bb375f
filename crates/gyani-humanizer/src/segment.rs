//! Sentence and paragraph segmentation.

use std::sync::LazyLock;

use regex::Regex;

// Terminal punctuation followed by a whitespace run. The punctuation is one
// byte, so a sentence ends at `m.start() + 1`.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern"));

// A period, whitespace, then an ASCII capital. The fragment boundary sits
// right before the capital.
static PARAGRAPH_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+[A-Z]").expect("paragraph boundary pattern"));

/// Split text into sentences.
///
/// The punctuation stays with its sentence; the whitespace after it is
/// dropped. A trailing empty remainder is not a sentence.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BOUNDARY.find_iter(text) {
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// Split joined text into fragments for paragraph breaking.
///
/// Concatenating the fragments gives back `text` exactly: each fragment keeps
/// its trailing period and whitespace.
pub(crate) fn split_paragraph_fragments(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for m in PARAGRAPH_BOUNDARY.find_iter(text) {
        let boundary = m.end() - 1;
        fragments.push(&text[start..boundary]);
        start = boundary;
    }
    fragments.push(&text[start..]);

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_punctuation() {
        assert_eq!(
            split_sentences("First one. Second one! Third? Done."),
            vec!["First one.", "Second one!", "Third?", "Done."]
        );
    }

    #[test]
    fn test_split_consumes_whitespace_runs() {
        assert_eq!(
            split_sentences("One.\n\nTwo.   Three."),
            vec!["One.", "Two.", "Three."]
        );
    }

    #[test]
    fn test_split_requires_whitespace_after_punctuation() {
        assert_eq!(
            split_sentences("Version 3.14 is out. See example.com now"),
            vec!["Version 3.14 is out.", "See example.com now"]
        );
    }

    #[test]
    fn test_split_trailing_whitespace_is_not_a_sentence() {
        assert_eq!(split_sentences("Only one. "), vec!["Only one."]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_fragments_rejoin_exactly() {
        let text = "Alpha beta. Gamma delta. epsilon. Zeta! Eta.";
        let fragments = split_paragraph_fragments(text);
        assert_eq!(
            fragments,
            vec!["Alpha beta. ", "Gamma delta. epsilon. ", "Zeta! Eta."]
        );
        assert_eq!(fragments.concat(), text);
    }

    #[test]
    fn test_fragments_single() {
        assert_eq!(split_paragraph_fragments("no breaks here"), vec!["no breaks here"]);
    }

    #[test]
    fn test_fragments_single_letter_sentences() {
        let fragments = split_paragraph_fragments("A. B. C.");
        assert_eq!(fragments, vec!["A. ", "B. ", "C."]);
    }
}
