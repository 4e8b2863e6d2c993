//! Answer normalization for vocabulary comparison.
//!
//! This module handles the first step of comparing learner-typed answers against
//! expected translations. It forgives casing and Italian accents while staying
//! strict on everything else, so the actual vocabulary knowledge is still
//! verified.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Vowels whose grave or acute accent is folded away.
const FOLDED_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// U+0300 COMBINING GRAVE ACCENT and U+0301 COMBINING ACUTE ACCENT.
const FOLDED_MARKS: &[char] = &['\u{300}', '\u{301}'];

static APOSTROPHE_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'\s+").expect("apostrophe pattern is valid"));

/// Normalize a string for answer comparison.
///
/// Applies the following transformations in order:
/// 1. Lowercase
/// 2. Unicode NFD decomposition, so `è` becomes `e` + combining grave
/// 3. Drop grave and acute marks attached to `a`, `e`, `i`, `o`, `u`
/// 4. Unicode NFC recomposition of every other mark (`ñ`, `ü` survive)
/// 5. Trim surrounding whitespace
/// 6. Collapse whitespace after an apostrophe (`"l' isola"` -> `"l'isola"`)
///
/// This means `"Caffè"` and `"caffe"` match, `"l' isola"` and `"l'isola"` match,
/// but `"chat"` and `"chats"` do not. Normalizing twice yields the same result
/// as normalizing once, since no folded mark survives step 3.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut folded = String::with_capacity(lowered.len());
    let mut after_vowel = false;
    for c in lowered.nfd() {
        // Stacked marks (`è` + U+0301) are all dropped
        if after_vowel && FOLDED_MARKS.contains(&c) {
            continue;
        }
        after_vowel = FOLDED_VOWELS.contains(&c);
        folded.push(c);
    }

    let composed = folded.nfc().collect::<String>();

    APOSTROPHE_SPACING
        .replace_all(composed.trim(), "'")
        .into_owned()
}

/// Remove every ASCII punctuation character.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Basic behavior ---

    #[test]
    fn test_identity() {
        assert_eq!(normalize("hello"), "hello");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize("Speak"), normalize("speak"));
        assert_eq!(normalize("CITTÀ"), "citta");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize("  month  "), "month");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    // --- Italian accents ---

    #[test]
    fn test_grave_and_acute_accents() {
        assert_eq!(normalize("caffè"), "caffe");
        assert_eq!(normalize("perché"), "perche");
        assert_eq!(normalize("città"), "citta");
        assert_eq!(normalize("così"), "cosi");
        assert_eq!(normalize("però"), "pero");
        assert_eq!(normalize("più"), "piu");
        assert_eq!(normalize("á í ó ú"), "a i o u");
    }

    #[test]
    fn test_decomposed_accents_are_folded() {
        // "e" followed by U+0300 COMBINING GRAVE ACCENT
        assert_eq!(normalize("caffe\u{300}"), "caffe");
    }

    #[test]
    fn test_stacked_accents_are_folded_at_once() {
        assert_eq!(normalize("caffè\u{301}"), "caffe");
        assert_eq!(normalize("CAFFÈ\u{301}"), "caffe");
        assert_eq!(normalize("pero\u{300}\u{301}"), "pero");
    }

    #[test]
    fn test_only_italian_vowels_are_folded() {
        assert_eq!(normalize("niño"), "niño");
        assert_eq!(normalize("über"), "über");
    }

    // --- Apostrophes ---

    #[test]
    fn test_apostrophe_spacing_collapsed() {
        assert_eq!(normalize("l' isola"), normalize("l'isola"));
        assert_eq!(normalize("dell'   acqua"), "dell'acqua");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "  Caffè ",
            "L'  Isola",
            "Non vado MAI al cinema.",
            "twenty-seven",
            "' leading",
            "caffè\u{301}",
            "e\u{301}\u{300}\u{301}",
            "nin\u{303}o",
            "",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    // --- Things that should NOT match ---

    #[test]
    fn test_different_words_do_not_match() {
        assert_ne!(normalize("chat"), normalize("chats"));
        assert_ne!(normalize("il"), normalize("la"));
    }

    // --- Helpers ---

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(
            strip_punctuation("non vado mai al cinema."),
            "non vado mai al cinema"
        );
        assert_eq!(strip_punctuation("l'isola, sì!"), "lisola sì");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a   b \t c "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }
}
